use crate::error::Error;
use crate::models::poll::PollId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `GetPollResults` command fetches the aggregated results of a poll.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetPollResults {
    pub poll_id: PollId,
}

impl Validatable<Error> for GetPollResults {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}
