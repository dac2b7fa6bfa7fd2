use crate::error::Error;
use crate::models::poll::PollId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `VotePoll` command casts the caller's vote. At least one option must be
/// selected; whether several are allowed is decided by the server from the
/// poll's `allows_multiple` flag.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VotePoll {
    #[serde(skip)]
    pub poll_id: PollId,
    pub option_ids: Vec<u64>,
}

impl Validatable<Error> for VotePoll {
    fn validate(&self) -> Result<(), Error> {
        if self.option_ids.is_empty() {
            return Err(Error::InvalidVote);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_vote() {
        let command = VotePoll {
            poll_id: 1,
            option_ids: vec![],
        };
        assert!(matches!(command.validate(), Err(Error::InvalidVote)));
    }
}
