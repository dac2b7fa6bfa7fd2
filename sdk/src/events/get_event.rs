use crate::error::Error;
use crate::models::event::EventId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `GetEvent` command fetches a single event by its identifier.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GetEvent {
    pub event_id: EventId,
}

impl Validatable<Error> for GetEvent {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}
