use crate::error::Error;
use crate::models::event::EventId;
use crate::models::participation::RsvpStatus;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `GetParticipants` command lists the participants of an event, optionally
/// filtered by RSVP status.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GetParticipants {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<RsvpStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Validatable<Error> for GetParticipants {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}
