use crate::error::Error;
use crate::models::event::EventId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `GetCustomFields` command lists the custom field definitions of an event.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GetCustomFields {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Validatable<Error> for GetCustomFields {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}
