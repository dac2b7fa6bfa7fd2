use crate::error::Error;
use crate::validatable::Validatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GetEvents` command lists events visible to the caller, with optional
/// search, location and start-time filters, one page at a time.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GetEvents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Validatable<Error> for GetEvents {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}
