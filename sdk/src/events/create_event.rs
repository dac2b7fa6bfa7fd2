use crate::error::Error;
use crate::events::{MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH};
use crate::validatable::Validatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `CreateEvent` command is used to create a new event. It has additional
/// payload:
/// - `title` - title of the event, must be between 1 and 200 characters long.
/// - `location` - where the event takes place, must be between 1 and 200 characters long.
/// - `starts_at` - when the event starts.
/// - `ends_at` - optional end time.
/// - `dresscode` - optional dress code shown to participants.
/// - `metadata` - optional free-form key/value payload.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateEvent {
    pub title: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dresscode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Validatable<Error> for CreateEvent {
    fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() || self.title.len() > MAX_TITLE_LENGTH {
            return Err(Error::InvalidEventTitle);
        }

        if self.location.trim().is_empty() || self.location.len() > MAX_LOCATION_LENGTH {
            return Err(Error::InvalidEventLocation);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn command() -> CreateEvent {
        CreateEvent {
            title: "Garden party".to_string(),
            location: "Backyard".to_string(),
            starts_at: Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap(),
            ends_at: None,
            dresscode: None,
            metadata: None,
        }
    }

    #[test]
    fn should_accept_valid_event() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn should_reject_blank_title() {
        let command = CreateEvent {
            title: "   ".to_string(),
            ..command()
        };
        assert!(matches!(command.validate(), Err(Error::InvalidEventTitle)));
    }

    #[test]
    fn should_reject_oversized_location() {
        let command = CreateEvent {
            location: "x".repeat(MAX_LOCATION_LENGTH + 1),
            ..command()
        };
        assert!(matches!(
            command.validate(),
            Err(Error::InvalidEventLocation)
        ));
    }

    #[test]
    fn should_skip_absent_fields_in_payload() {
        let payload = serde_json::to_value(command()).unwrap();
        assert!(payload.get("ends_at").is_none());
        assert!(payload.get("dresscode").is_none());
    }
}
