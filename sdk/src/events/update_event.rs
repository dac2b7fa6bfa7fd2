use crate::error::Error;
use crate::events::{MAX_LOCATION_LENGTH, MAX_TITLE_LENGTH};
use crate::models::event::EventId;
use crate::validatable::Validatable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `UpdateEvent` command patches an existing event. Only the provided fields
/// are sent; at least one field must be provided.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateEvent {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dresscode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Validatable<Error> for UpdateEvent {
    fn validate(&self) -> Result<(), Error> {
        if self.title.is_none()
            && self.location.is_none()
            && self.starts_at.is_none()
            && self.ends_at.is_none()
            && self.dresscode.is_none()
            && self.metadata.is_none()
        {
            return Err(Error::EmptyUpdate);
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() || title.len() > MAX_TITLE_LENGTH {
                return Err(Error::InvalidEventTitle);
            }
        }

        if let Some(location) = &self.location {
            if location.trim().is_empty() || location.len() > MAX_LOCATION_LENGTH {
                return Err(Error::InvalidEventLocation);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_update_without_fields() {
        let command = UpdateEvent {
            event_id: 1,
            ..Default::default()
        };
        assert!(matches!(command.validate(), Err(Error::EmptyUpdate)));
    }

    #[test]
    fn should_accept_partial_update() {
        let command = UpdateEvent {
            event_id: 1,
            title: Some("New title".to_string()),
            ..Default::default()
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn should_not_serialize_event_id() {
        let command = UpdateEvent {
            event_id: 1,
            title: Some("New title".to_string()),
            ..Default::default()
        };
        let payload = serde_json::to_value(command).unwrap();
        assert!(payload.get("event_id").is_none());
        assert_eq!(payload.get("title").unwrap(), "New title");
    }
}
