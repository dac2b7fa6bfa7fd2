use crate::contributions::MAX_ITEM_NAME_LENGTH;
use crate::error::Error;
use crate::models::event::EventId;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `CreateContribution` command adds an item the caller brings to an event.
/// It has additional payload:
/// - `item_name` - what is brought, must be between 1 and 200 characters long.
/// - `quantity` - optional count, must be at least 1 when provided.
/// - `notes` - optional free-form note.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateContribution {
    #[serde(skip)]
    pub event_id: EventId,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validatable<Error> for CreateContribution {
    fn validate(&self) -> Result<(), Error> {
        if self.item_name.trim().is_empty() || self.item_name.len() > MAX_ITEM_NAME_LENGTH {
            return Err(Error::InvalidItemName);
        }

        if self.quantity == Some(0) {
            return Err(Error::InvalidQuantity);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_contribution() {
        let command = CreateContribution {
            event_id: 1,
            item_name: "Potato salad".to_string(),
            quantity: Some(2),
            notes: None,
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn should_reject_blank_item_name() {
        let command = CreateContribution {
            event_id: 1,
            item_name: " ".to_string(),
            quantity: None,
            notes: None,
        };
        assert!(matches!(command.validate(), Err(Error::InvalidItemName)));
    }
}
