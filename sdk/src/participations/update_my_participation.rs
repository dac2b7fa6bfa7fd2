use crate::contributions::MAX_ITEM_NAME_LENGTH;
use crate::error::Error;
use crate::models::event::EventId;
use crate::models::participation::RsvpStatus;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `UpdateMyParticipation` command patches the caller's own participation in
/// an event: RSVP status, plus-ones, allergies, notes, dress code
/// visibility, the contribution list and custom field answers. Only the
/// provided fields are sent; at least one field must be provided.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateMyParticipation {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp_status: Option<RsvpStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plus_one_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dresscode_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<ContributionEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_field_answers: Option<Map<String, Value>>,
}

/// One contribution item submitted inline with the participation update.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContributionEntry {
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validatable<Error> for UpdateMyParticipation {
    fn validate(&self) -> Result<(), Error> {
        if self.rsvp_status.is_none()
            && self.plus_one_count.is_none()
            && self.allergies.is_none()
            && self.notes.is_none()
            && self.dresscode_visible.is_none()
            && self.contributions.is_none()
            && self.custom_field_answers.is_none()
        {
            return Err(Error::EmptyUpdate);
        }

        if let Some(contributions) = &self.contributions {
            for entry in contributions {
                if entry.item_name.trim().is_empty()
                    || entry.item_name.len() > MAX_ITEM_NAME_LENGTH
                {
                    return Err(Error::InvalidItemName);
                }
                if entry.quantity == Some(0) {
                    return Err(Error::InvalidQuantity);
                }
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
        let command = UpdateMyParticipation {
            event_id: 1,
            ..Default::default()
        };
        assert!(matches!(command.validate(), Err(Error::EmptyUpdate)));
    }

    #[test]
    fn should_accept_rsvp_change() {
        let command = UpdateMyParticipation {
            event_id: 1,
            rsvp_status: Some(RsvpStatus::Accepted),
            ..Default::default()
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn should_reject_zero_quantity_contribution() {
        let command = UpdateMyParticipation {
            event_id: 1,
            contributions: Some(vec![ContributionEntry {
                item_name: "Cake".to_string(),
                quantity: Some(0),
                notes: None,
            }]),
            ..Default::default()
        };
        assert!(matches!(command.validate(), Err(Error::InvalidQuantity)));
    }
}
