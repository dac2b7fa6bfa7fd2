use crate::custom_fields::{MAX_KEY_LENGTH, MAX_LABEL_LENGTH};
use crate::error::Error;
use crate::models::custom_field::CustomFieldType;
use crate::models::event::EventId;
use crate::utils::text;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `CreateCustomField` command defines an extra question participants answer
/// when they RSVP. It has additional payload:
/// - `key` - machine name, letters/digits/underscore/dash, up to 64 characters.
/// - `label` - human-readable label, must be between 1 and 200 characters long.
/// - `field_type` - text, number, bool or enum.
/// - `required` - whether an answer is mandatory.
/// - `options` - the allowed values, required for enum fields.
/// - `position` - optional ordering hint.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateCustomField {
    #[serde(skip)]
    pub event_id: EventId,
    pub key: String,
    pub label: String,
    pub field_type: CustomFieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Validatable<Error> for CreateCustomField {
    fn validate(&self) -> Result<(), Error> {
        if self.key.is_empty()
            || self.key.len() > MAX_KEY_LENGTH
            || !text::is_field_key_valid(&self.key)
        {
            return Err(Error::InvalidFieldKey);
        }

        if self.label.trim().is_empty() || self.label.len() > MAX_LABEL_LENGTH {
            return Err(Error::InvalidFieldLabel);
        }

        if self.field_type == CustomFieldType::Enum {
            let has_options = self
                .options
                .as_ref()
                .is_some_and(|options| !options.is_empty());
            if !has_options {
                return Err(Error::InvalidFieldOptions);
            }
        }

        if let Some(options) = &self.options {
            if options.iter().any(|option| option.trim().is_empty()) {
                return Err(Error::InvalidFieldOptions);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateCustomField {
        CreateCustomField {
            event_id: 1,
            key: "shirt_size".to_string(),
            label: "Shirt size".to_string(),
            field_type: CustomFieldType::Enum,
            required: Some(true),
            options: Some(vec!["S".to_string(), "M".to_string(), "L".to_string()]),
            position: None,
        }
    }

    #[test]
    fn should_accept_valid_field() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn should_reject_enum_field_without_options() {
        let command = CreateCustomField {
            options: None,
            ..command()
        };
        assert!(matches!(
            command.validate(),
            Err(Error::InvalidFieldOptions)
        ));
    }

    #[test]
    fn should_reject_key_with_spaces() {
        let command = CreateCustomField {
            key: "shirt size".to_string(),
            ..command()
        };
        assert!(matches!(command.validate(), Err(Error::InvalidFieldKey)));
    }
}
