use crate::error::Error;
use crate::models::event::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CustomFieldType {
    Text,
    Number,
    Bool,
    Enum,
}

impl FromStr for CustomFieldType {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "text" => Ok(CustomFieldType::Text),
            "number" => Ok(CustomFieldType::Number),
            "bool" => Ok(CustomFieldType::Bool),
            "enum" => Ok(CustomFieldType::Enum),
            _ => Err(Error::InvalidFieldType),
        }
    }
}

impl Display for CustomFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomFieldType::Text => write!(f, "text"),
            CustomFieldType::Number => write!(f, "number"),
            CustomFieldType::Bool => write!(f, "bool"),
            CustomFieldType::Enum => write!(f, "enum"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldDefinition {
    pub id: u64,
    pub event: EventId,
    pub key: String,
    pub label: String,
    pub field_type: CustomFieldType,
    pub required: bool,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    pub position: u32,
    pub created_at: DateTime<Utc>,
}

/// A participant's answer to one custom field. The value is kept as raw JSON
/// because its shape depends on the field type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub id: u64,
    pub definition: u64,
    pub definition_key: String,
    pub value: Value,
}
