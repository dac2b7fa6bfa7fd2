use crate::client::CustomFieldClient;
use crate::custom_fields::create_custom_field::CreateCustomField;
use crate::custom_fields::get_custom_fields::GetCustomFields;
use crate::error::Error;
use crate::http::client::HttpClient;
use crate::models::custom_field::CustomFieldDefinition;
use crate::models::event::EventId;
use crate::models::pagination::Paginated;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/api/events";

#[async_trait]
impl CustomFieldClient for HttpClient {
    async fn get_custom_fields(
        &self,
        command: &GetCustomFields,
    ) -> Result<Paginated<CustomFieldDefinition>, Error> {
        command.validate()?;
        let response = self
            .get_with_query(&get_custom_fields_path(command.event_id), &command)
            .await?;
        let fields = response.json().await?;
        Ok(fields)
    }

    async fn create_custom_field(
        &self,
        command: &CreateCustomField,
    ) -> Result<CustomFieldDefinition, Error> {
        command.validate()?;
        let response = self
            .post(&get_custom_fields_path(command.event_id), &command)
            .await?;
        let field = response.json().await?;
        Ok(field)
    }
}

fn get_custom_fields_path(event_id: EventId) -> String {
    format!("{}/{}/custom-fields", PATH, event_id)
}
