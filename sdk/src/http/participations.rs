use crate::client::ParticipationClient;
use crate::error::Error;
use crate::http::client::HttpClient;
use crate::models::participation::Participation;
use crate::participations::update_my_participation::UpdateMyParticipation;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/api/events";

#[async_trait]
impl ParticipationClient for HttpClient {
    async fn update_my_participation(
        &self,
        command: &UpdateMyParticipation,
    ) -> Result<Participation, Error> {
        command.validate()?;
        let path = format!("{}/{}/me", PATH, command.event_id);
        let response = self.patch(&path, &command).await?;
        let participation = response.json().await?;
        Ok(participation)
    }
}
