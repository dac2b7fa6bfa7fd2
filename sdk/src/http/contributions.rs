use crate::client::ContributionClient;
use crate::contributions::create_contribution::CreateContribution;
use crate::contributions::get_contributions::GetContributions;
use crate::error::Error;
use crate::http::client::HttpClient;
use crate::models::contribution::Contribution;
use crate::models::event::EventId;
use crate::models::pagination::Paginated;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/api/events";

#[async_trait]
impl ContributionClient for HttpClient {
    async fn get_contributions(
        &self,
        command: &GetContributions,
    ) -> Result<Paginated<Contribution>, Error> {
        command.validate()?;
        let response = self
            .get_with_query(&get_contributions_path(command.event_id), &command)
            .await?;
        let contributions = response.json().await?;
        Ok(contributions)
    }

    async fn create_contribution(
        &self,
        command: &CreateContribution,
    ) -> Result<Contribution, Error> {
        command.validate()?;
        let response = self
            .post(&get_contributions_path(command.event_id), &command)
            .await?;
        let contribution = response.json().await?;
        Ok(contribution)
    }
}

fn get_contributions_path(event_id: EventId) -> String {
    format!("{}/{}/contributions", PATH, event_id)
}
