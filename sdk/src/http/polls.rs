use crate::client::PollClient;
use crate::error::Error;
use crate::http::client::HttpClient;
use crate::models::pagination::Paginated;
use crate::models::poll::{Poll, PollResults, RawPollResults, VoteReceipt};
use crate::polls::create_poll::CreatePoll;
use crate::polls::get_poll_results::GetPollResults;
use crate::polls::get_polls::GetPolls;
use crate::polls::vote_poll::VotePoll;
use crate::validatable::Validatable;
use async_trait::async_trait;

const EVENTS_PATH: &str = "/api/events";
const POLLS_PATH: &str = "/api/polls";

#[async_trait]
impl PollClient for HttpClient {
    async fn get_polls(&self, command: &GetPolls) -> Result<Paginated<Poll>, Error> {
        command.validate()?;
        let path = format!("{}/{}/polls", EVENTS_PATH, command.event_id);
        let response = self.get_with_query(&path, &command).await?;
        let polls = response.json().await?;
        Ok(polls)
    }

    async fn create_poll(&self, command: &CreatePoll) -> Result<Poll, Error> {
        command.validate()?;
        let path = format!("{}/{}/polls", EVENTS_PATH, command.event_id);
        let response = self.post(&path, &command).await?;
        let poll = response.json().await?;
        Ok(poll)
    }

    async fn vote_poll(&self, command: &VotePoll) -> Result<VoteReceipt, Error> {
        command.validate()?;
        let path = format!("{}/{}/vote", POLLS_PATH, command.poll_id);
        let response = self.post(&path, &command).await?;
        let receipt = response.json().await?;
        Ok(receipt)
    }

    async fn get_poll_results(&self, command: &GetPollResults) -> Result<PollResults, Error> {
        command.validate()?;
        let path = format!("{}/{}/results", POLLS_PATH, command.poll_id);
        let response = self.get(&path).await?;
        let results: RawPollResults = response.json().await.map_err(|_| Error::InvalidResponse)?;
        Ok(results.into())
    }
}
