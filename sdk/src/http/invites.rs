use crate::client::InviteClient;
use crate::error::Error;
use crate::http::client::HttpClient;
use crate::invites::respond_to_invite::RespondToInvite;
use crate::invites::send_invites::SendInvites;
use crate::validatable::Validatable;
use async_trait::async_trait;

const EVENTS_PATH: &str = "/api/events";
const INVITES_PATH: &str = "/api/invites";

#[async_trait]
impl InviteClient for HttpClient {
    async fn send_invites(&self, command: &SendInvites) -> Result<(), Error> {
        command.validate()?;
        let path = format!("{}/{}/invites", EVENTS_PATH, command.event_id);
        self.post(&path, &command).await?;
        Ok(())
    }

    async fn respond_to_invite(&self, command: &RespondToInvite) -> Result<(), Error> {
        command.validate()?;
        let path = format!("{}/{}/respond", INVITES_PATH, command.invite_token);
        self.post(&path, &command).await?;
        Ok(())
    }
}
