use crate::auth::login_user::LoginUser;
use crate::auth::register_user::RegisterUser;
use crate::contributions::create_contribution::CreateContribution;
use crate::contributions::get_contributions::GetContributions;
use crate::custom_fields::create_custom_field::CreateCustomField;
use crate::custom_fields::get_custom_fields::GetCustomFields;
use crate::error::Error;
use crate::events::create_event::CreateEvent;
use crate::events::get_event::GetEvent;
use crate::events::get_events::GetEvents;
use crate::events::get_participants::GetParticipants;
use crate::events::update_event::UpdateEvent;
use crate::invites::respond_to_invite::RespondToInvite;
use crate::invites::send_invites::SendInvites;
use crate::models::contribution::Contribution;
use crate::models::custom_field::CustomFieldDefinition;
use crate::models::event::Event;
use crate::models::pagination::Paginated;
use crate::models::participation::Participation;
use crate::models::poll::{Poll, PollResults, VoteReceipt};
use crate::models::user_info::UserInfo;
use crate::participations::update_my_participation::UpdateMyParticipation;
use crate::polls::create_poll::CreatePoll;
use crate::polls::get_poll_results::GetPollResults;
use crate::polls::get_polls::GetPolls;
use crate::polls::vote_poll::VotePoll;
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait Client:
    AuthClient
    + EventClient
    + ParticipationClient
    + ContributionClient
    + PollClient
    + CustomFieldClient
    + InviteClient
    + Sync
    + Send
    + Debug
{
    /// Reconciles persisted credentials into a live identity. Must complete
    /// before protected calls are issued; returns the restored identity, or
    /// `None` for a clean logged-out state.
    async fn restore_session(&self) -> Option<UserInfo>;
    fn current_user(&self) -> Option<UserInfo>;
    fn is_authenticated(&self) -> bool;
    fn logout(&self);
}

#[async_trait]
pub trait AuthClient {
    async fn register_user(&self, command: &RegisterUser) -> Result<UserInfo, Error>;
    async fn login_user(&self, command: &LoginUser) -> Result<UserInfo, Error>;
}

#[async_trait]
pub trait EventClient {
    async fn get_events(&self, command: &GetEvents) -> Result<Paginated<Event>, Error>;
    async fn get_event(&self, command: &GetEvent) -> Result<Event, Error>;
    async fn create_event(&self, command: &CreateEvent) -> Result<Event, Error>;
    async fn update_event(&self, command: &UpdateEvent) -> Result<Event, Error>;
    async fn get_participants(
        &self,
        command: &GetParticipants,
    ) -> Result<Paginated<Participation>, Error>;
}

#[async_trait]
pub trait ParticipationClient {
    async fn update_my_participation(
        &self,
        command: &UpdateMyParticipation,
    ) -> Result<Participation, Error>;
}

#[async_trait]
pub trait ContributionClient {
    async fn get_contributions(
        &self,
        command: &GetContributions,
    ) -> Result<Paginated<Contribution>, Error>;
    async fn create_contribution(&self, command: &CreateContribution)
        -> Result<Contribution, Error>;
}

#[async_trait]
pub trait PollClient {
    async fn get_polls(&self, command: &GetPolls) -> Result<Paginated<Poll>, Error>;
    async fn create_poll(&self, command: &CreatePoll) -> Result<Poll, Error>;
    async fn vote_poll(&self, command: &VotePoll) -> Result<VoteReceipt, Error>;
    async fn get_poll_results(&self, command: &GetPollResults) -> Result<PollResults, Error>;
}

#[async_trait]
pub trait CustomFieldClient {
    async fn get_custom_fields(
        &self,
        command: &GetCustomFields,
    ) -> Result<Paginated<CustomFieldDefinition>, Error>;
    async fn create_custom_field(
        &self,
        command: &CreateCustomField,
    ) -> Result<CustomFieldDefinition, Error>;
}

#[async_trait]
pub trait InviteClient {
    async fn send_invites(&self, command: &SendInvites) -> Result<(), Error>;
    async fn respond_to_invite(&self, command: &RespondToInvite) -> Result<(), Error>;
}
