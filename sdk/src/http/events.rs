use crate::client::EventClient;
use crate::error::Error;
use crate::events::create_event::CreateEvent;
use crate::events::get_event::GetEvent;
use crate::events::get_events::GetEvents;
use crate::events::get_participants::GetParticipants;
use crate::events::update_event::UpdateEvent;
use crate::http::client::HttpClient;
use crate::models::event::{Event, EventId};
use crate::models::pagination::{MaybePaginated, Paginated};
use crate::models::participation::Participation;
use crate::validatable::Validatable;
use async_trait::async_trait;

const PATH: &str = "/api/events";

#[async_trait]
impl EventClient for HttpClient {
    async fn get_events(&self, command: &GetEvents) -> Result<Paginated<Event>, Error> {
        command.validate()?;
        let response = self.get_with_query(PATH, &command).await?;
        let events = response.json().await?;
        Ok(events)
    }

    async fn get_event(&self, command: &GetEvent) -> Result<Event, Error> {
        command.validate()?;
        let response = self.get(&get_details_path(command.event_id)).await?;
        let event = response.json().await?;
        Ok(event)
    }

    async fn create_event(&self, command: &CreateEvent) -> Result<Event, Error> {
        command.validate()?;
        let response = self.post(PATH, &command).await?;
        let event = response.json().await?;
        Ok(event)
    }

    async fn update_event(&self, command: &UpdateEvent) -> Result<Event, Error> {
        command.validate()?;
        let response = self
            .patch(&get_details_path(command.event_id), &command)
            .await?;
        let event = response.json().await?;
        Ok(event)
    }

    async fn get_participants(
        &self,
        command: &GetParticipants,
    ) -> Result<Paginated<Participation>, Error> {
        command.validate()?;
        let path = format!("{}/{}/participants", PATH, command.event_id);
        let response = self.get_with_query(&path, &command).await?;
        let page: MaybePaginated<Participation> =
            response.json().await.map_err(|_| Error::InvalidResponse)?;
        Ok(page.into_paginated())
    }
}

fn get_details_path(event_id: EventId) -> String {
    format!("{}/{}", PATH, event_id)
}
