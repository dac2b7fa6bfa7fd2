use crate::client::Client;
use crate::error::Error;
use crate::http::config::HttpClientConfig;
use crate::models::user_info::UserInfo;
use crate::session::storage::{FileSessionStorage, InMemorySessionStorage, SessionStorage};
use crate::session::SessionManager;
use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    client: ClientWithMiddleware,
    session: SessionManager,
}

#[async_trait]
impl Client for HttpClient {
    async fn restore_session(&self) -> Option<UserInfo> {
        self.session.restore(self).await
    }

    fn current_user(&self) -> Option<UserInfo> {
        self.session.current_user()
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn logout(&self) {
        self.session.logout();
    }
}

impl HttpClient {
    pub fn new(api_url: &str) -> Result<Self, Error> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
            ..Default::default()
        }))
    }

    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, Error> {
        let api_url = Url::parse(&config.api_url);
        if api_url.is_err() {
            return Err(Error::CannotParseUrl);
        }
        let api_url = api_url.unwrap();
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        let client = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        let storage: Arc<dyn SessionStorage> = match &config.session_file {
            Some(path) => Arc::new(FileSessionStorage::new(path.clone())),
            None => Arc::new(InMemorySessionStorage::new()),
        };

        Ok(Self {
            api_url,
            client,
            session: SessionManager::new(storage),
        })
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub async fn get(&self, path: &str) -> Result<Response, Error> {
        let url = self.get_url(path)?;
        self.send(self.client.get(url)).await
    }

    pub async fn get_with_query<T: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &T,
    ) -> Result<Response, Error> {
        let url = self.get_url(path)?;
        self.send(self.client.get(url).query(query)).await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, Error> {
        let url = self.get_url(path)?;
        self.send(self.client.post(url).json(payload)).await
    }

    pub async fn patch<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, Error> {
        let url = self.get_url(path)?;
        self.send(self.client.patch(url).json(payload)).await
    }

    /// Sender for the auth endpoints: no bearer header, no 401 recovery, so
    /// a rejected login or refresh can never re-enter the refresh path.
    pub(crate) async fn post_unauthenticated<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, Error> {
        let url = self.get_url(path)?;
        let response = self.client.post(url).json(payload).send().await?;
        Self::handle_response(response).await
    }

    pub fn get_url(&self, path: &str) -> Result<Url, Error> {
        self.api_url.join(path).map_err(|_| Error::CannotParseUrl)
    }

    /// Sends a request with the current access token and replays it exactly
    /// once after a successful session refresh. A 401 on the replay is a
    /// final failure and surfaces like any other error status.
    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let replay = request.try_clone();
        let response = self.dispatch(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::handle_response(response).await;
        }
        let Some(replay) = replay else {
            return Self::handle_response(response).await;
        };

        self.session.recover_unauthorized(self).await?;
        debug!("Replaying request after session refresh");
        let response = self.dispatch(replay).await?;
        Self::handle_response(response).await
    }

    /// The access token is read at dispatch time, so a replay after a
    /// refresh picks up the new token.
    async fn dispatch(&self, request: RequestBuilder) -> Result<Response, Error> {
        let request = match self.session.access_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        Ok(request.send().await?)
    }

    async fn handle_response(response: Response) -> Result<Response, Error> {
        match response.status().is_success() {
            true => Ok(response),
            false => Err(Error::HttpResponseError(
                response.status().as_u16(),
                response.text().await.unwrap_or("error".to_string()),
            )),
        }
    }
}
