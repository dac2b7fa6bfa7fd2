use crate::auth::login_user::LoginUser;
use crate::auth::register_user::RegisterUser;
use crate::client::AuthClient;
use crate::error::Error;
use crate::http::client::HttpClient;
use crate::models::auth_tokens::{AuthTokens, RefreshedTokens};
use crate::models::user_info::UserInfo;
use crate::session::refresher::RefreshExchange;
use crate::validatable::Validatable;
use async_trait::async_trait;
use serde::Serialize;

const PATH: &str = "/api/auth";

#[async_trait]
impl AuthClient for HttpClient {
    async fn register_user(&self, command: &RegisterUser) -> Result<UserInfo, Error> {
        command.validate()?;
        let response = self
            .post_unauthenticated(&format!("{}/register", PATH), &command)
            .await?;
        let user: UserInfo = response.json().await?;
        self.session().install_registered(user.clone());
        Ok(user)
    }

    async fn login_user(&self, command: &LoginUser) -> Result<UserInfo, Error> {
        command.validate()?;
        let response = self
            .post_unauthenticated(&format!("{}/token", PATH), &command)
            .await?;
        let tokens: AuthTokens = response.json().await?;
        self.session().install_login(tokens, &command.username)
    }
}

#[derive(Debug, Serialize)]
struct RefreshPayload<'a> {
    refresh: &'a str,
}

#[async_trait]
impl RefreshExchange for HttpClient {
    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, Error> {
        let response = self
            .post_unauthenticated(
                &format!("{}/token/refresh", PATH),
                &RefreshPayload {
                    refresh: refresh_token,
                },
            )
            .await?;
        let tokens = response.json().await?;
        Ok(tokens)
    }
}
