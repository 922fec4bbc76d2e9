use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::auth::{RefreshData, RefreshTokenRequest};
use crate::models::Envelope;
use crate::session::SessionStore;

/// Shared HTTP client: configured reqwest client, base URL and the session
/// holding the token pair. Cloning shares the session.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Request with the bearer token attached when a session exists.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, self.endpoint(path));
        if let Some(token) = self.session.access_token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Unauthenticated request (login, register, refresh).
    pub(crate) fn request_public(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(path))
    }

    /// Send, map non-2xx statuses to the standard message table, then
    /// unwrap the response envelope.
    pub(crate) async fn send_envelope<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        not_found: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = req.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if !status.is_success() {
            debug!(status = status.as_u16(), "request rejected");
            return Err(ApiError::from_status(status, not_found));
        }

        let envelope: Envelope<T> = response.json().await.map_err(ApiError::from)?;
        envelope.into_data(fallback)
    }

    /// Like `send_envelope` but only the acknowledgement matters.
    pub(crate) async fn send_ack(
        &self,
        req: RequestBuilder,
        not_found: &str,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let response = req.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if !status.is_success() {
            debug!(status = status.as_u16(), "request rejected");
            return Err(ApiError::from_status(status, not_found));
        }

        let envelope: Envelope<serde_json::Value> = response.json().await.map_err(ApiError::from)?;
        envelope.into_ack(fallback)
    }

    /// Run an authenticated call. On 401, refresh the access token once and
    /// retry the call once; a failed refresh clears the session and forces
    /// re-login. No backoff, no second retry.
    pub(crate) async fn with_auth<T, F, Fut>(&self, call: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if !self.session.is_logged_in() {
            return Err(ApiError::NotLoggedIn);
        }

        match call().await {
            Err(ApiError::Unauthorized(_)) => {
                debug!("access token rejected, attempting refresh");
                self.refresh_access_token().await?;
                call().await
            }
            other => other,
        }
    }

    /// `POST refresh` with the stored refresh token. Any failure invalidates
    /// the whole session.
    pub(crate) async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let Some(refresh_token) = self.session.refresh_token() else {
            self.session.clear();
            return Err(ApiError::SessionExpired);
        };

        let req = self
            .request_public(Method::POST, "refresh")
            .json(&RefreshTokenRequest { refresh_token });

        match self
            .send_envelope::<RefreshData>(req, "Endpoint tidak ditemukan", "Refresh token gagal")
            .await
        {
            Ok(data) => {
                self.session.update_access_token(data.access_token);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, clearing session");
                self.session.clear();
                Err(ApiError::SessionExpired)
            }
        }
    }
}
