use reqwest::Method;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::auth::{AuthData, LoginRequest, ProfileData, RegisterRequest, User};

/// `register`, `login`, `me`, `logout`. Successful login/register stores the
/// token pair and the user profile in the session.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        let req = self.client.request_public(Method::POST, "login").json(request);
        let data: AuthData = self
            .client
            .send_envelope(req, "Endpoint tidak ditemukan", "Login gagal")
            .await
            .map_err(|err| match err {
                ApiError::Unauthorized(_) => {
                    ApiError::Unauthorized("Email atau password salah".to_string())
                }
                other => other,
            })?;

        let user = data.user.clone();
        self.client
            .session()
            .store_login(data.access_token, data.refresh_token, data.user);
        Ok(user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let req = self.client.request_public(Method::POST, "register").json(request);
        let data: AuthData = self
            .client
            .send_envelope(req, "Endpoint tidak ditemukan", "Registrasi gagal")
            .await
            .map_err(|err| match err {
                ApiError::Conflict(_) => {
                    ApiError::Conflict("Email sudah terdaftar".to_string())
                }
                other => other,
            })?;

        let user = data.user.clone();
        self.client
            .session()
            .store_login(data.access_token, data.refresh_token, data.user);
        Ok(user)
    }

    /// `GET me`, refreshing the denormalized profile in the session.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let user = self
            .client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, "me");
                let data: ProfileData = self
                    .client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal mengambil profil")
                    .await?;
                Ok(data.user)
            })
            .await?;

        self.client.session().store_user(user.clone());
        Ok(user)
    }

    /// Best-effort server-side logout; the local session is cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if self.client.session().is_logged_in() {
            let req = self.client.request(Method::POST, "logout");
            if let Err(err) = self
                .client
                .send_ack(req, "Endpoint tidak ditemukan", "Logout gagal")
                .await
            {
                debug!(error = %err, "logout call failed, clearing local session anyway");
            }
        }

        self.client.session().clear();
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.client.session().is_logged_in()
    }
}
