use crate::api::AuthApi;
use crate::models::auth::{LoginRequest, RegisterRequest, User};
use crate::state::UiState;

/// Login / register screen state.
pub struct AuthViewModel {
    api: AuthApi,
    state: UiState<User>,
}

impl AuthViewModel {
    pub fn new(api: AuthApi) -> Self {
        Self { api, state: UiState::Idle }
    }

    pub fn state(&self) -> &UiState<User> {
        &self.state
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        self.state = UiState::Loading;
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.state = UiState::from_result(self.api.login(&request).await);
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        password: &str,
        confirm_password: &str,
    ) {
        self.state = UiState::Loading;
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(str::to_string),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        };
        self.state = UiState::from_result(self.api.register(&request).await);
    }

    pub fn reset(&mut self) {
        self.state = UiState::Idle;
    }
}

/// Profile screen: current user plus logout.
pub struct ProfileViewModel {
    api: AuthApi,
    state: UiState<User>,
}

impl ProfileViewModel {
    pub fn new(api: AuthApi) -> Self {
        Self { api, state: UiState::Idle }
    }

    pub fn state(&self) -> &UiState<User> {
        &self.state
    }

    pub async fn load(&mut self) {
        self.state = UiState::Loading;
        self.state = UiState::from_result(self.api.profile().await);
    }

    /// Always succeeds locally; the session is gone afterwards.
    pub async fn logout(&mut self) {
        let _ = self.api.logout().await;
        self.state = UiState::Idle;
    }
}
