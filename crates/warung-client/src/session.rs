use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::User;

/// In-memory session: the token pair plus a denormalized copy of the
/// logged-in user. Clone-cheap handle shared by the API client and the
/// view-models. Nothing is persisted to disk.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_login(&self, access_token: String, refresh_token: String, user: User) {
        let mut inner = self.inner.write();
        inner.access_token = Some(access_token);
        inner.refresh_token = Some(refresh_token);
        inner.user = Some(user);
    }

    pub fn store_user(&self, user: User) {
        self.inner.write().user = Some(user);
    }

    pub fn update_access_token(&self, access_token: String) {
        self.inner.write().access_token = Some(access_token);
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.read().refresh_token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().access_token.is_some()
    }

    pub fn clear(&self) {
        *self.inner.write() = SessionInner::default();
    }
}
