//! Typed client for the warung UMKM ordering REST API.
//!
//! The backend speaks JSON over HTTPS with bearer-token auth and a uniform
//! response envelope (`success`, `message`, `data`). This crate wraps it in
//! a per-resource API layer plus the view-model/state layer the frontends
//! build on.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod state;
pub mod viewmodel;

pub use api::ApiClient;
pub use config::Settings;
pub use error::ApiError;
pub use session::SessionStore;
pub use state::UiState;
