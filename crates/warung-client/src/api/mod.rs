//! Per-resource endpoint modules over a shared HTTP client.

pub mod auth;
pub mod cart;
pub mod category;
mod http;
pub mod menu;
pub mod order;

pub use auth::AuthApi;
pub use cart::CartApi;
pub use category::CategoryApi;
pub use http::ApiClient;
pub use menu::MenuApi;
pub use order::OrderApi;
