//! State holders backing the screens: each owns its `UiState` fields and
//! delegates to the API layer. Failures always land in `UiState::Error`
//! with the user-facing message; nothing here is fatal.

pub mod auth;
pub mod cart;
pub mod category;
pub mod checkout;
pub mod menu;
pub mod order;

pub use auth::{AuthViewModel, ProfileViewModel};
pub use cart::CartViewModel;
pub use category::{
    CategoryDetailViewModel, CategoryFormState, CategoryFormViewModel, CategoryListViewModel,
};
pub use checkout::{AddressFormState, CheckoutViewModel};
pub use menu::{MenuDetailViewModel, MenuFormState, MenuFormViewModel, MenuListViewModel};
pub use order::{AdminOrderViewModel, CustomerOrderViewModel};
