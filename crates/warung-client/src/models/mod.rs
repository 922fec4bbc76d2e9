//! Wire DTOs mirroring the backend API.

pub mod auth;
pub mod cart;
pub mod category;
pub mod envelope;
pub mod menu;
pub mod order;

pub use auth::{AuthData, LoginRequest, ProfileData, RefreshData, RegisterRequest, User};
pub use cart::{AddToCartRequest, Cart, CartItem, CartItemMenu, UpdateCartItemRequest};
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use envelope::Envelope;
pub use menu::{Menu, MenuCategory, MenuFilter, MenuPatch, NewMenu};
pub use order::{
    CreateOrderRequest, Order, OrderItem, OrderItemMenu, OrderStatus, UpdateOrderStatusRequest,
};
