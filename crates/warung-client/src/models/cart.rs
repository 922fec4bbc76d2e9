use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
    #[serde(rename = "menuId")]
    pub menu_id: i32,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCartItemRequest {
    #[serde(rename = "menuId")]
    pub menu_id: i32,
    pub quantity: u32,
}

/// The server-side cart, one per user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cart {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<CartItem>,
    pub total_quantity: u32,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    pub id: i32,
    pub quantity: u32,
    pub menu: CartItemMenu,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItemMenu {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
