use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateOrderStatusRequest {
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_price: f64,
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItem {
    pub id: i32,
    pub menu_id: i32,
    pub quantity: u32,
    pub unit_price: f64,
    pub subtotal: f64,
    pub menu: OrderItemMenu,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItemMenu {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Order lifecycle. PENDING→{PROCESSING, CANCELLED},
/// PROCESSING→{COMPLETED, CANCELLED}; COMPLETED and CANCELLED are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Label shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu Konfirmasi",
            OrderStatus::Processing => "Diproses",
            OrderStatus::Completed => "Selesai",
            OrderStatus::Cancelled => "Dibatalkan",
        }
    }

    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Processing, OrderStatus::Cancelled],
            OrderStatus::Processing => &[OrderStatus::Completed, OrderStatus::Cancelled],
            OrderStatus::Completed | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

// Unknown status strings coming off the wire fall back to PENDING rather
// than failing the whole response.
impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PROCESSING" => OrderStatus::Processing,
            "COMPLETED" => OrderStatus::Completed,
            "CANCELLED" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
