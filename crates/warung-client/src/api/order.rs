use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::order::{CreateOrderRequest, Order, OrderStatus, UpdateOrderStatusRequest};

/// Checkout and order tracking. `list_all`/`update_status` are admin-only
/// server-side; the client just surfaces the 403.
#[derive(Clone)]
pub struct OrderApi {
    client: ApiClient,
}

impl OrderApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create an order from the current cart contents.
    pub async fn create(&self, address: &str) -> Result<Order, ApiError> {
        let request = CreateOrderRequest { address: address.trim().to_string() };
        let request = &request;
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::POST, "orders").json(request);
                self.client
                    .send_envelope(req, "Keranjang tidak ditemukan", "Gagal membuat order")
                    .await
            })
            .await
            .map_err(|err| match err {
                ApiError::BadRequest(_) => {
                    ApiError::BadRequest("Keranjang kosong atau data tidak valid".to_string())
                }
                other => other,
            })
    }

    /// The calling user's orders.
    pub async fn list_mine(&self) -> Result<Vec<Order>, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, "orders");
                self.client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal mengambil data order")
                    .await
            })
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Order>, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, "orders/all");
                self.client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal mengambil data order")
                    .await
            })
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Order, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, &format!("orders/{id}"));
                self.client
                    .send_envelope(req, "Order tidak ditemukan", "Order tidak ditemukan")
                    .await
            })
            .await
    }

    pub async fn update_status(
        &self,
        order_number: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let request = UpdateOrderStatusRequest {
            order_number: order_number.to_string(),
            status,
        };
        let request = &request;
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::PATCH, "orders/status").json(request);
                self.client
                    .send_envelope(req, "Order tidak ditemukan", "Gagal mengupdate status")
                    .await
            })
            .await
    }
}
