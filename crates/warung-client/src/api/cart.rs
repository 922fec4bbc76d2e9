use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::cart::{AddToCartRequest, Cart, UpdateCartItemRequest};

/// The user's server-side cart. Every mutation returns the updated cart.
#[derive(Clone)]
pub struct CartApi {
    client: ApiClient,
}

impl CartApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Cart, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, "cart");
                self.client
                    .send_envelope(req, "Keranjang tidak ditemukan", "Gagal mengambil keranjang")
                    .await
            })
            .await
    }

    pub async fn add_item(&self, menu_id: i32, quantity: u32) -> Result<Cart, ApiError> {
        let request = AddToCartRequest { menu_id, quantity };
        let request = &request;
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::POST, "items").json(request);
                self.client
                    .send_envelope(req, "Menu tidak ditemukan", "Gagal menambahkan ke keranjang")
                    .await
            })
            .await
    }

    pub async fn update_item(&self, menu_id: i32, quantity: u32) -> Result<Cart, ApiError> {
        let request = UpdateCartItemRequest { menu_id, quantity };
        let request = &request;
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::PUT, "items").json(request);
                self.client
                    .send_envelope(req, "Item tidak ditemukan", "Gagal mengupdate keranjang")
                    .await
            })
            .await
    }

    pub async fn remove_item(&self, menu_id: i32) -> Result<Cart, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::DELETE, &format!("items/{menu_id}"));
                self.client
                    .send_envelope(req, "Item tidak ditemukan", "Gagal menghapus item")
                    .await
            })
            .await
    }

    pub async fn clear(&self) -> Result<(), ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::DELETE, "cart");
                self.client
                    .send_ack(req, "Keranjang tidak ditemukan", "Gagal mengosongkan keranjang")
                    .await
            })
            .await
    }
}
