use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};

/// CRUD on menu categories (admin).
#[derive(Clone)]
pub struct CategoryApi {
    client: ApiClient,
}

impl CategoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, "categories");
                self.client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal mengambil data kategori")
                    .await
            })
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Category, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, &format!("categories/{id}"));
                self.client
                    .send_envelope(req, "Kategori tidak ditemukan", "Kategori tidak ditemukan")
                    .await
            })
            .await
    }

    pub async fn create(&self, request: &CreateCategoryRequest) -> Result<Category, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::POST, "categories").json(request);
                self.client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal menambahkan kategori")
                    .await
            })
            .await
            .map_err(|err| match err {
                ApiError::Conflict(_) => ApiError::Conflict("Kategori sudah ada".to_string()),
                other => other,
            })
    }

    pub async fn update(
        &self,
        id: i32,
        request: &UpdateCategoryRequest,
    ) -> Result<Category, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self
                    .client
                    .request(Method::PUT, &format!("categories/{id}"))
                    .json(request);
                self.client
                    .send_envelope(req, "Kategori tidak ditemukan", "Gagal mengupdate kategori")
                    .await
            })
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::DELETE, &format!("categories/{id}"));
                self.client
                    .send_ack(req, "Kategori tidak ditemukan", "Gagal menghapus kategori")
                    .await
            })
            .await
    }
}
