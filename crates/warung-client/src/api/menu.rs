use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::menu::{Menu, MenuFilter, MenuPatch, NewMenu};

/// Menu browsing plus admin CRUD. Create/update go out as multipart forms
/// so an image file can ride along.
#[derive(Clone)]
pub struct MenuApi {
    client: ApiClient,
}

impl MenuApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &MenuFilter) -> Result<Vec<Menu>, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, "menus").query(filter);
                self.client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal mengambil data menu")
                    .await
            })
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Menu, ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::GET, &format!("menus/{id}"));
                self.client
                    .send_envelope(req, "Menu tidak ditemukan", "Menu tidak ditemukan")
                    .await
            })
            .await
    }

    pub async fn create(&self, menu: &NewMenu) -> Result<Menu, ApiError> {
        self.client
            .with_auth(|| async move {
                // The form is rebuilt per attempt; multipart bodies are not reusable.
                let form = new_menu_form(menu).await?;
                let req = self.client.request(Method::POST, "menus").multipart(form);
                self.client
                    .send_envelope(req, "Endpoint tidak ditemukan", "Gagal menambahkan menu")
                    .await
            })
            .await
    }

    pub async fn update(&self, id: i32, patch: &MenuPatch) -> Result<Menu, ApiError> {
        self.client
            .with_auth(|| async move {
                let form = menu_patch_form(patch).await?;
                let req = self
                    .client
                    .request(Method::PATCH, &format!("menus/{id}"))
                    .multipart(form);
                self.client
                    .send_envelope(req, "Menu tidak ditemukan", "Gagal mengupdate menu")
                    .await
            })
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .with_auth(|| async move {
                let req = self.client.request(Method::DELETE, &format!("menus/{id}"));
                self.client
                    .send_ack(req, "Menu tidak ditemukan", "Gagal menghapus menu")
                    .await
            })
            .await
    }
}

async fn new_menu_form(menu: &NewMenu) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("name", menu.name.clone())
        .text("price", menu.price.to_string())
        .text("category_id", menu.category_id.to_string())
        .text("is_available", menu.is_available.to_string());

    if let Some(description) = &menu.description {
        form = form.text("description", description.clone());
    }
    if let Some(stock) = menu.stock {
        form = form.text("stock", stock.to_string());
    }
    if let Some(path) = &menu.image {
        form = form.part("image", image_part(path).await?);
    }
    Ok(form)
}

async fn menu_patch_form(patch: &MenuPatch) -> Result<Form, ApiError> {
    let mut form = Form::new();

    if let Some(name) = &patch.name {
        form = form.text("name", name.clone());
    }
    if let Some(description) = &patch.description {
        form = form.text("description", description.clone());
    }
    if let Some(price) = patch.price {
        form = form.text("price", price.to_string());
    }
    if let Some(category_id) = patch.category_id {
        form = form.text("category_id", category_id.to_string());
    }
    if let Some(is_available) = patch.is_available {
        form = form.text("is_available", is_available.to_string());
    }
    if let Some(stock) = patch.stock {
        form = form.text("stock", stock.to_string());
    }
    if let Some(path) = &patch.image {
        form = form.part("image", image_part(path).await?);
    }
    Ok(form)
}

async fn image_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ApiError::Image(err.to_string()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.essence_str())
        .map_err(|err| ApiError::Image(err.to_string()))
}
