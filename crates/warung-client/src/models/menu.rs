use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Menu {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub is_available: bool,
    #[serde(default)]
    pub stock: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
    pub category: MenuCategory,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuCategory {
    pub id: i32,
    pub name: String,
}

/// Query parameters for `GET menus`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuFilter {
    #[serde(rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(rename = "is_available", skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Fields for `POST menus` (sent as multipart form, optional image part).
#[derive(Debug, Clone)]
pub struct NewMenu {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i32,
    pub is_available: bool,
    pub stock: Option<i32>,
    pub image: Option<PathBuf>,
}

/// Partial fields for `PATCH menus/{id}` (multipart; absent parts untouched).
#[derive(Debug, Clone, Default)]
pub struct MenuPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i32>,
    pub is_available: Option<bool>,
    pub stock: Option<i32>,
    pub image: Option<PathBuf>,
}
