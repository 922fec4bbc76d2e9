use std::path::PathBuf;

use crate::api::MenuApi;
use crate::error::ApiError;
use crate::models::menu::{Menu, MenuFilter, MenuPatch, NewMenu};
use crate::state::{Mutation, UiState};

/// Admin menu list with filtering and delete.
pub struct MenuListViewModel {
    api: MenuApi,
    state: UiState<Vec<Menu>>,
    delete_state: UiState<Mutation<()>>,
    filter: MenuFilter,
}

impl MenuListViewModel {
    pub fn new(api: MenuApi) -> Self {
        Self {
            api,
            state: UiState::Idle,
            delete_state: UiState::Idle,
            filter: MenuFilter::default(),
        }
    }

    pub fn state(&self) -> &UiState<Vec<Menu>> {
        &self.state
    }

    pub fn delete_state(&self) -> &UiState<Mutation<()>> {
        &self.delete_state
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub async fn load(&mut self) {
        self.state = UiState::Loading;
        let mut filter = self.filter.clone();
        // Blank search means no filter.
        filter.search = filter.search.filter(|s| !s.trim().is_empty());
        self.state = UiState::from_result(self.api.list(&filter).await);
    }

    pub async fn set_filter(&mut self, filter: MenuFilter) {
        self.filter = filter;
        self.load().await;
    }

    pub async fn clear_filter(&mut self) {
        self.filter = MenuFilter::default();
        self.load().await;
    }

    pub async fn delete(&mut self, id: i32) {
        self.delete_state = UiState::Loading;
        self.delete_state = match self.api.delete(id).await {
            Ok(()) => UiState::Success(Mutation::message_only("Menu berhasil dihapus")),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub fn reset_delete_state(&mut self) {
        self.delete_state = UiState::Idle;
    }
}

pub struct MenuDetailViewModel {
    api: MenuApi,
    state: UiState<Menu>,
}

impl MenuDetailViewModel {
    pub fn new(api: MenuApi) -> Self {
        Self { api, state: UiState::Idle }
    }

    pub fn state(&self) -> &UiState<Menu> {
        &self.state
    }

    pub async fn load(&mut self, id: i32) {
        self.state = UiState::Loading;
        self.state = UiState::from_result(self.api.get(id).await);
    }
}

/// Create/edit form for a menu. Price and stock are kept as raw input
/// strings so validation can report "harus berupa angka" on bad input.
pub struct MenuFormViewModel {
    api: MenuApi,
    form: MenuFormState,
    mutation_state: UiState<Mutation<Menu>>,
}

impl MenuFormViewModel {
    pub fn new(api: MenuApi) -> Self {
        Self {
            api,
            form: MenuFormState::default(),
            mutation_state: UiState::Idle,
        }
    }

    pub fn form(&self) -> &MenuFormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MenuFormState {
        &mut self.form
    }

    pub fn mutation_state(&self) -> &UiState<Mutation<Menu>> {
        &self.mutation_state
    }

    /// Populate the form from an existing menu for editing.
    pub fn load_from(&mut self, menu: &Menu) {
        self.form = MenuFormState {
            id: menu.id,
            name: menu.name.clone(),
            description: menu.description.clone().unwrap_or_default(),
            price: menu.price.to_string(),
            category_id: menu.category.id,
            category_name: menu.category.name.clone(),
            is_available: menu.is_available,
            stock: menu.stock.map(|s| s.to_string()).unwrap_or_default(),
            image: None,
            ..Default::default()
        };
    }

    pub async fn create(&mut self) {
        self.form = self.form.clone().validate();
        if !self.form.is_valid() {
            self.mutation_state = UiState::Error("Mohon lengkapi form dengan benar".to_string());
            return;
        }

        self.mutation_state = UiState::Loading;
        let new_menu = match self.form.to_new_menu() {
            Ok(menu) => menu,
            Err(err) => {
                self.mutation_state = UiState::Error(err.to_string());
                return;
            }
        };
        self.mutation_state = match self.api.create(&new_menu).await {
            Ok(menu) => UiState::Success(Mutation::new("Menu berhasil ditambahkan", Some(menu))),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn update(&mut self) {
        self.form = self.form.clone().validate();
        if !self.form.is_valid() {
            self.mutation_state = UiState::Error("Mohon lengkapi form dengan benar".to_string());
            return;
        }

        self.mutation_state = UiState::Loading;
        let patch = match self.form.to_patch() {
            Ok(patch) => patch,
            Err(err) => {
                self.mutation_state = UiState::Error(err.to_string());
                return;
            }
        };
        self.mutation_state = match self.api.update(self.form.id, &patch).await {
            Ok(menu) => UiState::Success(Mutation::new("Menu berhasil diupdate", Some(menu))),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub fn reset_form(&mut self) {
        self.form = MenuFormState::default();
    }

    pub fn reset_mutation_state(&mut self) {
        self.mutation_state = UiState::Idle;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuFormState {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: i32,
    pub category_name: String,
    pub is_available: bool,
    pub stock: String,
    pub image: Option<PathBuf>,

    pub name_error: Option<String>,
    pub price_error: Option<String>,
    pub category_error: Option<String>,
    pub stock_error: Option<String>,
}

impl Default for MenuFormState {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category_id: 0,
            category_name: String::new(),
            is_available: true,
            stock: String::new(),
            image: None,
            name_error: None,
            price_error: None,
            category_error: None,
            stock_error: None,
        }
    }
}

impl MenuFormState {
    pub fn validate(mut self) -> Self {
        let name = self.name.trim();
        self.name_error = if name.is_empty() {
            Some("Nama menu tidak boleh kosong".to_string())
        } else if name.chars().count() < 3 {
            Some("Nama menu minimal 3 karakter".to_string())
        } else if name.chars().count() > 100 {
            Some("Nama menu maksimal 100 karakter".to_string())
        } else {
            None
        };

        self.price_error = if self.price.trim().is_empty() {
            Some("Harga tidak boleh kosong".to_string())
        } else {
            match self.price.trim().parse::<f64>() {
                Err(_) => Some("Harga harus berupa angka".to_string()),
                Ok(price) if price <= 0.0 => Some("Harga harus lebih dari 0".to_string()),
                Ok(_) => None,
            }
        };

        self.category_error = if self.category_id <= 0 {
            Some("Pilih kategori".to_string())
        } else {
            None
        };

        self.stock_error = if self.stock.trim().is_empty() {
            None
        } else {
            match self.stock.trim().parse::<i32>() {
                Err(_) => Some("Stock harus berupa angka".to_string()),
                Ok(stock) if stock < 0 => Some("Stock tidak boleh negatif".to_string()),
                Ok(_) => None,
            }
        };

        self
    }

    pub fn is_valid(&self) -> bool {
        self.name_error.is_none()
            && self.price_error.is_none()
            && self.category_error.is_none()
            && self.stock_error.is_none()
            && !self.name.trim().is_empty()
            && !self.price.trim().is_empty()
            && self.category_id > 0
    }

    fn parsed_price(&self) -> Result<f64, ApiError> {
        self.price
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::BadRequest("Harga harus berupa angka".to_string()))
    }

    fn parsed_stock(&self) -> Result<Option<i32>, ApiError> {
        let stock = self.stock.trim();
        if stock.is_empty() {
            return Ok(None);
        }
        stock
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ApiError::BadRequest("Stock harus berupa angka".to_string()))
    }

    pub fn to_new_menu(&self) -> Result<NewMenu, ApiError> {
        Ok(NewMenu {
            name: self.name.trim().to_string(),
            description: match self.description.trim() {
                "" => None,
                desc => Some(desc.to_string()),
            },
            price: self.parsed_price()?,
            category_id: self.category_id,
            is_available: self.is_available,
            stock: self.parsed_stock()?,
            image: self.image.clone(),
        })
    }

    pub fn to_patch(&self) -> Result<MenuPatch, ApiError> {
        Ok(MenuPatch {
            name: Some(self.name.trim().to_string()),
            description: match self.description.trim() {
                "" => None,
                desc => Some(desc.to_string()),
            },
            price: Some(self.parsed_price()?),
            category_id: Some(self.category_id),
            is_available: Some(self.is_available),
            stock: self.parsed_stock()?,
            image: self.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MenuFormState {
        MenuFormState {
            name: "Nasi Goreng".to_string(),
            price: "15000".to_string(),
            category_id: 2,
            ..Default::default()
        }
    }

    #[test]
    fn filled_form_validates() {
        let form = filled_form().validate();
        assert!(form.is_valid(), "{form:?}");
    }

    #[test]
    fn price_must_be_numeric_and_positive() {
        let form = MenuFormState { price: "murah".to_string(), ..filled_form() }.validate();
        assert_eq!(form.price_error.as_deref(), Some("Harga harus berupa angka"));

        let form = MenuFormState { price: "0".to_string(), ..filled_form() }.validate();
        assert_eq!(form.price_error.as_deref(), Some("Harga harus lebih dari 0"));
    }

    #[test]
    fn category_must_be_chosen() {
        let form = MenuFormState { category_id: 0, ..filled_form() }.validate();
        assert_eq!(form.category_error.as_deref(), Some("Pilih kategori"));
    }

    #[test]
    fn stock_is_optional_but_checked_when_present() {
        let form = MenuFormState { stock: String::new(), ..filled_form() }.validate();
        assert!(form.stock_error.is_none());

        let form = MenuFormState { stock: "-3".to_string(), ..filled_form() }.validate();
        assert_eq!(form.stock_error.as_deref(), Some("Stock tidak boleh negatif"));

        let form = MenuFormState { stock: "banyak".to_string(), ..filled_form() }.validate();
        assert_eq!(form.stock_error.as_deref(), Some("Stock harus berupa angka"));
    }

    #[test]
    fn to_new_menu_parses_fields() {
        let mut form = filled_form();
        form.stock = "12".to_string();
        form.description = "  Pedas  ".to_string();
        let menu = form.to_new_menu().unwrap();
        assert_eq!(menu.price, 15000.0);
        assert_eq!(menu.stock, Some(12));
        assert_eq!(menu.description.as_deref(), Some("Pedas"));
    }
}
