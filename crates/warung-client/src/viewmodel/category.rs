use crate::api::CategoryApi;
use crate::models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::state::{Mutation, UiState};

pub struct CategoryListViewModel {
    api: CategoryApi,
    state: UiState<Vec<Category>>,
    delete_state: UiState<Mutation<()>>,
}

impl CategoryListViewModel {
    pub fn new(api: CategoryApi) -> Self {
        Self {
            api,
            state: UiState::Idle,
            delete_state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState<Vec<Category>> {
        &self.state
    }

    pub fn delete_state(&self) -> &UiState<Mutation<()>> {
        &self.delete_state
    }

    pub async fn load(&mut self) {
        self.state = UiState::Loading;
        self.state = UiState::from_result(self.api.list().await);
    }

    pub async fn delete(&mut self, id: i32) {
        self.delete_state = UiState::Loading;
        self.delete_state = match self.api.delete(id).await {
            Ok(()) => UiState::Success(Mutation::message_only("Kategori berhasil dihapus")),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub fn reset_delete_state(&mut self) {
        self.delete_state = UiState::Idle;
    }
}

pub struct CategoryDetailViewModel {
    api: CategoryApi,
    state: UiState<Category>,
}

impl CategoryDetailViewModel {
    pub fn new(api: CategoryApi) -> Self {
        Self { api, state: UiState::Idle }
    }

    pub fn state(&self) -> &UiState<Category> {
        &self.state
    }

    pub async fn load(&mut self, id: i32) {
        self.state = UiState::Loading;
        self.state = UiState::from_result(self.api.get(id).await);
    }
}

/// Create/edit form for a category.
pub struct CategoryFormViewModel {
    api: CategoryApi,
    form: CategoryFormState,
    mutation_state: UiState<Mutation<Category>>,
}

impl CategoryFormViewModel {
    pub fn new(api: CategoryApi) -> Self {
        Self {
            api,
            form: CategoryFormState::default(),
            mutation_state: UiState::Idle,
        }
    }

    pub fn form(&self) -> &CategoryFormState {
        &self.form
    }

    pub fn mutation_state(&self) -> &UiState<Mutation<Category>> {
        &self.mutation_state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
        self.form.name_error = None;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Populate the form from an existing category for editing.
    pub fn load_from(&mut self, category: &Category) {
        self.form = CategoryFormState {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            name_error: None,
        };
    }

    pub async fn create(&mut self) {
        self.form = self.form.clone().validate();
        if !self.form.is_valid() {
            self.mutation_state = UiState::Error("Mohon lengkapi form dengan benar".to_string());
            return;
        }

        self.mutation_state = UiState::Loading;
        let request = CreateCategoryRequest {
            name: self.form.name.trim().to_string(),
            description: non_blank(&self.form.description),
        };
        self.mutation_state = match self.api.create(&request).await {
            Ok(category) => {
                UiState::Success(Mutation::new("Kategori berhasil ditambahkan", Some(category)))
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn update(&mut self) {
        if self.form.id <= 0 {
            self.mutation_state = UiState::Error("ID kategori tidak valid".to_string());
            return;
        }

        self.form = self.form.clone().validate();
        if !self.form.is_valid() {
            self.mutation_state = UiState::Error("Mohon lengkapi form dengan benar".to_string());
            return;
        }

        self.mutation_state = UiState::Loading;
        let request = UpdateCategoryRequest {
            name: Some(self.form.name.trim().to_string()),
            description: non_blank(&self.form.description),
        };
        self.mutation_state = match self.api.update(self.form.id, &request).await {
            Ok(category) => {
                UiState::Success(Mutation::new("Kategori berhasil diupdate", Some(category)))
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub fn reset_form(&mut self) {
        self.form = CategoryFormState::default();
    }

    pub fn reset_mutation_state(&mut self) {
        self.mutation_state = UiState::Idle;
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFormState {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub name_error: Option<String>,
}

impl CategoryFormState {
    pub fn validate(mut self) -> Self {
        self.name_error = if self.name.trim().is_empty() {
            Some("Nama kategori tidak boleh kosong".to_string())
        } else if self.name.trim().chars().count() < 3 {
            Some("Nama kategori minimal 3 karakter".to_string())
        } else if self.name.trim().chars().count() > 100 {
            Some("Nama kategori maksimal 100 karakter".to_string())
        } else {
            None
        };
        self
    }

    pub fn is_valid(&self) -> bool {
        self.name_error.is_none() && !self.name.trim().is_empty()
    }
}
