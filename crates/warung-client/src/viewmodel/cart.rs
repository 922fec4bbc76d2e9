use crate::api::CartApi;
use crate::models::cart::Cart;
use crate::state::{Mutation, UiState};

/// Cart screen: the cart itself plus the latest mutation outcome. Every
/// successful mutation also refreshes the cart state, since the server
/// echoes the updated cart back.
pub struct CartViewModel {
    api: CartApi,
    state: UiState<Cart>,
    mutation_state: UiState<Mutation<Cart>>,
}

impl CartViewModel {
    pub fn new(api: CartApi) -> Self {
        Self {
            api,
            state: UiState::Idle,
            mutation_state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState<Cart> {
        &self.state
    }

    pub fn mutation_state(&self) -> &UiState<Mutation<Cart>> {
        &self.mutation_state
    }

    pub fn item_count(&self) -> u32 {
        self.state.value().map(|cart| cart.total_quantity).unwrap_or(0)
    }

    pub async fn load(&mut self) {
        self.state = UiState::Loading;
        self.state = match self.api.get().await {
            Ok(cart) => UiState::Success(cart),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn add_item(&mut self, menu_id: i32, quantity: u32) {
        self.mutation_state = UiState::Loading;
        self.mutation_state = match self.api.add_item(menu_id, quantity).await {
            Ok(cart) => {
                self.state = UiState::Success(cart.clone());
                UiState::Success(Mutation::new(
                    format!("{quantity} item ditambahkan ke keranjang"),
                    Some(cart),
                ))
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn update_quantity(&mut self, menu_id: i32, quantity: u32) {
        self.mutation_state = UiState::Loading;
        self.mutation_state = match self.api.update_item(menu_id, quantity).await {
            Ok(cart) => {
                self.state = UiState::Success(cart.clone());
                UiState::Success(Mutation::new("Keranjang diupdate", Some(cart)))
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn increase_quantity(&mut self, menu_id: i32, current_quantity: u32) {
        self.update_quantity(menu_id, current_quantity + 1).await;
    }

    /// Dropping below one removes the item instead.
    pub async fn decrease_quantity(&mut self, menu_id: i32, current_quantity: u32) {
        if current_quantity > 1 {
            self.update_quantity(menu_id, current_quantity - 1).await;
        } else {
            self.remove_item(menu_id).await;
        }
    }

    pub async fn remove_item(&mut self, menu_id: i32) {
        self.mutation_state = UiState::Loading;
        self.mutation_state = match self.api.remove_item(menu_id).await {
            Ok(cart) => {
                self.state = UiState::Success(cart.clone());
                UiState::Success(Mutation::new("Item dihapus", Some(cart)))
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn clear(&mut self) {
        self.mutation_state = UiState::Loading;
        match self.api.clear().await {
            Ok(()) => {
                self.load().await;
                self.mutation_state =
                    UiState::Success(Mutation::message_only("Keranjang dikosongkan"));
            }
            Err(err) => {
                self.mutation_state = UiState::Error(err.to_string());
            }
        }
    }

    pub async fn refresh(&mut self) {
        self.load().await;
    }

    pub fn reset_mutation_state(&mut self) {
        self.mutation_state = UiState::Idle;
    }
}
