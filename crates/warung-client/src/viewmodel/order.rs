use crate::api::OrderApi;
use crate::models::order::{Order, OrderStatus};
use crate::state::{Mutation, UiState};

/// Customer-side order history and detail.
pub struct CustomerOrderViewModel {
    api: OrderApi,
    list_state: UiState<Vec<Order>>,
    detail_state: UiState<Order>,
}

impl CustomerOrderViewModel {
    pub fn new(api: OrderApi) -> Self {
        Self {
            api,
            list_state: UiState::Idle,
            detail_state: UiState::Idle,
        }
    }

    pub fn list_state(&self) -> &UiState<Vec<Order>> {
        &self.list_state
    }

    pub fn detail_state(&self) -> &UiState<Order> {
        &self.detail_state
    }

    pub async fn load_my_orders(&mut self) {
        self.list_state = UiState::Loading;
        self.list_state = UiState::from_result(self.api.list_mine().await);
    }

    pub async fn load_detail(&mut self, id: i32) {
        self.detail_state = UiState::Loading;
        self.detail_state = UiState::from_result(self.api.get(id).await);
    }
}

/// Admin order management: full listing with an optional status filter,
/// and status updates guarded by the transition table.
pub struct AdminOrderViewModel {
    api: OrderApi,
    list_state: UiState<Vec<Order>>,
    detail_state: UiState<Order>,
    update_state: UiState<Mutation<Order>>,
    filter_status: Option<OrderStatus>,
}

impl AdminOrderViewModel {
    pub fn new(api: OrderApi) -> Self {
        Self {
            api,
            list_state: UiState::Idle,
            detail_state: UiState::Idle,
            update_state: UiState::Idle,
            filter_status: None,
        }
    }

    pub fn list_state(&self) -> &UiState<Vec<Order>> {
        &self.list_state
    }

    pub fn detail_state(&self) -> &UiState<Order> {
        &self.detail_state
    }

    pub fn update_state(&self) -> &UiState<Mutation<Order>> {
        &self.update_state
    }

    pub fn filter_status(&self) -> Option<OrderStatus> {
        self.filter_status
    }

    pub async fn load_all(&mut self) {
        self.list_state = UiState::Loading;
        self.list_state = match self.api.list_all().await {
            Ok(orders) => {
                let filtered = match self.filter_status {
                    Some(status) => {
                        orders.into_iter().filter(|o| o.status == status).collect()
                    }
                    None => orders,
                };
                UiState::Success(filtered)
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn set_filter(&mut self, status: Option<OrderStatus>) {
        self.filter_status = status;
        self.load_all().await;
    }

    pub async fn load_detail(&mut self, id: i32) {
        self.detail_state = UiState::Loading;
        self.detail_state = UiState::from_result(self.api.get(id).await);
    }

    /// Rejects disallowed transitions locally; the server stays
    /// authoritative for the rest.
    pub async fn update_status(
        &mut self,
        order_number: &str,
        current: OrderStatus,
        next: OrderStatus,
    ) {
        if !current.can_transition_to(next) {
            self.update_state = UiState::Error(format!(
                "Status tidak dapat diubah dari {} ke {}",
                current.display_name(),
                next.display_name()
            ));
            return;
        }

        self.update_state = UiState::Loading;
        self.update_state = match self.api.update_status(order_number, next).await {
            Ok(order) => {
                UiState::Success(Mutation::new("Status order berhasil diupdate", Some(order)))
            }
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub fn reset_update_state(&mut self) {
        self.update_state = UiState::Idle;
    }
}
