use crate::api::{CartApi, OrderApi};
use crate::models::cart::Cart;
use crate::models::order::Order;
use crate::state::{Mutation, UiState};

/// Checkout screen: cart preview plus order creation from a delivery
/// address form.
pub struct CheckoutViewModel {
    cart_api: CartApi,
    order_api: OrderApi,
    cart_state: UiState<Cart>,
    checkout_state: UiState<Mutation<Order>>,
    form: AddressFormState,
}

impl CheckoutViewModel {
    pub fn new(cart_api: CartApi, order_api: OrderApi) -> Self {
        Self {
            cart_api,
            order_api,
            cart_state: UiState::Idle,
            checkout_state: UiState::Idle,
            form: AddressFormState::default(),
        }
    }

    pub fn cart_state(&self) -> &UiState<Cart> {
        &self.cart_state
    }

    pub fn checkout_state(&self) -> &UiState<Mutation<Order>> {
        &self.checkout_state
    }

    pub fn form(&self) -> &AddressFormState {
        &self.form
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.form.address = address.into();
        self.form.address_error = None;
    }

    pub async fn load_cart(&mut self) {
        self.cart_state = UiState::Loading;
        self.cart_state = match self.cart_api.get().await {
            Ok(cart) if cart.is_empty() => UiState::Error("Keranjang kosong".to_string()),
            Ok(cart) => UiState::Success(cart),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub async fn checkout(&mut self) {
        self.form = self.form.clone().validate();
        if !self.form.is_valid() {
            self.checkout_state =
                UiState::Error("Mohon lengkapi alamat pengiriman".to_string());
            return;
        }

        self.checkout_state = UiState::Loading;
        self.checkout_state = match self.order_api.create(self.form.address.trim()).await {
            Ok(order) => UiState::Success(Mutation::new("Order berhasil dibuat!", Some(order))),
            Err(err) => UiState::Error(err.to_string()),
        };
    }

    pub fn reset_checkout_state(&mut self) {
        self.checkout_state = UiState::Idle;
    }

    pub fn reset_form(&mut self) {
        self.form = AddressFormState::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressFormState {
    pub address: String,
    pub address_error: Option<String>,
}

impl AddressFormState {
    pub fn validate(mut self) -> Self {
        let address = self.address.trim();
        self.address_error = if address.is_empty() {
            Some("Alamat pengiriman tidak boleh kosong".to_string())
        } else if address.chars().count() < 10 {
            Some("Alamat minimal 10 karakter".to_string())
        } else if address.chars().count() > 200 {
            Some("Alamat maksimal 200 karakter".to_string())
        } else {
            None
        };
        self
    }

    pub fn is_valid(&self) -> bool {
        self.address_error.is_none() && !self.address.trim().is_empty()
    }
}
