use crate::error::ApiError;

/// Per-screen view state: one fetch or mutation in flight at a time,
/// resolving to either a payload or an inline error message.
#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for UiState<T> {
    fn default() -> Self {
        UiState::Idle
    }
}

impl<T> UiState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => UiState::Success(value),
            Err(err) => UiState::Error(err.to_string()),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            UiState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Outcome of a write operation: a user-facing message plus, when the
/// server echoes it back, the updated entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub message: String,
    pub value: Option<T>,
}

impl<T> Mutation<T> {
    pub fn new(message: impl Into<String>, value: Option<T>) -> Self {
        Self { message: message.into(), value }
    }

    pub fn message_only(message: impl Into<String>) -> Self {
        Self { message: message.into(), value: None }
    }
}
