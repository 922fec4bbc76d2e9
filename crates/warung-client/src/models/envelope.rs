use serde::Deserialize;

use crate::error::ApiError;

/// Uniform response envelope: `{ success, message?, data? }`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload. A `success: false` envelope (or a success one
    /// missing its data) surfaces the server message, falling back to the
    /// operation's default text.
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Api(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ));
        }
        self.data.ok_or_else(|| {
            ApiError::Api(self.message.unwrap_or_else(|| fallback.to_string()))
        })
    }

    /// For endpoints where only the acknowledgement matters (logout).
    pub fn into_ack(self, fallback: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Api(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}
