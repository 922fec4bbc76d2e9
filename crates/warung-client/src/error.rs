use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes for API calls, carrying the user-facing message
/// (Indonesian, matching the backend's audience) that the view layer
/// displays inline.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Server(String),

    /// Envelope came back with `success: false`; message is the server's.
    #[error("{0}")]
    Api(String),

    #[error("Tidak ada koneksi internet")]
    Network(#[source] reqwest::Error),

    #[error("Gagal membaca respons server: {0}")]
    Decode(String),

    #[error("Silakan login terlebih dahulu")]
    NotLoggedIn,

    #[error("Sesi expired, silakan login kembali")]
    SessionExpired,

    #[error("Gagal membaca file gambar: {0}")]
    Image(String),

    #[error("Gagal menyiapkan HTTP client: {0}")]
    Build(String),

    #[error("Error: {0}")]
    Unexpected(u16),
}

impl ApiError {
    /// Map a non-2xx status to the standard message table. `not_found`
    /// supplies the endpoint-specific 404 text ("Menu tidak ditemukan", …).
    pub fn from_status(status: StatusCode, not_found: &str) -> Self {
        match status.as_u16() {
            400 => ApiError::BadRequest("Data tidak valid".to_string()),
            401 => ApiError::Unauthorized("Sesi expired, silakan login kembali".to_string()),
            403 => ApiError::Forbidden("Anda tidak memiliki akses".to_string()),
            404 => ApiError::NotFound(not_found.to_string()),
            409 => ApiError::Conflict("Data sudah ada".to_string()),
            500..=599 => ApiError::Server("Server error, coba lagi nanti".to_string()),
            code => ApiError::Unexpected(code),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Build(err.to_string())
        } else {
            ApiError::Network(err)
        }
    }
}
