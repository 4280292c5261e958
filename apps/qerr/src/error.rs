#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid TLS alert: {0}")]
    InvalidAlert(String),
    #[error("parse error code error")]
    ParseErrorCode(#[from] refuic_error_code::ParseErrorCodeError),
    #[error("serde json error")]
    SerdeJsonError(#[from] serde_json::Error),
}
