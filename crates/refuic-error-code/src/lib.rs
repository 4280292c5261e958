pub mod alert;
pub mod error_code;
pub mod registry;

pub use alert::Alert;
pub use error_code::{parse_u64, ErrorCode, ParseErrorCodeError, CRYPTO_ERROR_BASE};
pub use registry::{ErrorCodeRegistry, Rfc9000};
