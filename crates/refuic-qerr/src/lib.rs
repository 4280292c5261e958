//! # refuic-qerr は接続・ストリーム・ハンドシェイクが終了した理由を一つの値で表します。
pub mod convert;
pub mod format;
pub mod quic_error;

pub use convert::{anyhow_to_quic_error, to_quic_error};
pub use format::Rendered;
pub use quic_error::{ErrorKind, QuicError};
pub use refuic_error_code::{Alert, ErrorCode, ErrorCodeRegistry, Rfc9000};
