use std::{fmt, num::ParseIntError, str::FromStr};

use tracing::instrument;

use crate::Alert;

// https://www.rfc-editor.org/rfc/rfc9001#section-4.8
// 0x0100-0x01ff は TLS alert のために予約されている
pub const CRYPTO_ERROR_BASE: u64 = 0x100;
const CRYPTO_ERROR_END: u64 = CRYPTO_ERROR_BASE + 0x100;

/// QUIC error code as carried in CONNECTION_CLOSE frames.
///
/// The same type carries transport codes from
/// [RFC 9000 Section 20.1](https://www.rfc-editor.org/rfc/rfc9000.html#section-20.1)
/// and application-defined codes. Only the former are known to [`ErrorCode::name`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, PartialOrd, Ord)]
pub struct ErrorCode(pub u64);

impl ErrorCode {
    pub const NO_ERROR: ErrorCode = ErrorCode(0x00);
    pub const INTERNAL_ERROR: ErrorCode = ErrorCode(0x01);
    pub const CONNECTION_REFUSED: ErrorCode = ErrorCode(0x02);
    pub const FLOW_CONTROL_ERROR: ErrorCode = ErrorCode(0x03);
    pub const STREAM_LIMIT_ERROR: ErrorCode = ErrorCode(0x04);
    pub const STREAM_STATE_ERROR: ErrorCode = ErrorCode(0x05);
    pub const FINAL_SIZE_ERROR: ErrorCode = ErrorCode(0x06);
    pub const FRAME_ENCODING_ERROR: ErrorCode = ErrorCode(0x07);
    pub const TRANSPORT_PARAMETER_ERROR: ErrorCode = ErrorCode(0x08);
    pub const CONNECTION_ID_LIMIT_ERROR: ErrorCode = ErrorCode(0x09);
    pub const PROTOCOL_VIOLATION: ErrorCode = ErrorCode(0x0a);
    pub const INVALID_TOKEN: ErrorCode = ErrorCode(0x0b);
    pub const APPLICATION_ERROR: ErrorCode = ErrorCode(0x0c);
    pub const CRYPTO_BUFFER_EXCEEDED: ErrorCode = ErrorCode(0x0d);
    pub const KEY_UPDATE_ERROR: ErrorCode = ErrorCode(0x0e);
    pub const AEAD_LIMIT_REACHED: ErrorCode = ErrorCode(0x0f);
    pub const NO_VIABLE_PATH: ErrorCode = ErrorCode(0x10);

    const TRANSPORT_CODES: [(ErrorCode, &'static str); 17] = [
        (Self::NO_ERROR, "NO_ERROR"),
        (Self::INTERNAL_ERROR, "INTERNAL_ERROR"),
        (Self::CONNECTION_REFUSED, "CONNECTION_REFUSED"),
        (Self::FLOW_CONTROL_ERROR, "FLOW_CONTROL_ERROR"),
        (Self::STREAM_LIMIT_ERROR, "STREAM_LIMIT_ERROR"),
        (Self::STREAM_STATE_ERROR, "STREAM_STATE_ERROR"),
        (Self::FINAL_SIZE_ERROR, "FINAL_SIZE_ERROR"),
        (Self::FRAME_ENCODING_ERROR, "FRAME_ENCODING_ERROR"),
        (Self::TRANSPORT_PARAMETER_ERROR, "TRANSPORT_PARAMETER_ERROR"),
        (Self::CONNECTION_ID_LIMIT_ERROR, "CONNECTION_ID_LIMIT_ERROR"),
        (Self::PROTOCOL_VIOLATION, "PROTOCOL_VIOLATION"),
        (Self::INVALID_TOKEN, "INVALID_TOKEN"),
        (Self::APPLICATION_ERROR, "APPLICATION_ERROR"),
        (Self::CRYPTO_BUFFER_EXCEEDED, "CRYPTO_BUFFER_EXCEEDED"),
        (Self::KEY_UPDATE_ERROR, "KEY_UPDATE_ERROR"),
        (Self::AEAD_LIMIT_REACHED, "AEAD_LIMIT_REACHED"),
        (Self::NO_VIABLE_PATH, "NO_VIABLE_PATH"),
    ];

    /// Code carrying a TLS alert, `0x100 + alert`.
    pub fn crypto(alert: u8) -> Self {
        ErrorCode(CRYPTO_ERROR_BASE + alert as u64)
    }

    pub fn u64(&self) -> u64 {
        self.0
    }

    pub fn is_crypto_error(&self) -> bool {
        (CRYPTO_ERROR_BASE..CRYPTO_ERROR_END).contains(&self.0)
    }

    pub fn tls_alert(&self) -> Option<Alert> {
        if self.is_crypto_error() {
            Some(Alert((self.0 - CRYPTO_ERROR_BASE) as u8))
        } else {
            None
        }
    }

    /// Transport error codes in ascending order. The crypto band is not included.
    pub fn transport_codes() -> impl Iterator<Item = ErrorCode> {
        Self::TRANSPORT_CODES.into_iter().map(|(code, _)| code)
    }

    fn transport_name(&self) -> Option<&'static str> {
        Self::TRANSPORT_CODES
            .iter()
            .find(|(code, _)| code == self)
            .map(|(_, name)| *name)
    }

    /// Canonical short name, e.g. `FLOW_CONTROL_ERROR` or `CRYPTO_ERROR (0x128)`.
    pub fn name(&self) -> String {
        match self.transport_name() {
            Some(name) => name.to_owned(),
            None if self.is_crypto_error() => format!("CRYPTO_ERROR ({:#x})", self.0),
            None => format!("unknown error code: {:#x}", self.0),
        }
    }

    /// Default message. Only crypto errors have one: the text of their TLS alert.
    pub fn message(&self) -> Option<String> {
        self.tls_alert().map(|alert| alert.to_string())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.name(), message),
            None => f.write_str(&self.name()),
        }
    }
}

impl std::error::Error for ErrorCode {}

impl From<u64> for ErrorCode {
    fn from(value: u64) -> Self {
        ErrorCode(value)
    }
}

impl From<ErrorCode> for u64 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    #[instrument(ret, name = "str to ErrorCode", level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseErrorCodeError::Empty);
        }
        if let Some((code, _)) = Self::TRANSPORT_CODES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
        {
            return Ok(*code);
        }
        parse_u64(s)
            .map(ErrorCode)
            .map_err(|_| ParseErrorCodeError::Invalid(s.to_owned()))
    }
}

/// Decimal or `0x` prefixed hexadecimal, surrounding whitespace ignored.
pub fn parse_u64(s: &str) -> Result<u64, ParseIntError> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseErrorCodeError {
    #[error("empty error code")]
    Empty,
    #[error("invalid error code: {0}")]
    Invalid(String),
}
