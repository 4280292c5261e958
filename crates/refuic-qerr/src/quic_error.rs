use refuic_error_code::{ErrorCode, ErrorCodeRegistry, Rfc9000};
use tracing::instrument;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ErrorKind {
    /// Error of the transport itself. Crypto errors are transport errors
    /// whose code lies in the TLS alert band.
    Transport { frame_type: u64 },
    /// Error signaled by the application protocol. The code is application-defined.
    Application,
    /// Locally detected timeout. The code is unused.
    Timeout,
}

/// Reason a connection, stream or handshake was terminated.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct QuicError {
    code: ErrorCode,
    kind: ErrorKind,
    message: String,
}

impl QuicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_frame_type(code, 0, message)
    }

    /// Transport error caused by a frame of `frame_type`.
    pub fn with_frame_type(code: ErrorCode, frame_type: u64, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: ErrorKind::Transport { frame_type },
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NO_ERROR,
            kind: ErrorKind::Timeout,
            message: message.into(),
        }
    }

    /// Transport error carrying a TLS alert raised during the handshake.
    #[instrument(skip(message), name = "crypto error", level = "trace")]
    pub fn crypto(alert: u8, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::crypto(alert), message)
    }

    pub fn application(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: ErrorKind::Application,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Frame type that caused a transport error, 0 if unknown or not a transport error.
    pub fn frame_type(&self) -> u64 {
        match self.kind {
            ErrorKind::Transport { frame_type } => frame_type,
            ErrorKind::Application | ErrorKind::Timeout => 0,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_crypto_error(&self) -> bool {
        self.is_crypto_error_in(&Rfc9000)
    }

    pub fn is_crypto_error_in<R: ErrorCodeRegistry + ?Sized>(&self, registry: &R) -> bool {
        !self.is_application_error() && registry.is_crypto_error(self.code)
    }

    pub fn is_application_error(&self) -> bool {
        self.kind == ErrorKind::Application
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }

    /// No QUIC error is worth retrying at this layer.
    pub fn is_temporary(&self) -> bool {
        false
    }
}

impl From<ErrorCode> for QuicError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code, "")
    }
}
