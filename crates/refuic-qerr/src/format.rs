use std::fmt;

use refuic_error_code::{ErrorCodeRegistry, Rfc9000};

use crate::QuicError;

/// [`QuicError`] rendered against a specific registry, see [`QuicError::display_with`].
pub struct Rendered<'a, R: ?Sized> {
    error: &'a QuicError,
    registry: &'a R,
}

impl QuicError {
    pub fn display_with<'a, R>(&'a self, registry: &'a R) -> Rendered<'a, R>
    where
        R: ErrorCodeRegistry + ?Sized,
    {
        Rendered {
            error: self,
            registry,
        }
    }
}

impl<R: ErrorCodeRegistry + ?Sized> fmt::Display for Rendered<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error;
        let code = error.code();

        // application error codes mean nothing to the registry
        if error.is_application_error() {
            write!(f, "Application error {:#x}", code.u64())?;
            if !error.message().is_empty() {
                write!(f, ": {}", error.message())?;
            }
            return Ok(());
        }

        f.write_str(&self.registry.name(code))?;
        if error.frame_type() != 0 {
            write!(f, " (frame type: {:#x})", error.frame_type())?;
        }
        let message = if error.message().is_empty() {
            self.registry.message(code)
        } else {
            Some(error.message().into())
        };
        match message {
            Some(message) if !message.is_empty() => write!(f, ": {}", message),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for QuicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&Rfc9000), f)
    }
}

impl std::error::Error for QuicError {}
