use std::error::Error;

use refuic_error_code::ErrorCode;
use tracing::{debug, instrument};

use crate::QuicError;

/// Normalizes any error into a [`QuicError`].
///
/// A `QuicError` is returned as is and a bare [`ErrorCode`] becomes a transport
/// error without message. Everything else becomes an `INTERNAL_ERROR` whose
/// message is the description of the original error.
///
/// An `anyhow::Error` loses its concrete type once boxed, so pass it to
/// [`anyhow_to_quic_error`] instead.
#[instrument(skip(err), name = "error to QuicError", level = "trace")]
pub fn to_quic_error<E>(err: E) -> QuicError
where
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    let err = match err.into().downcast::<QuicError>() {
        Ok(quic_error) => return *quic_error,
        Err(err) => err,
    };
    match err.downcast::<ErrorCode>() {
        Ok(code) => QuicError::from(*code),
        Err(err) => {
            debug!("wrapping foreign error as internal error: {}", err);
            QuicError::new(ErrorCode::INTERNAL_ERROR, err.to_string())
        }
    }
}

/// [`to_quic_error`] for errors carried through `anyhow`.
#[instrument(skip(err), name = "anyhow error to QuicError", level = "trace")]
pub fn anyhow_to_quic_error(err: anyhow::Error) -> QuicError {
    let err = match err.downcast::<QuicError>() {
        Ok(quic_error) => return quic_error,
        Err(err) => err,
    };
    match err.downcast::<ErrorCode>() {
        Ok(code) => QuicError::from(code),
        Err(err) => {
            debug!("wrapping foreign error as internal error: {}", err);
            QuicError::new(ErrorCode::INTERNAL_ERROR, err.to_string())
        }
    }
}

impl From<anyhow::Error> for QuicError {
    fn from(err: anyhow::Error) -> Self {
        anyhow_to_quic_error(err)
    }
}

#[cfg(test)]
mod tests {
    use refuic_error_code::{Alert, ErrorCode};

    use super::{anyhow_to_quic_error, to_quic_error};
    use crate::{ErrorKind, QuicError};

    #[derive(thiserror::Error, Debug)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn quic_error_is_unchanged() {
        let errors = vec![
            QuicError::with_frame_type(ErrorCode::STREAM_STATE_ERROR, 0x11, "stream closed"),
            QuicError::timeout("idle"),
            QuicError::crypto(Alert::DECODE_ERROR.0, ""),
            QuicError::application(ErrorCode(0x1), "bye"),
        ];
        for err in errors {
            assert_eq!(to_quic_error(err.clone()), err);
        }
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = to_quic_error(Boom);
        let twice = to_quic_error(once.clone());
        assert_eq!(once, twice);

        let once = to_quic_error(ErrorCode::PROTOCOL_VIOLATION);
        assert_eq!(to_quic_error(once.clone()), once);
    }

    #[test]
    fn bare_error_code() {
        let err = to_quic_error(ErrorCode(0x0a));
        assert_eq!(err.code(), ErrorCode(0x0a));
        assert_eq!(err.message(), "");
        assert_eq!(err.kind(), ErrorKind::Transport { frame_type: 0 });
    }

    #[test]
    fn foreign_error() {
        let err = to_quic_error(Boom);
        assert_eq!(err.code(), ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message(), "boom");
        assert_eq!(err.kind(), ErrorKind::Transport { frame_type: 0 });
        assert_eq!(err.to_string(), "INTERNAL_ERROR: boom");
    }

    #[test]
    fn io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer went away");
        let err = to_quic_error(io);
        assert_eq!(err.code(), ErrorCode::INTERNAL_ERROR);
        assert_eq!(err.message(), "peer went away");
    }

    #[test]
    fn plain_description() {
        let err = to_quic_error("stateless reset received");
        assert_eq!(
            err,
            QuicError::new(ErrorCode::INTERNAL_ERROR, "stateless reset received")
        );
    }

    #[test]
    fn boxed_quic_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(QuicError::application(ErrorCode(0x42), ""));
        assert_eq!(
            to_quic_error(boxed),
            QuicError::application(ErrorCode(0x42), "")
        );
    }

    #[test]
    fn quic_error_through_anyhow() {
        let err = QuicError::with_frame_type(ErrorCode::FLOW_CONTROL_ERROR, 0x7, "x");
        assert_eq!(anyhow_to_quic_error(anyhow::Error::new(err.clone())), err);

        let converted: QuicError = anyhow::Error::new(err.clone()).into();
        assert_eq!(converted, err);
    }

    #[test]
    fn error_code_through_anyhow() {
        let err = anyhow_to_quic_error(anyhow::Error::new(ErrorCode::PROTOCOL_VIOLATION));
        assert_eq!(err, QuicError::new(ErrorCode::PROTOCOL_VIOLATION, ""));
    }

    #[test]
    fn foreign_error_through_anyhow() {
        let err = anyhow_to_quic_error(anyhow::anyhow!("boom"));
        assert_eq!(err, QuicError::new(ErrorCode::INTERNAL_ERROR, "boom"));

        let err = anyhow_to_quic_error(anyhow::Error::new(Boom));
        assert_eq!(err, QuicError::new(ErrorCode::INTERNAL_ERROR, "boom"));
    }

    #[test]
    fn anyhow_conversion_is_idempotent() {
        let once = anyhow_to_quic_error(anyhow::anyhow!("boom"));
        assert_eq!(anyhow_to_quic_error(anyhow::Error::new(once.clone())), once);
        assert_eq!(to_quic_error(once.clone()), once);
    }
}
