use std::borrow::Cow;

use crate::ErrorCode;

/// Lookup of canonical names and default messages for transport error codes.
///
/// Application error codes are never passed to a registry.
pub trait ErrorCodeRegistry {
    fn name(&self, code: ErrorCode) -> Cow<'_, str>;
    fn message(&self, code: ErrorCode) -> Option<Cow<'_, str>>;
    fn is_crypto_error(&self, code: ErrorCode) -> bool;
}

/// Transport codes of RFC 9000 and the TLS alert band of RFC 9001.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rfc9000;

impl ErrorCodeRegistry for Rfc9000 {
    fn name(&self, code: ErrorCode) -> Cow<'_, str> {
        Cow::Owned(code.name())
    }

    fn message(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        code.message().map(Cow::Owned)
    }

    fn is_crypto_error(&self, code: ErrorCode) -> bool {
        code.is_crypto_error()
    }
}

impl<R: ErrorCodeRegistry + ?Sized> ErrorCodeRegistry for &R {
    fn name(&self, code: ErrorCode) -> Cow<'_, str> {
        (**self).name(code)
    }

    fn message(&self, code: ErrorCode) -> Option<Cow<'_, str>> {
        (**self).message(code)
    }

    fn is_crypto_error(&self, code: ErrorCode) -> bool {
        (**self).is_crypto_error(code)
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCodeRegistry, Rfc9000};
    use crate::{Alert, ErrorCode};

    #[test]
    fn rfc9000_registry() {
        let registry = Rfc9000;
        assert_eq!(registry.name(ErrorCode::INVALID_TOKEN), "INVALID_TOKEN");
        assert_eq!(registry.message(ErrorCode::INVALID_TOKEN), None);

        let code = ErrorCode::crypto(Alert::CERTIFICATE_REQUIRED.0);
        assert!(registry.is_crypto_error(code));
        assert_eq!(
            registry.message(code).as_deref(),
            Some("certificate required")
        );
    }

    #[test]
    fn registry_through_trait_object() {
        let registry: &dyn ErrorCodeRegistry = &Rfc9000;
        assert_eq!(registry.name(ErrorCode(0x2)), "CONNECTION_REFUSED");
        assert!(!registry.is_crypto_error(ErrorCode(0x2)));
    }
}
