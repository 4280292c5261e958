use refuic_qerr::{ErrorKind, QuicError};
use serde_json::{json, Value};

use crate::error::Error;

pub fn to_json(err: &QuicError) -> Value {
    let kind = match err.kind() {
        ErrorKind::Transport { .. } => "transport",
        ErrorKind::Application => "application",
        ErrorKind::Timeout => "timeout",
    };
    let name = if err.is_application_error() {
        Value::Null
    } else {
        Value::String(err.code().name())
    };
    json!({
        "code": err.code().u64(),
        "name": name,
        "kind": kind,
        "frame_type": err.frame_type(),
        "message": err.message(),
        "crypto": err.is_crypto_error(),
        "timeout": err.is_timeout(),
        "rendered": err.to_string()
    })
}

pub fn print(err: &QuicError, json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(&to_json(err))?);
    } else {
        println!("{}", err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use refuic_qerr::{Alert, ErrorCode, QuicError};
    use serde_json::json;

    use super::to_json;

    #[test]
    fn crypto_error_to_json() {
        let err = QuicError::crypto(Alert::HANDSHAKE_FAILURE.0, "");
        assert_eq!(
            to_json(&err),
            json!({
                "code": 0x128,
                "name": "CRYPTO_ERROR (0x128)",
                "kind": "transport",
                "frame_type": 0,
                "message": "",
                "crypto": true,
                "timeout": false,
                "rendered": "CRYPTO_ERROR (0x128): handshake failure"
            })
        );
    }

    #[test]
    fn application_error_to_json() {
        let value = to_json(&QuicError::application(ErrorCode(0x1), "bye"));
        assert_eq!(value["name"], serde_json::Value::Null);
        assert_eq!(value["kind"], "application");
        assert_eq!(value["rendered"], "Application error 0x1: bye");
    }
}
