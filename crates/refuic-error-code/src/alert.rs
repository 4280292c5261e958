use std::fmt;

// https://www.rfc-editor.org/rfc/rfc8446#section-6
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Alert(pub u8);

impl Alert {
    pub const CLOSE_NOTIFY: Alert = Alert(0);
    pub const UNEXPECTED_MESSAGE: Alert = Alert(10);
    pub const BAD_RECORD_MAC: Alert = Alert(20);
    pub const RECORD_OVERFLOW: Alert = Alert(22);
    pub const HANDSHAKE_FAILURE: Alert = Alert(40);
    pub const BAD_CERTIFICATE: Alert = Alert(42);
    pub const UNSUPPORTED_CERTIFICATE: Alert = Alert(43);
    pub const CERTIFICATE_REVOKED: Alert = Alert(44);
    pub const CERTIFICATE_EXPIRED: Alert = Alert(45);
    pub const CERTIFICATE_UNKNOWN: Alert = Alert(46);
    pub const ILLEGAL_PARAMETER: Alert = Alert(47);
    pub const UNKNOWN_CA: Alert = Alert(48);
    pub const ACCESS_DENIED: Alert = Alert(49);
    pub const DECODE_ERROR: Alert = Alert(50);
    pub const DECRYPT_ERROR: Alert = Alert(51);
    pub const PROTOCOL_VERSION: Alert = Alert(70);
    pub const INSUFFICIENT_SECURITY: Alert = Alert(71);
    pub const INTERNAL_ERROR: Alert = Alert(80);
    pub const INAPPROPRIATE_FALLBACK: Alert = Alert(86);
    pub const USER_CANCELED: Alert = Alert(90);
    pub const MISSING_EXTENSION: Alert = Alert(109);
    pub const UNSUPPORTED_EXTENSION: Alert = Alert(110);
    pub const UNRECOGNIZED_NAME: Alert = Alert(112);
    pub const BAD_CERTIFICATE_STATUS_RESPONSE: Alert = Alert(113);
    pub const UNKNOWN_PSK_IDENTITY: Alert = Alert(115);
    pub const CERTIFICATE_REQUIRED: Alert = Alert(116);
    // https://www.rfc-editor.org/rfc/rfc7301#section-3.2
    pub const NO_APPLICATION_PROTOCOL: Alert = Alert(120);

    /// Alert description text, `None` for values no TLS version assigns.
    pub fn description(&self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "close notify",
            10 => "unexpected message",
            20 => "bad record MAC",
            // 21, 30, 60, 100, 111 and 114 are only defined by TLS 1.2 and earlier
            21 => "decryption failed",
            22 => "record overflow",
            30 => "decompression failure",
            40 => "handshake failure",
            42 => "bad certificate",
            43 => "unsupported certificate",
            44 => "revoked certificate",
            45 => "expired certificate",
            46 => "unknown certificate",
            47 => "illegal parameter",
            48 => "unknown certificate authority",
            49 => "access denied",
            50 => "error decoding message",
            51 => "error decrypting message",
            60 => "export restriction",
            70 => "protocol version not supported",
            71 => "insufficient security level",
            80 => "internal error",
            86 => "inappropriate fallback",
            90 => "user canceled",
            100 => "no renegotiation",
            109 => "missing extension",
            110 => "unsupported extension",
            111 => "certificate unobtainable",
            112 => "unrecognized name",
            113 => "bad certificate status response",
            114 => "bad certificate hash value",
            115 => "unknown PSK identity",
            116 => "certificate required",
            120 => "no application protocol",
            _ => return None,
        })
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => f.write_str(description),
            None => write!(f, "tls: alert({})", self.0),
        }
    }
}

impl From<u8> for Alert {
    fn from(value: u8) -> Self {
        Alert(value)
    }
}
