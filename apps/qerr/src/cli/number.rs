use refuic_error_code::{parse_u64, ErrorCode};

use crate::error::Error;

/// Decimal or `0x` prefixed hexadecimal, same as numeric error codes.
pub fn parse_number(s: &str) -> Result<u64, Error> {
    parse_u64(s).map_err(|_| Error::InvalidNumber(s.trim().to_owned()))
}

pub fn parse_error_code(s: &str) -> Result<ErrorCode, Error> {
    Ok(s.parse::<ErrorCode>()?)
}

pub fn parse_alert(s: &str) -> Result<u8, Error> {
    let value = parse_number(s)?;
    u8::try_from(value).map_err(|_| Error::InvalidAlert(s.trim().to_owned()))
}
