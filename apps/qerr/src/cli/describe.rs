use clap::Parser;
use refuic_error_code::ErrorCode;
use refuic_qerr::QuicError;
use tracing::{instrument, warn};

use super::{number, report};

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {
    /// error code name, or number in decimal or 0x-prefixed hex
    #[clap(value_parser = number::parse_error_code)]
    code: ErrorCode,
    /// type of the frame that triggered the error
    #[clap(long, value_parser = number::parse_number, default_value = "0")]
    frame_type: u64,
    #[clap(long, short, value_parser, default_value = "")]
    message: String,
    /// treat the code as an application protocol error code
    #[clap(long, action)]
    application: bool,
    #[clap(long, action)]
    json: bool,
}

impl Cli {
    pub fn quic_error(&self) -> QuicError {
        if self.application {
            if self.frame_type != 0 {
                warn!("application errors carry no frame type, ignoring {:#x}", self.frame_type);
            }
            QuicError::application(self.code, self.message.as_str())
        } else {
            QuicError::with_frame_type(self.code, self.frame_type, self.message.as_str())
        }
    }

    #[instrument(skip(self), name = "describe error code", level = "info")]
    pub fn run(self) -> Result<(), anyhow::Error> {
        report::print(&self.quic_error(), self.json)?;
        Ok(())
    }
}
