use clap::Parser;
use refuic_qerr::QuicError;
use tracing::instrument;

use super::{number, report};

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {
    /// TLS alert description, decimal or 0x-prefixed hex
    #[clap(value_parser = number::parse_alert)]
    alert: u8,
    #[clap(long, short, value_parser, default_value = "")]
    message: String,
    #[clap(long, action)]
    json: bool,
}

impl Cli {
    #[instrument(skip(self), name = "describe crypto error", level = "info")]
    pub fn run(self) -> Result<(), anyhow::Error> {
        let err = QuicError::crypto(self.alert, self.message);
        report::print(&err, self.json)?;
        Ok(())
    }
}
