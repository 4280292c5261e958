use clap::Parser;
use refuic_qerr::QuicError;
use tracing::instrument;

use super::report;

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {
    #[clap(long, short, value_parser, default_value = "")]
    message: String,
    #[clap(long, action)]
    json: bool,
}

impl Cli {
    #[instrument(skip(self), name = "describe timeout", level = "info")]
    pub fn run(self) -> Result<(), anyhow::Error> {
        report::print(&QuicError::timeout(self.message), self.json)?;
        Ok(())
    }
}
