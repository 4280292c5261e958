use clap::{Parser, Subcommand};
use tracing::instrument;

mod codes;
mod crypto;
mod describe;
mod number;
mod report;
mod timeout;

#[derive(Parser, Debug, PartialEq, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// render a transport or application error
    Describe(describe::Cli),
    /// render a TLS alert raised during the handshake
    Crypto(crypto::Cli),
    /// render an idle or handshake timeout
    Timeout(timeout::Cli),
    /// list transport error codes
    Codes(codes::Cli),
}

impl Commands {
    #[instrument(skip(self), name = "first command", level = "trace")]
    pub fn run(self) -> Result<(), anyhow::Error> {
        match self {
            Commands::Describe(cli) => cli.run(),
            Commands::Crypto(cli) => cli.run(),
            Commands::Timeout(cli) => cli.run(),
            Commands::Codes(cli) => cli.run(),
        }
    }
}
