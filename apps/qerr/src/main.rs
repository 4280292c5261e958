//! # qerr は QUIC のエラーコードを人が読める形に変換して表示するコマンドです。
mod cli;
mod error;

use clap::Parser;
use cli::Cli;

pub fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();

    cli.command.run()
}
