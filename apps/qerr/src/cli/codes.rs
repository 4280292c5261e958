use clap::Parser;
use refuic_error_code::{ErrorCode, CRYPTO_ERROR_BASE};

#[derive(Parser, Debug, PartialEq, Clone)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> Result<(), anyhow::Error> {
        for line in lines() {
            println!("{}", line);
        }
        Ok(())
    }
}

fn lines() -> Vec<String> {
    let mut lines: Vec<String> = ErrorCode::transport_codes()
        .map(|code| format!("{:#06x} {}", code.u64(), code.name()))
        .collect();
    lines.push(format!(
        "{:#06x}-{:#06x} CRYPTO_ERROR",
        CRYPTO_ERROR_BASE,
        CRYPTO_ERROR_BASE + 0xff
    ));
    lines
}
