//! sitecheck entry point

use clap::Parser;
use sitecheck::cli::{Cli, Commands};
use sitecheck::error::CheckError;
use sitecheck::logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            logging::init().expect("failed to initialize logging");
            match sitecheck::cli::check::execute(&args).await {
                Ok(true) => {}
                Ok(false) => {
                    // チェック失敗: レポートは出力済み
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    let code = match e.downcast_ref::<CheckError>() {
                        Some(CheckError::Config(_)) => 2,
                        _ => 1,
                    };
                    std::process::exit(code);
                }
            }
        }
    }
}
