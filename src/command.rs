//! Command execution for the storeprobe CLI.
//!
//! - **check**: fetch storefront URLs and classify each one
//! - **inspect**: classify a saved HTML page offline
//! - **common**: report rendering shared by both

pub mod check;
pub mod common;
pub mod inspect;

use crate::{
    cli::{Args, Command},
    result::Result,
};

/// Dispatch the parsed subcommand.
pub async fn execute(args: Args) -> Result<()> {
    let config = args.resolve_config()?;

    match args.command {
        Command::Check { urls } => {
            check::execute(&config, &urls, args.json).await
        }
        Command::Inspect { file } => inspect::execute(&file, args.json).await,
    }
}
