// src/main.rs
// tahoe-magic - magic-folder setup for a Tahoe-LAFS node

use anyhow::Result;
use clap::Parser;
use tahoe_magic::cli::{Cli, Commands, run_magic_folder};
use tahoe_magic::node::{NodeDir, default_node_dir};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit status for any failed step
const STEP_FAILURE: i32 = -1;

#[tokio::main]
async fn main() -> Result<()> {
    // Lets TAHOE_NODE_DIRECTORY / TAHOE_NODE_URL come from a local .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let node = NodeDir::new(cli.node_directory.unwrap_or_else(default_node_dir));

    let result = match cli.command {
        Commands::MagicFolder { action } => {
            run_magic_folder(&node, cli.node_url.as_deref(), action).await
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.diagnostic());
        std::process::exit(STEP_FAILURE);
    }

    Ok(())
}
