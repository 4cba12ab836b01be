use clap::Parser;
use poly_edge::cli::{Cli, Commands};
use poly_edge::config::Config;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; a missing file means defaults, a bad one is an error
    if !Path::new(&cli.config).exists() {
        eprintln!("Warning: {} not found, using default configuration", cli.config);
    }
    let config = Config::load_or_default(&cli.config)?;

    // Initialize telemetry
    let _telemetry = poly_edge::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Decide(args) => {
            args.execute(&config).await?;
        }
        Commands::Replay(args) => {
            tracing::info!("Starting replay");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
