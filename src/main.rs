use clap::Parser;
use spotlight::cli::{Cli, Commands};
use spotlight::config::Config;
use spotlight::logging;
use spotlight::nav::NoopUiBridge;
use spotlight::overlay::OverlayController;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search(opts) => {
            let config = Config::load(opts.config.as_deref())?;
            config.validate()?;

            let controller = OverlayController::new(&config, Arc::new(NoopUiBridge));
            if !opts.offline {
                controller.fetch_now().await;
            }

            let results = controller.set_query(&opts.query);
            if results.is_empty() {
                println!("No results found for \"{}\"", opts.query);
            } else {
                for result in &results {
                    println!(
                        "[{}] {} • {}  ({}#{})",
                        result.category.label(),
                        result.title,
                        result.description,
                        result.path,
                        result.id,
                    );
                }
                println!("{} result(s)", results.len());
            }
        }
        Commands::Config(opts) => {
            match opts.action {
                spotlight::cli::ConfigAction::Show => {
                    let config = Config::load(opts.config.as_deref())?;
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                spotlight::cli::ConfigAction::Validate => {
                    let config = Config::load(opts.config.as_deref())?;
                    config.validate()?;
                    info!("Configuration is valid");
                }
                spotlight::cli::ConfigAction::Init => {
                    Config::write_default(opts.config.as_deref().unwrap_or("spotlight.json"))?;
                    info!("Configuration file created");
                }
            }
        }
        Commands::Version => {
            println!("spotlight {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
