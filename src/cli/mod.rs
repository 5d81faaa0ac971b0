use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spotlight", version, about = "Portfolio content search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a one-shot search across all content sources.
    Search(SearchOpts),
    Config(ConfigOpts),
    Version,
}

#[derive(clap::Args)]
pub struct SearchOpts {
    #[arg(short, long)]
    pub config: Option<String>,
    /// The query; terms are matched conjunctively across each record's
    /// searchable fields.
    pub query: String,
    /// Skip remote fetches and search static content only.
    #[arg(long)]
    pub offline: bool,
}

#[derive(clap::Args)]
pub struct ConfigOpts {
    #[arg(short, long)]
    pub config: Option<String>,
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    Show,
    Validate,
    Init,
}
