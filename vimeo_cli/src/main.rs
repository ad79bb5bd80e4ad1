mod commands;
mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vimeo_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "vimeo")]
#[command(about = "Query and manage Vimeo users from the command line")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// OAuth access token
    #[arg(long, env = "VIMEO_ACCESS_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API root URL
    #[arg(long, env = "VIMEO_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profiles, social graph, subscriptions and feed
    Users(commands::users::UsersArgs),
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default().with_timeout(Duration::from_secs(self.timeout));
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url);
        }
        if let Some(token) = &self.token {
            config = config.with_access_token(token);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vimeo=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    if cli.token.is_none() {
        tracing::warn!("VIMEO_ACCESS_TOKEN is not set; only public resources are reachable");
    }
    let client = Client::new(cli.config()).context("building Vimeo client")?;

    match &cli.command {
        Commands::Users(args) => commands::users::run(args, &client, &format).await?,
    }

    Ok(())
}
