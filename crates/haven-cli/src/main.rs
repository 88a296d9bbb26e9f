use anyhow::Result;
use clap::{Parser, Subcommand};
use haven_core::{HavenConfig, RoleFlags};

mod commands;

#[derive(Parser)]
#[command(name = "haven", about = "Haven wellness statistics CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Stats API base URL (overrides configuration)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the role overview
    Stats {
        /// View as an end user
        #[arg(long)]
        user: bool,
        /// View as a counselor
        #[arg(long)]
        counselor: bool,
        /// View as an administrator
        #[arg(long)]
        admin: bool,
        /// Name shown in the welcome banner
        #[arg(long, default_value = "there")]
        username: String,
        /// Print the resolved overview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = HavenConfig::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(api_url = %config.api_url, "Loaded configuration");

    match cli.command {
        Commands::Stats {
            user,
            counselor,
            admin,
            username,
            json,
        } => {
            let flags = RoleFlags {
                is_user: user,
                is_counselor: counselor,
                is_admin: admin,
            };
            commands::stats::show(&config, flags, &username, json).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
