use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod interview;

use crate::core::AppConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the interview service
    #[arg(long)]
    api_url: Option<String>,

    /// Candidate name, prompted for when omitted
    #[arg(long)]
    name: Option<String>,

    /// Job role to interview for, prompted for when omitted
    #[arg(long)]
    role: Option<String>,

    /// Path to a resume file, prompted for when omitted
    #[arg(long)]
    resume: Option<PathBuf>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so the transcript on stdout stays readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AppConfig::default();
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }

    interview::run(&config, args.name, args.role, args.resume).await
}
