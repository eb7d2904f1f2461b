mod config;
mod errors;
mod extraction;
mod interview;
mod llm_client;
mod models;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::catalog::Catalog;
use crate::interview::chooser::RngChooser;
use crate::interview::console::StdConsole;
use crate::interview::{Session, SessionSettings};
use crate::llm_client::LlmClient;
use crate::models::record::StudentRecord;

/// Record file read when `--record` is not given.
const DEFAULT_RECORD_PATH: &str = "wnskadud_structured (1).json";

#[derive(Parser)]
#[command(
    name = "interview",
    version,
    about = "Mock university admission interview driven by a student's school record"
)]
struct Cli {
    /// Structured school record (JSON).
    #[arg(short, long, default_value = DEFAULT_RECORD_PATH)]
    record: PathBuf,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Fixed six-question interview over a summary of the record.
    Simple,
    /// Six questions on randomly chosen, career-relevant record excerpts, with retries.
    Elaborate,
    /// Print five deep questions for the record in one shot.
    Questions,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Structured logging to stderr; stdout carries the interview itself
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting interview v{}", env!("CARGO_PKG_VERSION"));

    let record = StudentRecord::load(&cli.record)?;
    info!("Loaded record {}", cli.record.display());

    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let catalog = Catalog::default();
    let settings = SessionSettings {
        max_retries_per_question: config.max_retries_per_question,
        ..SessionSettings::default()
    };
    let mut console = StdConsole;

    let report = match cli.mode {
        Mode::Simple => {
            let mut session = Session {
                model: &llm,
                console: &mut console,
                settings: &settings,
            };
            interview::simple::run(&mut session, &record).await?
        }
        Mode::Elaborate => {
            // Extraction runs before any remote call so an empty record never reaches the model
            let extraction = extraction::extract(&record, &catalog)?;
            let mut chooser = RngChooser::thread();
            let mut session = Session {
                model: &llm,
                console: &mut console,
                settings: &settings,
            };
            interview::elaborate::run(
                &mut session,
                record.name(),
                &extraction,
                &catalog,
                &mut chooser,
            )
            .await?
        }
        Mode::Questions => {
            let extraction = extraction::extract(&record, &catalog)?;
            interview::batch::run(&llm, &mut console, &record, &extraction).await?;
            return Ok(());
        }
    };

    info!(
        "Session ended ({:?}) at question {} with {} transcript turns",
        report.outcome,
        report.questions_asked,
        report.transcript.len()
    );

    Ok(())
}
