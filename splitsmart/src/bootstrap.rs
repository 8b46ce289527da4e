use clap::Parser;
use splitsmart_application::{GroupLedger, LedgerError};
use splitsmart_domain::Currency;
use splitsmart_i18n as i18n;
use splitsmart_infrastructure::{JsonGroupRepository, SnapshotLoadError};
use splitsmart_presentation::SummaryPresenter;
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Prints balances, suggested settlements and spending reports for groups
/// stored in a JSON snapshot.
#[derive(Debug, Parser)]
#[command(name = "splitsmart", version, about)]
pub struct AppConfig {
    /// Path to the group snapshot file.
    #[arg(long, env = "SPLITSMART_SNAPSHOT")]
    pub snapshot: PathBuf,
    /// Only summarize this group.
    #[arg(long, env = "SPLITSMART_GROUP")]
    pub group: Option<String>,
    /// Currency for groups that do not declare one.
    #[arg(long, env = "SPLITSMART_CURRENCY", default_value = "USD", value_parser = parse_currency)]
    pub currency: Currency,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] SnapshotLoadError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

fn parse_currency(code: &str) -> Result<Currency, String> {
    Currency::from_code(code).ok_or_else(|| {
        let supported: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
        format!("unsupported currency '{code}' (expected one of {})", supported.join(", "))
    })
}

/// Initialize logging and tracing
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(config: &AppConfig) -> Result<String, AppError> {
    let repository = JsonGroupRepository::open(&config.snapshot, config.currency)?;
    let ledger = GroupLedger::new(&repository);

    let names = match &config.group {
        Some(name) => vec![name.clone()],
        None => ledger.group_names()?,
    };

    let mut sections = Vec::with_capacity(names.len());
    for name in &names {
        let summary = ledger.summarize(name)?;
        sections.push(SummaryPresenter::render(&summary));
    }
    Ok(sections.join("\n"))
}

/// Run the application with proper error handling
pub fn run() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_logging();

    let config = AppConfig::parse();

    match render(&config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(AppError::Ledger(LedgerError::GroupNotFound(name))) => {
            tracing::error!(group = %name, "{}", i18n::group_not_found(&name));
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("{}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
