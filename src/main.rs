use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sevlog::config::{self, LoggerConfig};
use sevlog::logging::validate_date_format;
use sevlog::{Logger, Severity};

/// Append a severity-tagged line to a log file
#[derive(Debug, Parser)]
#[command(name = "sevlog", version, about)]
struct Cli {
    /// Config file (defaults to ~/.sevlog/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file, overriding the config
    #[arg(short, long)]
    file: Option<String>,

    /// Least urgent severity to write, overriding the config
    #[arg(short, long)]
    threshold: Option<Severity>,

    /// Category tag written as `[FEATURE]`
    #[arg(short = 'F', long, default_value = "")]
    feature: String,

    /// Timestamp pattern (chrono strftime), overriding the config
    #[arg(long)]
    date_format: Option<String>,

    /// Severity of the message (emerg, alert, crit, err, warn, notice, info, debug)
    level: Severity,

    /// Message text
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

fn resolve_config(cli: &Cli) -> Result<LoggerConfig> {
    let mut settings = match &cli.config {
        Some(path) => LoggerConfig::load(path)?,
        None => LoggerConfig::load_or_default(&config::config_file_path())?,
    };

    if let Some(file) = &cli.file {
        settings.path = file.clone();
    }
    if let Some(threshold) = cli.threshold {
        settings.threshold = threshold;
    }
    if let Some(date_format) = &cli.date_format {
        validate_date_format(date_format).context("Invalid --date-format")?;
        settings.date_format = date_format.clone();
    }
    Ok(settings)
}

fn run(cli: &Cli) -> Result<()> {
    let settings = resolve_config(cli)?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let mut logger = Logger::from_config(&settings).context("Failed to set up logger")?;
    logger
        .log(&cli.message.join(" "), cli.level, &cli.feature)
        .context("Failed to write log line")?;
    logger.close().context("Failed to close logger")?;

    Ok(())
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sevlog=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}
