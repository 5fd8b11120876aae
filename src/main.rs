// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2hatena::{AppError, CommandLineInput, NotionToHatena, PipelineConfig, RunOutcome};
use std::fs;
use std::process::ExitCode;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion2hatena.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Resolves configuration and performs one run.
async fn execute_pipeline(cli: CommandLineInput) -> Result<RunOutcome, AppError> {
    let config = PipelineConfig::resolve(cli)?;
    let pipeline = NotionToHatena::from_config(&config)?;
    pipeline.run_page(&config.page_id, config.publish_mode).await
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    match execute_pipeline(cli).await {
        Ok(RunOutcome::Published(receipt)) => {
            match receipt.location {
                Some(location) => println!("✓ Posted as {}: {}", receipt.mode, location),
                None => println!("✓ Posted as {}", receipt.mode),
            }
            Ok(ExitCode::SUCCESS)
        }
        Ok(RunOutcome::Skipped { .. }) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_user_facing() => {
            log::error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(anyhow::Error::new(e).context("notion2hatena run failed")),
    }
}
