#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod env_file;
mod report;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use gemini_transcriber::Transcriber;
use transcriber_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Pick up `.env` before clap reads its env fallbacks
    if let Ok(cwd) = std::env::current_dir() {
        env_file::load_from(&cwd);
    }

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(model) = args.model {
        config.gemini.model = model;
    }
    if let Some(prompt) = args.prompt {
        config.transcription.prompt = prompt;
    }
    config.validate()?;

    // Initialize telemetry
    transcriber_telemetry::init(&config.telemetry, args.log_filter.as_deref())?;

    // Build transcriber
    let transcriber = Transcriber::from_config(&config)?;

    tracing::info!(
        model = transcriber.model(),
        files = args.files.len(),
        "starting diary-transcribe"
    );

    // Transcribe in order
    let mut stdout = std::io::stdout().lock();
    let all_transcribed =
        report::transcribe_all(&transcriber, &args.files, &config.transcription.prompt, &mut stdout).await?;

    Ok(if all_transcribed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
