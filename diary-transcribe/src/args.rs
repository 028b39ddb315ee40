use std::path::PathBuf;

use clap::Parser;
use gemini_transcriber::{API_KEY_ENV_VAR, SupportedFormat};

/// Transcribe audio diary recordings with Gemini
#[derive(Debug, Parser)]
#[command(
    name = "diary-transcribe",
    about = "Transcribe audio diary recordings with Gemini",
    after_help = after_help()
)]
pub struct Args {
    /// Audio files to transcribe
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, env = "DIARY_TRANSCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured prompt
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Override the configured model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Log filter directive, e.g. `gemini_transcriber=debug`
    #[arg(long, env = "DIARY_TRANSCRIBE_LOG")]
    pub log_filter: Option<String>,
}

fn after_help() -> String {
    format!(
        "Supported formats: {}\nThe API key is read from {API_KEY_ENV_VAR} unless set in the config file.",
        SupportedFormat::display_list()
    )
}
