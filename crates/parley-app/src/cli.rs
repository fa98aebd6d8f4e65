use std::path::PathBuf;

use clap::Parser;

/// Parley: a persona chat client for OpenAI-compatible models.
#[derive(Parser, Debug)]
#[command(name = "parley", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model to start with (must be listed in the config).
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Sampling temperature, 0.0-1.0.
    #[arg(short = 't', long)]
    pub temperature: Option<f64>,

    /// Persona to start with.
    #[arg(short = 'p', long)]
    pub persona: Option<String>,

    /// Speak replies (saves an MP3 clip per reply).
    #[arg(long)]
    pub tts: bool,

    /// Transcribe an audio file into the conversation before the first prompt.
    #[arg(long, value_name = "FILE")]
    pub transcribe: Option<PathBuf>,

    /// Directory for exported transcripts and speech clips.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
