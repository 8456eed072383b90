//! saywave CLI - render narration text to a WAV file.
//!
//! Thin wrapper over `saywave-synth`: the core returns structured errors
//! and never logs, so presentation lives here.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use saywave_synth::{render, Language, SynthError, SynthesisRequest};

/// saywave - deterministic parametric speech rendering
#[derive(Parser)]
#[command(name = "saywave")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to narrate (max 5000 characters)
    text: String,

    /// Narration language ("en" or "zh")
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Named voice layered over the language default (e.g. "adam", "alice")
    #[arg(long)]
    voice: Option<String>,

    /// Explicit RNG seed (default: derived from text and language)
    #[arg(long)]
    seed: Option<u32>,

    /// Output file path
    #[arg(short, long, default_value = "out.wav")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let language: Language = cli
        .language
        .parse()
        .map_err(|e: SynthError| anyhow::anyhow!(e))?;

    let mut request = SynthesisRequest::new(cli.text.clone(), language);
    if let Some(voice) = &cli.voice {
        request = request.with_voice(voice.clone());
    }
    if let Some(seed) = cli.seed {
        request = request.with_seed(seed);
    }

    let result = render(&request).map_err(|e| anyhow::anyhow!(e))?;

    std::fs::write(&cli.output, &result.wav.wav_data)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "{} {} ({} words, {:.1}s, {} bytes, seed {})",
        "wrote".green().bold(),
        cli.output.display(),
        result.word_count,
        result.wav.duration_seconds(),
        result.wav.wav_data.len(),
        result.seed,
    );

    Ok(())
}
