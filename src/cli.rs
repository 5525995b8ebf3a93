// src/cli.rs
use std::{io::Write, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use tracing::info;

use crate::{
    check::{Checker, ResultLog, ResultRecord},
    config::{consts::{API_URL, ENDPOINT_ENV}, options::AppOptions},
    core::net::{HttpTransport, Transport},
    error::CheckError,
    file,
};

/// One mention check per run. Prints the normalized record.
#[derive(Debug, Clone, Parser)]
#[command(name = "mention_check", version, about = "Check whether a brand is mentioned in a generated answer")]
pub struct Args {
    /// Prompt to send
    #[arg(short, long)]
    pub prompt: String,

    /// Brand to look for
    #[arg(short, long)]
    pub brand: String,

    /// Check API endpoint
    #[arg(long, env = ENDPOINT_ENV, default_value = API_URL)]
    pub endpoint: String,

    /// Write gemini-brand-mentions.csv into this directory
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let transport = HttpTransport::new().wrap_err("building HTTP client")?;
    run_with(&args, transport, &mut std::io::stdout().lock())
}

/// Validation errors return before anything is printed or written.
/// A request failure still prints the record and writes the export, then
/// returns the surfaced message as the error.
pub fn run_with<T: Transport, W: Write>(args: &Args, transport: T, out: &mut W) -> color_eyre::Result<()> {
    let mut opts = AppOptions::default();
    opts.set_endpoint(&args.endpoint);
    if let Some(dir) = &args.out {
        opts.export.set_dir(&dir.to_string_lossy());
    }

    let checker = Checker::new(transport, opts.endpoint.as_str());
    let mut log = ResultLog::new();

    let result = checker.submit(&mut log, &args.prompt, &args.brand);
    if matches!(result, Err(CheckError::Validation)) {
        return result.map_err(Into::into);
    }

    if let Some(r) = log.get(0) {
        print_record(out, r)?;
    }

    if args.out.is_some() {
        if let Some(path) = file::write_export(&log, &opts.export)? {
            info!("CLI: Export written → {}", path.display());
            writeln!(out, "Wrote {}", path.display())?;
        }
    }

    result.map_err(Into::into)
}

fn print_record<W: Write>(out: &mut W, r: &ResultRecord) -> std::io::Result<()> {
    writeln!(out, "prompt: {}", r.prompt())?;
    writeln!(out, "brand: {}", r.brand())?;
    writeln!(out, "mentioned: {}", r.mentioned())?;
    writeln!(out, "position: {}", r.position())?;
    writeln!(out, "raw_text: {}", r.raw_text())
}
