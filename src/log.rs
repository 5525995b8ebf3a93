// src/log.rs
//! tracing setup. The GUI has no console, so it logs to `.store/debug.log`;
//! the CLI logs to stderr. Timestamps are uptime (hh:mm:ss since start).
//! `RUST_LOG` overrides the default `info` filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Append to the debug log file; stderr if the file cannot be opened.
pub fn init_file() {
    let path = log_path();
    let file = fs::create_dir_all(STORE_DIR)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(f) => {
            let _ = fmt()
                .with_env_filter(filter())
                .with_timer(fmt::time::uptime())
                .with_ansi(false)
                .with_writer(Mutex::new(f))
                .try_init();
        }
        Err(e) => {
            init_stderr();
            tracing::warn!("Log: Cannot open {}: {}", path.display(), e);
        }
    }
}

pub fn init_stderr() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr)
        .try_init();
}
