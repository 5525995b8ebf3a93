// src/check/checker.rs
use tracing::{debug, info};

use crate::core::net::Transport;
use crate::error::CheckError;
use super::results::ResultLog;
use super::types::CheckInput;

/// Both fields must be non-blank. Values are passed on untrimmed.
pub fn validate(prompt: &str, brand: &str) -> Result<CheckInput, CheckError> {
    if prompt.trim().is_empty() || brand.trim().is_empty() {
        debug!("Check: Rejected blank input");
        return Err(CheckError::Validation);
    }
    Ok(CheckInput { prompt: s!(prompt), brand: s!(brand) })
}

/// Synchronous submit: validate, send, ingest. Frontends that must not block
/// (the GUI) call the three steps themselves.
pub struct Checker<T: Transport> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> Checker<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into() }
    }

    /// On `Err(CheckError::Request)` the record is already in `log`.
    pub fn submit(&self, log: &mut ResultLog, prompt: &str, brand: &str) -> Result<(), CheckError> {
        let input = validate(prompt, brand)?;
        info!("Check: Begin endpoint={} brand={}", self.endpoint, input.brand);

        let outcome = self.transport.send(&self.endpoint, &input);
        match log.ingest(&input, outcome) {
            Some(msg) => Err(CheckError::Request(msg)),
            None => Ok(()),
        }
    }
}
