// src/check/ingest.rs
//
// Turns one transport outcome into one display record plus the message to
// surface next to the form. Pure; the log does the inserting.

use tracing::{info, warn};

use super::results::ResultRecord;
use super::types::{is_success, CheckInput, CheckResponse, Outcome};

pub const DEFAULT_MENTIONED: &str = "No";
pub const NO_RESPONSE: &str = "No response received";
pub const REQUEST_FAILED_HINT: &str = "Request failed. Check the Raw Response column for details.";
pub const CONNECT_FAILED: &str = "Failed to connect to server";
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingested {
    pub record: ResultRecord,
    /// Present when the attempt counts as failed.
    pub error: Option<String>,
}

pub fn normalize(input: &CheckInput, outcome: Outcome) -> Ingested {
    match outcome {
        Outcome::Completed { status, reason, body } => from_response(input, status, &reason, &body),
        Outcome::Failed { message } => from_failure(input, &message),
    }
}

fn from_response(input: &CheckInput, status: u16, reason: &str, body: &CheckResponse) -> Ingested {
    let ok = is_success(status);
    let detail = body.provider_detail_pretty();
    let mut raw_text = body.raw_text().unwrap_or_default();

    // Payload-level error: warning block
    if body.has_error() {
        let msg = body.error().or_else(|| body.internal_error()).unwrap_or_default();
        raw_text.push_str("\n\n⚠️ ");
        raw_text.push_str(&msg);
        if let Some(d) = &detail {
            raw_text.push_str("\n\nError Details: ");
            raw_text.push_str(d);
        }
    }

    // HTTP-level error: failure block, appended even after a warning block
    if !ok {
        let msg = body
            .message()
            .or_else(|| body.error())
            .unwrap_or_else(|| format!("HTTP {status}: {reason}"));
        if raw_text.is_empty() {
            raw_text.push_str(NO_RESPONSE);
        }
        raw_text.push_str("\n\n❌ ");
        raw_text.push_str(&msg);
        if let Some(d) = &detail {
            raw_text.push_str("\n\nProvider Error: ");
            raw_text.push_str(d);
        }
    }

    let record = ResultRecord::new(
        body.prompt().unwrap_or_else(|| input.prompt.clone()),
        body.brand().unwrap_or_else(|| input.brand.clone()),
        body.mentioned().unwrap_or_else(|| s!(DEFAULT_MENTIONED)),
        body.position().unwrap_or_default(),
        raw_text,
    );

    let error = (!ok || body.has_error()).then(|| {
        body.message()
            .or_else(|| body.error())
            .unwrap_or_else(|| s!(REQUEST_FAILED_HINT))
    });

    match &error {
        None => info!(
            status,
            mentioned = record.mentioned(),
            position = record.position(),
            "Check: OK brand={}", record.brand()
        ),
        Some(e) => warn!(status, "Check: Failed brand={}: {}", record.brand(), e),
    }

    Ingested { record, error }
}

fn from_failure(input: &CheckInput, message: &str) -> Ingested {
    warn!("Check: Transport failure brand={}: {}", input.brand, message);

    let (detail, surfaced) = if message.is_empty() {
        (CONNECT_FAILED, NETWORK_ERROR)
    } else {
        (message, message)
    };

    Ingested {
        record: ResultRecord::new(
            input.prompt.clone(),
            input.brand.clone(),
            DEFAULT_MENTIONED,
            s!(),
            format!("Network Error: {detail}"),
        ),
        error: Some(format!("Request failed: {surfaced}")),
    }
}
