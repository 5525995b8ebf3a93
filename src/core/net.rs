// src/core/net.rs

// JSON POST to the check endpoint (blocking; callers pick the thread)

use std::sync::Arc;

use reqwest::{blocking::Client, header::CONTENT_TYPE};
use tracing::{debug, warn};

use crate::check::{CheckInput, Outcome};

/// Sends one check. Never fails outright: transport problems come back as
/// `Outcome::Failed` so every attempt still yields a record.
pub trait Transport: Send + Sync {
    fn send(&self, endpoint: &str, input: &CheckInput) -> Outcome;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, endpoint: &str, input: &CheckInput) -> Outcome {
        (**self).send(endpoint, input)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, endpoint: &str, input: &CheckInput) -> Outcome {
        (**self).send(endpoint, input)
    }
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("mention_check/", env!("CARGO_PKG_VERSION")))
            .timeout(None) // no request timeout; a hung server just stays pending
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, endpoint: &str, input: &CheckInput) -> Outcome {
        let resp = match self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(input)
            .send()
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Net: POST {} failed: {}", endpoint, e);
                return Outcome::failed(e.to_string());
            }
        };

        let status = resp.status();
        let reason = status.canonical_reason().unwrap_or("");
        debug!("Net: POST {} → {}", endpoint, status);

        // Body is read for every status; error responses carry JSON too
        match resp.text() {
            Ok(body) => Outcome::from_body(status.as_u16(), reason, &body),
            Err(e) => {
                warn!("Net: Reading body from {} failed: {}", endpoint, e);
                Outcome::failed(e.to_string())
            }
        }
    }
}
