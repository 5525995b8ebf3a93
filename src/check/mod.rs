// src/check/mod.rs
//
// Result ingestion: validate → send → normalize → insert.

pub mod checker;
pub mod ingest;
pub mod results;
pub mod types;

pub use checker::{validate, Checker};
pub use results::{ResultLog, ResultRecord};
pub use types::{CheckInput, CheckResponse, Outcome};
