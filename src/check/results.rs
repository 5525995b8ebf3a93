// src/check/results.rs
//! ResultLog: newest-first, in-memory list of normalized check results.
//!
//! - Records are immutable once created, except for the UI-only `expanded` flag.
//! - Every completed attempt (success, HTTP error, transport failure) inserts
//!   exactly one record at the front.
//! - Lives for the lifetime of the process; nothing is persisted except
//!   through an explicit export.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::LogError;
use super::ingest::{self, Ingested};
use super::types::{CheckInput, Outcome};

/// One row of the results table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRecord {
    prompt: String,
    brand: String,
    mentioned: String,
    position: String,
    raw_text: String,
    expanded: bool,
}

impl ResultRecord {
    pub fn new(
        prompt: impl Into<String>,
        brand: impl Into<String>,
        mentioned: impl Into<String>,
        position: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            brand: brand.into(),
            mentioned: mentioned.into(),
            position: position.into(),
            raw_text: raw_text.into(),
            expanded: false,
        }
    }

    pub fn prompt(&self) -> &str { &self.prompt }
    pub fn brand(&self) -> &str { &self.brand }
    pub fn mentioned(&self) -> &str { &self.mentioned }
    pub fn position(&self) -> &str { &self.position }
    pub fn raw_text(&self) -> &str { &self.raw_text }
    pub fn expanded(&self) -> bool { self.expanded }
}

#[derive(Clone, Debug, Default)]
pub struct ResultLog {
    records: VecDeque<ResultRecord>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResultRecord> {
        self.records.get(index)
    }

    /// Newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ResultRecord> {
        self.records.iter()
    }

    pub fn insert(&mut self, record: ResultRecord) {
        self.records.push_front(record);
        debug!(len = self.records.len(), "ResultLog: inserted");
    }

    /// Normalize an outcome, insert the record, and return the message to
    /// surface (if the attempt counts as failed).
    pub fn ingest(&mut self, input: &CheckInput, outcome: Outcome) -> Option<String> {
        let Ingested { record, error } = ingest::normalize(input, outcome);
        self.insert(record);
        error
    }

    /// Flip the display state of one record. Returns the new state.
    pub fn toggle_expanded(&mut self, index: usize) -> Result<bool, LogError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(LogError::IndexOutOfRange { index, len })?;
        record.expanded = !record.expanded;
        Ok(record.expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_newest_first() {
        let mut log = ResultLog::new();
        log.insert(ResultRecord::new("p1", "b", "No", "", ""));
        log.insert(ResultRecord::new("p2", "b", "No", "", ""));
        let prompts: Vec<&str> = log.iter().map(|r| r.prompt()).collect();
        assert_eq!(prompts, vec!["p2", "p1"]);
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut log = ResultLog::new();
        log.insert(ResultRecord::new("a", "b", "No", "", ""));
        log.insert(ResultRecord::new("c", "d", "No", "", ""));

        assert_eq!(log.toggle_expanded(1), Ok(true));
        assert!(log.get(1).unwrap().expanded());
        assert!(!log.get(0).unwrap().expanded());

        assert_eq!(log.toggle_expanded(1), Ok(false));
        assert!(!log.get(1).unwrap().expanded());
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut log = ResultLog::new();
        log.insert(ResultRecord::new("a", "b", "No", "", ""));
        let before = log.get(0).cloned();

        assert_eq!(
            log.toggle_expanded(3),
            Err(LogError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(log.get(0).cloned(), before);
    }
}
