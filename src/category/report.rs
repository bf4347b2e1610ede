// Copyright 2025 Cowboy AI, LLC.

//! Verification reports
//!
//! Axiom violations are data, not failures: every check appends a
//! descriptive message and carries on.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Outcome of verifying a category, functor or natural transformation
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VerificationReport {
    /// Name of the structure that was checked
    pub subject: String,
    /// True when no violation was recorded
    pub valid: bool,
    /// One message per violation, in discovery order
    pub errors: Vec<String>,
    /// When the check ran
    pub checked_at: DateTime<Utc>,
}

impl VerificationReport {
    /// Start an empty, valid report
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            valid: true,
            errors: Vec::new(),
            checked_at: Utc::now(),
        }
    }

    /// Record a violation
    pub fn record(&mut self, error: impl Into<String>) {
        let error = error.into();
        warn!(subject = %self.subject, "{}", error);
        self.errors.push(error);
        self.valid = false;
    }

    /// Fold another report's violations into this one
    pub fn merge(mut self, other: VerificationReport) -> Self {
        self.valid &= other.valid;
        self.errors.extend(other.errors);
        self
    }

    pub(crate) fn finish(self, check: &str) -> Self {
        info!(
            subject = %self.subject,
            check,
            valid = self.valid,
            violations = self.errors.len(),
            "verification finished"
        );
        self
    }
}
