//! Verification results: recorded calls that matched a pattern, with count assertions.

use serde::Serialize;

use crate::domain::call::CallRecord;
use crate::domain::error::VerificationFailure;

/// Snapshot produced by one `verify` query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedCalls {
    verified_calls: Vec<CallRecord>,
    all_calls: Vec<CallRecord>,
}

impl VerifiedCalls {
    pub fn new(verified_calls: Vec<CallRecord>, all_calls: Vec<CallRecord>) -> Self {
        Self {
            verified_calls,
            all_calls,
        }
    }

    /// Number of matched calls.
    pub fn verified(&self) -> usize {
        self.verified_calls.len()
    }

    pub fn matched(&self) -> &[CallRecord] {
        &self.verified_calls
    }

    pub fn all_calls(&self) -> &[CallRecord] {
        &self.all_calls
    }

    /// Exactly `amount` matched calls.
    pub fn times(&self, amount: usize) -> Result<(), VerificationFailure> {
        if self.verified() == amount {
            return Ok(());
        }
        Err(self.failure(
            amount.to_string(),
            format!("Expected {amount} calls, got {}.", self.verified()),
        ))
    }

    pub fn never(&self) -> Result<(), VerificationFailure> {
        self.times(0)
    }

    /// Strictly more than `lower_bound` matched calls.
    pub fn more_than(&self, lower_bound: usize) -> Result<(), VerificationFailure> {
        if self.verified() > lower_bound {
            return Ok(());
        }
        Err(self.failure(
            format!("more than {lower_bound}"),
            format!("Expected more than {lower_bound} calls, got {}.", self.verified()),
        ))
    }

    fn failure(&self, expected: String, headline: String) -> VerificationFailure {
        VerificationFailure {
            expected,
            actual: self.verified(),
            message: self.build_error_msg(&headline),
        }
    }

    fn build_error_msg(&self, headline: &str) -> String {
        let list = |calls: &[CallRecord]| {
            calls
                .iter()
                .map(|c| format!("\n\t{c}"))
                .collect::<String>()
        };
        format!(
            "{headline}\nMatched Calls:{}\nAll Calls:{}",
            list(&self.verified_calls),
            list(&self.all_calls)
        )
    }
}
