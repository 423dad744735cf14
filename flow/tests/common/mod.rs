//! Shared fixtures for the integration suite.

#![allow(dead_code)]

use verdict_types::{Fault, Verdict};

/// Fault used when a test step should reject the chain.
pub fn rejection() -> Fault {
    Fault::not_found("order")
}

/// Verdict already resolved to a failure, for seeding chains.
pub fn failed<T>(what: &str) -> Verdict<T> {
    Verdict::of_failure(Fault::not_found(what))
}
