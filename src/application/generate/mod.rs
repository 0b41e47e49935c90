//! Generate Use Case
//!
//! Runs the entity pipeline for every entity of a batch and flattens the
//! per-entity bundles into one ordered result.
//!
//! This module handles:
//! - The optional batch-wide name collision check
//! - Concurrent fan-out across entities (order-preserving)
//! - All-or-nothing failure: one failing entity fails the batch

mod options;
mod result;
mod use_case;

pub use options::BatchOptions;
pub use result::BatchResult;
pub use use_case::BatchOrchestrator;
