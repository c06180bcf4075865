// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # pulsecheck Core
//!
//! Core types, models, and traits for the pulsecheck agent.
//!
//! This crate provides the foundational abstractions used across all other
//! pulsecheck crates, including:
//!
//! - Domain models (probe results, classification, run summaries)
//! - The endpoint registry loaded from `apis.json`
//! - Error types
//! - Trait definitions for the delivery sinks
//!
//! ## Key Types
//!
//! ### Probe Types
//! - [`ProbeResult`] - Outcome of one health-check request
//! - [`Category`] - Classification of a probe outcome
//! - [`CategoryTally`] - Per-cycle counts by category
//!
//! ### Run Types
//! - [`RunSummary`] - One document per completed cycle
//! - [`SummaryBreakdown`] - Per-category counts or a plain endpoint total
//! - [`EndpointRegistry`] - Named endpoints to probe, reloaded each cycle
//!
//! ### Sink Seams
//! - [`QueuePublisher`] - Durable message-queue publish
//! - [`DocumentStore`] - Search-index write and liveness check

pub mod error;
pub mod models;
pub mod registry;
pub mod traits;

// Re-export error types
pub use error::{CoreError, SinkError};

// Re-export all model types
pub use models::{Category, CategoryTally, ProbeResult, RunSummary, SummaryBreakdown};

// Re-export the registry
pub use registry::EndpointRegistry;

// Re-export traits
pub use traits::{DocumentStore, QueuePublisher};
