// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # pulsecheck Agent
//!
//! The moving parts of the pulsecheck process:
//!
//! - [`Config`] - environment-sourced settings, loaded once at startup
//! - [`Reporter`] - fans each result and summary out to both sinks and the
//!   console, isolating sink failures from each other and from the caller
//! - [`Scheduler`] - drives the probe/report cycle under one of two run
//!   policies: a continuous fixed-interval timer, or a bounded number of
//!   runs with a fixed pause between them
//! - [`Consumer`] - drains the queue one message at a time, concurrently
//!   with the scheduler, sharing nothing with it but the broker
//!
//! The scheduler owns the run counter and reloads the endpoint registry
//! from disk at the start of every cycle, so registry edits take effect on
//! the next run without a restart.

pub mod config;
pub mod consumer;
pub mod error;
pub mod reporter;
pub mod scheduler;

pub use config::Config;
pub use consumer::{Consumer, MalformedPolicy};
pub use error::AgentError;
pub use reporter::{now_stamp, Reporter, RESULT_COLLECTION, SUMMARY_COLLECTION};
pub use scheduler::{RunPolicy, Scheduler, SummaryStyle};
