// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # pulsecheck Probe
//!
//! HTTP probing for the pulsecheck agent.
//!
//! A [`Probe`] issues one GET request against a single endpoint with a
//! per-request timeout and converts whatever happens into a
//! [`pulsecheck_core::ProbeResult`]: a status code with a measured
//! duration, or a classified failure message. Probing never returns an
//! error and never panics — every failure mode lands in the result.
//!
//! ## Example
//!
//! ```ignore
//! use pulsecheck_probe::{HttpClient, Probe};
//! use std::time::Duration;
//!
//! let client = HttpClient::new()?;
//! let probe = Probe::new("github", "https://api.github.com")
//!     .with_timeout(Duration::from_secs(10));
//! let result = probe.check(&client).await;
//! println!("{:?}", result.category());
//! ```

pub mod client;
pub mod error;
pub mod probe;

pub use client::HttpClient;
pub use error::ProbeError;
pub use probe::Probe;
