// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # pulsecheck Sinks
//!
//! Delivery-sink adapters for the pulsecheck agent.
//!
//! Two external systems durably record what the agent observes:
//!
//! - **Queue** ([`QueueSink`], [`QueueConsumer`]): one durable AMQP queue
//!   (`api_logs`). The publisher sends persistent messages to the default
//!   exchange; the consumer declares the same queue idempotently, limits
//!   itself to one unacknowledged message, and acknowledges by delivery
//!   tag.
//! - **Search index** ([`IndexSink`]): schemaless JSON documents in two
//!   collections, one per probe and one per completed cycle, plus the
//!   recent-documents query the `logs` command is built on.
//!
//! Both sinks are best-effort and mutually independent: the reporter
//! isolates their failures so a total outage of one never prevents
//! delivery to the other.

pub mod error;
pub mod index;
pub mod queue;

pub use error::ConnectError;
pub use index::IndexSink;
pub use queue::{amqp_uri, QueueConsumer, QueueSink, QUEUE_NAME};
