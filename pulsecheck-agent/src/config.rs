//! Environment-sourced configuration.
//!
//! Loaded once at startup; a missing required value is a startup failure,
//! never a runtime-recoverable one. The variable names follow the original
//! deployment (`ES_HOST`, `ES_USER`, ...), extended with the separate
//! consumer credentials the queue isolation calls for.

use std::time::Duration;

use envconfig::Envconfig;

use crate::consumer::MalformedPolicy;

/// Agent configuration.
#[derive(Debug, Envconfig)]
pub struct Config {
    /// Search-index host URL, e.g. `https://es.internal:9200`.
    #[envconfig(from = "ES_HOST")]
    pub es_host: String,

    /// Search-index username.
    #[envconfig(from = "ES_USER")]
    pub es_user: String,

    /// Search-index password.
    #[envconfig(from = "ES_PASSWORD")]
    pub es_password: String,

    /// Queue broker host, optionally with a port.
    #[envconfig(from = "RABBITMQ_HOST", default = "localhost")]
    pub rabbitmq_host: String,

    /// Publisher-side broker username.
    #[envconfig(from = "RABBITMQ_USER", default = "guest")]
    pub rabbitmq_user: String,

    /// Publisher-side broker password.
    #[envconfig(from = "RABBITMQ_PASSWORD", default = "guest")]
    pub rabbitmq_password: String,

    /// Consumer-side broker username. Falls back to the publisher's.
    #[envconfig(from = "RABBITMQ_CONSUMER_USER")]
    pub rabbitmq_consumer_user: Option<String>,

    /// Consumer-side broker password. Falls back to the publisher's.
    #[envconfig(from = "RABBITMQ_CONSUMER_PASSWORD")]
    pub rabbitmq_consumer_password: Option<String>,

    /// Path to the endpoint registry file, reread every cycle.
    #[envconfig(from = "APIS_PATH", default = "apis.json")]
    pub apis_path: String,

    /// Per-probe request timeout in seconds.
    #[envconfig(from = "PROBE_TIMEOUT_SECS", default = "10")]
    pub probe_timeout_secs: u64,

    /// Interval between cycles in continuous mode, in seconds.
    #[envconfig(from = "CHECK_INTERVAL_SECS", default = "30")]
    pub check_interval_secs: u64,

    /// Number of cycles in bounded mode.
    #[envconfig(from = "MAX_RUNS", default = "2")]
    pub max_runs: u32,

    /// Pause between cycles in bounded mode, in seconds.
    #[envconfig(from = "RUN_PAUSE_SECS", default = "5")]
    pub run_pause_secs: u64,

    /// Simulated per-message processing delay in the consumer, in seconds.
    #[envconfig(from = "CONSUMER_DELAY_SECS", default = "2")]
    pub consumer_delay_secs: u64,

    /// What the consumer does with a payload it cannot deserialize.
    #[envconfig(from = "ON_MALFORMED", default = "drop")]
    pub on_malformed: MalformedPolicy,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is absent or unparseable.
    pub fn load() -> Result<Self, envconfig::Error> {
        Self::init_from_env()
    }

    /// AMQP URI for the publishing connection.
    pub fn publisher_amqp_uri(&self) -> String {
        pulsecheck_sinks::amqp_uri(&self.rabbitmq_host, &self.rabbitmq_user, &self.rabbitmq_password)
    }

    /// AMQP URI for the consuming connection.
    ///
    /// The consumer gets its own connection and, when configured, its own
    /// credentials; producer and consumer never share either.
    pub fn consumer_amqp_uri(&self) -> String {
        let username = self
            .rabbitmq_consumer_user
            .as_deref()
            .unwrap_or(&self.rabbitmq_user);
        let password = self
            .rabbitmq_consumer_password
            .as_deref()
            .unwrap_or(&self.rabbitmq_password);
        pulsecheck_sinks::amqp_uri(&self.rabbitmq_host, username, password)
    }

    /// Per-probe timeout.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Continuous-mode cycle interval.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    /// Bounded-mode inter-cycle pause.
    pub fn run_pause(&self) -> Duration {
        Duration::from_secs(self.run_pause_secs)
    }

    /// Consumer per-message delay.
    pub fn consumer_delay(&self) -> Duration {
        Duration::from_secs(self.consumer_delay_secs)
    }
}
