//! HTTP transport shared by the checker and fetcher.
//!
//! The embedder constructs one [`Transport`] and passes it by reference into
//! both operations. The value owns the underlying agent (connection pool,
//! user-agent, redirect handling) for its lifetime; dropping it tears the
//! transport down. There is no process-global network state.

use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("uplift/", env!("CARGO_PKG_VERSION"));

/// Owns the configured HTTP agent used for all requests.
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    /// Transport with the default user-agent, automatic redirect following,
    /// and no timeouts.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a customized transport.
    pub fn builder() -> TransportBuilder {
        TransportBuilder::default()
    }

    pub(crate) fn agent(&self) -> &ureq::Agent {
        &self.agent
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Transport`].
///
/// Timeouts default to none: both operations block until the transfer
/// completes, fails, or the progress callback aborts it.
#[derive(Debug, Default)]
pub struct TransportBuilder {
    user_agent: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl TransportBuilder {
    /// Overrides the user-agent sent on outgoing requests.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Limits how long connection establishment may take.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Limits how long a single body read may take.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Builds the transport.
    pub fn build(self) -> Transport {
        let mut builder = ureq::AgentBuilder::new().user_agent(
            self.user_agent
                .as_deref()
                .unwrap_or(DEFAULT_USER_AGENT),
        );
        if let Some(timeout) = self.connect_timeout {
            builder = builder.timeout_connect(timeout);
        }
        if let Some(timeout) = self.read_timeout {
            builder = builder.timeout_read(timeout);
        }

        Transport {
            agent: builder.build(),
        }
    }
}
