//! Default values for configuration types.

use crate::config::types::HttpConfig;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

impl HttpConfig {
    /// Returns the request timeout, defaulting to 10 seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Returns the connect timeout, defaulting to 5 seconds.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Returns the User-Agent header value, defaulting to `hbsync/<version>`.
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("hbsync/{}", env!("CARGO_PKG_VERSION")))
    }
}
