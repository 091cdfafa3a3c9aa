//! # Gate Configuration
//!
//! Invocation configuration, validated once at the top level before the
//! pipeline starts. Components receive these values explicitly; nothing in
//! the core reads process globals.

use std::time::Duration;

use crate::constants::env_vars;
use crate::error::{GateError, Result};

/// Validated configuration for one gate invocation
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Credential for the GitHub API, opaque to the core
    pub token: String,
    /// Delay between completion re-checks
    pub poll_interval: Duration,
    /// Explicit branch filter; `None` means no filter
    pub branch: Option<String>,
    /// Base URL of the GitHub REST API
    pub api_base_url: String,
}

impl GateConfig {
    /// Build a configuration from raw invocation inputs.
    ///
    /// The interval arrives as a string (action inputs are untyped) and must
    /// parse to a non-negative number of seconds. An empty branch input
    /// means "no branch filter".
    pub fn new(token: impl Into<String>, interval: &str, branch: Option<String>) -> Result<Self> {
        let seconds: u64 = interval
            .trim()
            .parse()
            .map_err(|e| GateError::Configuration(format!("Invalid interval {interval:?}: {e}")))?;

        Ok(Self {
            token: token.into(),
            poll_interval: Duration::from_secs(seconds),
            branch: branch.filter(|b| !b.is_empty()),
            api_base_url: std::env::var(env_vars::GITHUB_API_URL)
                .unwrap_or_else(|_| crate::constants::DEFAULT_API_BASE_URL.to_string()),
        })
    }

    /// Poll interval in whole seconds, for log messages
    pub fn poll_interval_secs(&self) -> u64 {
        self.poll_interval.as_secs()
    }
}

/// Snapshot of the process environment consumed by the context resolver.
///
/// Captured once by the caller so the resolver itself stays pure and
/// testable without manipulating process globals.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Value of `MQ_BRANCH_NAME`, when set by the calling job
    pub mq_branch_name: Option<String>,
}

impl Environment {
    /// Capture the relevant variables from the current process environment
    pub fn from_process() -> Self {
        Self {
            mq_branch_name: std::env::var(env_vars::MQ_BRANCH_NAME).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_must_parse_non_negative() {
        let config = GateConfig::new("t0ken", "30", None).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(30));

        let config = GateConfig::new("t0ken", "0", None).unwrap();
        assert_eq!(config.poll_interval, Duration::ZERO);

        assert!(GateConfig::new("t0ken", "abc", None).is_err());
        assert!(GateConfig::new("t0ken", "-5", None).is_err());
        assert!(GateConfig::new("t0ken", "1.5", None).is_err());
    }

    #[test]
    fn test_empty_branch_input_means_no_filter() {
        let config = GateConfig::new("t0ken", "10", Some(String::new())).unwrap();
        assert_eq!(config.branch, None);

        let config = GateConfig::new("t0ken", "10", Some("main".to_string())).unwrap();
        assert_eq!(config.branch.as_deref(), Some("main"));
    }
}
