//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::ServiceConfig;
use tracing::warn;

use crate::service::ImportantTierPolicy;

/// Service name used for logging
pub const SERVICE_NAME: &str = "user-service";

/// Prefix of every service-specific environment variable
pub const ENV_PREFIX: &str = "USER_SERVICE";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Shared settings (name, log level)
    pub service: ServiceConfig,
    /// Seed file for the client directory and credit bureau; built-in seed if unset
    pub seed_file: Option<PathBuf>,
    /// Credit-limit flag handling for important clients
    pub important_tier_policy: ImportantTierPolicy,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env(SERVICE_NAME, ENV_PREFIX),
            seed_file: env::var("USER_SERVICE_SEED_FILE").ok().map(PathBuf::from),
            important_tier_policy: env::var("USER_SERVICE_IMPORTANT_TIER_POLICY")
                .ok()
                .map(|raw| parse_policy(&raw))
                .unwrap_or_default(),
        }
    }
}

fn parse_policy(raw: &str) -> ImportantTierPolicy {
    raw.parse().unwrap_or_else(|e| {
        warn!("{}, falling back to legacy", e);
        ImportantTierPolicy::default()
    })
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            seed_file: None,
            important_tier_policy: ImportantTierPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserServiceConfig::default();
        assert_eq!(config.service.service_name, SERVICE_NAME);
        assert_eq!(config.service.log_level, "info");
        assert!(config.seed_file.is_none());
        assert_eq!(config.important_tier_policy, ImportantTierPolicy::Legacy);
    }

    #[test]
    fn test_parse_policy_falls_back_to_legacy() {
        assert_eq!(parse_policy("enforced"), ImportantTierPolicy::Enforced);
        assert_eq!(parse_policy("LEGACY"), ImportantTierPolicy::Legacy);
        assert_eq!(parse_policy("sometimes"), ImportantTierPolicy::Legacy);
    }
}
