//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Default log filter when neither the service nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load from `<PREFIX>_LOG_LEVEL`, falling back to `LOG_LEVEL`.
    pub fn from_env(service_name: &str, prefix: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: env::var(format!("{}_LOG_LEVEL", prefix))
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
