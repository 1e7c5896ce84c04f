//! Credit bureau client.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use common::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Trait for the credit bureau lookups needed by registration.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CreditScorer: Send + Sync {
    /// Credit limit the bureau grants a person
    fn get_credit_limit(&self, last_name: &str, date_of_birth: NaiveDate) -> AppResult<u64>;
}

/// Table-backed stand-in for the bureau, keyed by surname.
///
/// A surname without an entry is treated as a bureau failure.
#[derive(Debug, Clone, Default)]
pub struct StaticCreditBureau {
    limits: BTreeMap<String, u64>,
}

impl StaticCreditBureau {
    pub fn new(limits: BTreeMap<String, u64>) -> Self {
        Self { limits }
    }
}

impl CreditScorer for StaticCreditBureau {
    fn get_credit_limit(&self, last_name: &str, date_of_birth: NaiveDate) -> AppResult<u64> {
        debug!("Querying credit bureau for {} born {}", last_name, date_of_birth);
        self.limits.get(last_name).copied().ok_or_else(|| {
            AppError::service_unavailable(format!("no credit record for {}", last_name))
        })
    }
}
