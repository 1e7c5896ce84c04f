//! Clients for external services.

mod credit_client;

pub use credit_client::{CreditScorer, StaticCreditBureau};

#[cfg(any(test, feature = "test-utils"))]
pub use credit_client::MockCreditScorer;
