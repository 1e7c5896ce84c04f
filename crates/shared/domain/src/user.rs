//! Candidate user value and registration outcome types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::constants::MINIMUM_CREDIT_LIMIT;

/// A user built during one registration attempt.
///
/// Immutable once built; the credit limit is attached by
/// [`CandidateUser::with_credit_limit`], which consumes the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub has_credit_limit: bool,
    /// Unset for very important clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<u64>,
}

impl CandidateUser {
    /// Create a candidate with no credit limit assigned yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        client: Client,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            date_of_birth,
            client,
            has_credit_limit: false,
            credit_limit: None,
        }
    }

    /// Attach the credit-limit decision, returning the updated candidate
    pub fn with_credit_limit(self, has_credit_limit: bool, credit_limit: Option<u64>) -> Self {
        Self {
            has_credit_limit,
            credit_limit,
            ..self
        }
    }

    /// A limit only matters when the flag is set; it must then exceed the minimum.
    pub fn meets_minimum_credit_limit(&self) -> bool {
        !self.has_credit_limit || self.credit_limit.unwrap_or(0) > MINIMUM_CREDIT_LIMIT
    }
}

/// Why a registration attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// First or last name missing
    MissingName,
    /// Email lacks an `@` or a `.`
    InvalidEmail,
    /// Below the minimum registration age
    Underage { age: i32 },
    /// Credit limit applies and does not exceed the minimum
    CreditLimitBelowMinimum { limit: u64 },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::MissingName => write!(f, "first and last name are required"),
            RejectionReason::InvalidEmail => write!(f, "email address is malformed"),
            RejectionReason::Underage { age } => write!(f, "user is {} years old", age),
            RejectionReason::CreditLimitBelowMinimum { limit } => write!(
                f,
                "credit limit {} does not exceed {}",
                limit, MINIMUM_CREDIT_LIMIT
            ),
        }
    }
}

/// Result of evaluating a registration without persisting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationDecision {
    Accepted(CandidateUser),
    Rejected(RejectionReason),
}

impl RegistrationDecision {
    /// Check if the registration was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, RegistrationDecision::Accepted(_))
    }
}
