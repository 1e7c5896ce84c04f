//! Registration service - decides whether a new user may join a client.
//!
//! The workflow is a linear pipeline: input gates, client lookup, credit
//! limit assignment by tier, threshold check, then persistence. A failed
//! gate is a normal rejection (`Ok(false)`); collaborator failures are
//! returned as errors and nothing is persisted.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::validation::validate_registration;
use domain::{
    CandidateUser, ClientId, ClientTier, RegistrationDecision, RejectionReason,
    IMPORTANT_CLIENT_LIMIT_MULTIPLIER,
};

use crate::client::CreditScorer;
use crate::repository::{ClientRepository, UserRepository};

/// Raw registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client_id: ClientId,
}

/// How the credit-limit flag is set for important clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportantTierPolicy {
    /// The doubled limit is recorded but the flag stays unset, so the
    /// threshold check never applies to important clients.
    #[default]
    Legacy,
    /// The flag is set, so the doubled limit must exceed the minimum.
    Enforced,
}

impl FromStr for ImportantTierPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(ImportantTierPolicy::Legacy),
            "enforced" => Ok(ImportantTierPolicy::Enforced),
            other => Err(AppError::config(format!(
                "unknown important tier policy: {}",
                other
            ))),
        }
    }
}

/// Registration service trait for dependency injection.
pub trait RegistrationService: Send + Sync {
    /// Register a user, returning whether the registration was accepted
    fn register(&self, request: &RegisterUser) -> AppResult<bool>;

    /// Run every check without persisting anything
    fn evaluate(&self, request: &RegisterUser) -> AppResult<RegistrationDecision>;
}

/// Concrete implementation of RegistrationService over injected collaborators.
pub struct RegistrationManager {
    clients: Arc<dyn ClientRepository>,
    credit: Arc<dyn CreditScorer>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
    important_tier_policy: ImportantTierPolicy,
}

impl RegistrationManager {
    /// Create new registration service with the legacy important-tier policy
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        credit: Arc<dyn CreditScorer>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            clients,
            credit,
            users,
            clock,
            important_tier_policy: ImportantTierPolicy::default(),
        }
    }

    /// Override the important-tier policy
    pub fn with_important_tier_policy(mut self, policy: ImportantTierPolicy) -> Self {
        self.important_tier_policy = policy;
        self
    }

    fn assign_credit_limit(&self, candidate: CandidateUser) -> AppResult<CandidateUser> {
        match candidate.client.tier {
            ClientTier::VeryImportant => Ok(candidate.with_credit_limit(false, None)),
            ClientTier::Important => {
                let base = self
                    .credit
                    .get_credit_limit(&candidate.last_name, candidate.date_of_birth)?;
                let limit = base.saturating_mul(IMPORTANT_CLIENT_LIMIT_MULTIPLIER);
                let has_credit_limit = match self.important_tier_policy {
                    ImportantTierPolicy::Legacy => candidate.has_credit_limit,
                    ImportantTierPolicy::Enforced => true,
                };
                Ok(candidate.with_credit_limit(has_credit_limit, Some(limit)))
            }
            ClientTier::Normal => {
                let limit = self
                    .credit
                    .get_credit_limit(&candidate.last_name, candidate.date_of_birth)?;
                Ok(candidate.with_credit_limit(true, Some(limit)))
            }
        }
    }
}

impl RegistrationService for RegistrationManager {
    fn register(&self, request: &RegisterUser) -> AppResult<bool> {
        match self.evaluate(request)? {
            RegistrationDecision::Accepted(user) => {
                info!(
                    client_id = %user.client.id,
                    has_credit_limit = user.has_credit_limit,
                    "Registration accepted"
                );
                self.users.add(user)?;
                Ok(true)
            }
            RegistrationDecision::Rejected(reason) => {
                debug!(client_id = %request.client_id, %reason, "Registration rejected");
                Ok(false)
            }
        }
    }

    fn evaluate(&self, request: &RegisterUser) -> AppResult<RegistrationDecision> {
        let today = self.clock.local().date_naive();
        if let Err(reason) = validate_registration(
            &request.first_name,
            &request.last_name,
            &request.email,
            request.date_of_birth,
            today,
        ) {
            return Ok(RegistrationDecision::Rejected(reason));
        }

        let client = self.clients.get_by_id(request.client_id)?;
        let candidate = CandidateUser::new(
            request.first_name.clone(),
            request.last_name.clone(),
            request.email.clone(),
            request.date_of_birth,
            client,
        );
        let candidate = self.assign_credit_limit(candidate)?;

        if !candidate.meets_minimum_credit_limit() {
            return Ok(RegistrationDecision::Rejected(
                RejectionReason::CreditLimitBelowMinimum {
                    limit: candidate.credit_limit.unwrap_or(0),
                },
            ));
        }

        Ok(RegistrationDecision::Accepted(candidate))
    }
}
