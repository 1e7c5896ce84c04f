//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! clients and their tiers, the candidate user built during registration,
//! and the input predicates the registration workflow applies.

pub mod client;
pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use client::{Client, ClientId, ClientTier};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{CandidateUser, RegistrationDecision, RejectionReason};
