//! User Service Library
//!
//! This crate registers new users against a client directory, assigning a
//! credit limit according to the client's tier. The collaborators (client
//! directory, credit bureau, user store) sit behind traits so they can be
//! swapped; in-process implementations backed by a JSON seed are included.

pub mod client;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use common::AppResult;

use crate::client::StaticCreditBureau;
use crate::config::UserServiceConfig;
use crate::repository::{InMemoryClientDirectory, InMemoryUserStore, SeedData};
use crate::service::RegistrationManager;

/// In-process collaborators wired to a registration service.
pub struct Services {
    pub clients: Arc<InMemoryClientDirectory>,
    pub credit: Arc<StaticCreditBureau>,
    pub users: Arc<InMemoryUserStore>,
    pub registration: RegistrationManager,
}

/// Build the registration service over the configured seed.
pub fn build_services(
    config: &UserServiceConfig,
    clock: Arc<dyn Clock + Send + Sync>,
) -> AppResult<Services> {
    let seed = SeedData::load(config.seed_file.as_deref())?;
    info!(
        clients = seed.clients.len(),
        credit_records = seed.credit_limits.len(),
        "Seed loaded"
    );

    let clients = Arc::new(InMemoryClientDirectory::new(seed.clients));
    let credit = Arc::new(StaticCreditBureau::new(seed.credit_limits));
    let users = Arc::new(InMemoryUserStore::new());

    let registration = RegistrationManager::new(
        clients.clone(),
        credit.clone(),
        users.clone(),
        clock,
    )
    .with_important_tier_policy(config.important_tier_policy);

    Ok(Services {
        clients,
        credit,
        users,
        registration,
    })
}
