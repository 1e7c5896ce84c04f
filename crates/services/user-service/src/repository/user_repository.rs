//! User store: persists accepted registrations.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::CandidateUser;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User persistence trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Persist an accepted user
    fn add(&self, user: CandidateUser) -> AppResult<()>;
}

/// A user as kept by [`InMemoryUserStore`].
#[derive(Debug, Clone, Serialize)]
pub struct StoredUser {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub user: CandidateUser,
}

/// Append-only in-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<StoredUser>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, in insertion order
    pub fn list(&self) -> AppResult<Vec<StoredUser>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Vec<StoredUser>>> {
        self.users
            .lock()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }
}

impl UserRepository for InMemoryUserStore {
    fn add(&self, user: CandidateUser) -> AppResult<()> {
        let stored = StoredUser {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            user,
        };
        debug!("Storing user {} for client {}", stored.id, stored.user.client.id);
        self.lock()?.push(stored);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::{Client, ClientId, ClientTier};

    fn candidate(last_name: &str) -> CandidateUser {
        let client = Client::new(ClientId(1), "Kowalski", "kowalski@wp.pl", "Warszawa", ClientTier::Normal);
        CandidateUser::new(
            "Jan",
            last_name,
            "jan@example.com",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            client,
        )
        .with_credit_limit(true, Some(1000))
    }

    #[test]
    fn test_add_appends_in_order() {
        let store = InMemoryUserStore::new();
        store.add(candidate("Kowalski")).unwrap();
        store.add(candidate("Nowak")).unwrap();

        let users = store.list().unwrap();
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(users[0].user.last_name, "Kowalski");
        assert_eq!(users[1].user.last_name, "Nowak");
        assert_ne!(users[0].id, users[1].id);
    }

    #[test]
    fn test_stored_user_serializes_flat() {
        let store = InMemoryUserStore::new();
        store.add(candidate("Kowalski")).unwrap();

        let json = serde_json::to_value(&store.list().unwrap()[0]).unwrap();
        assert_eq!(json["last_name"], "Kowalski");
        assert_eq!(json["credit_limit"], 1000);
        assert!(json["id"].is_string());
    }
}
