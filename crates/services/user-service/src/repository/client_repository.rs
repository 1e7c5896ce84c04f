//! Client directory: resolves client identifiers to client records.

use std::collections::BTreeMap;

use common::{AppError, AppResult, OptionExt};
use domain::{Client, ClientId};

use super::seed::ClientRecord;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client lookup trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ClientRepository: Send + Sync {
    /// Find client by ID.
    ///
    /// Fails with `NotFound` if absent and `UnknownTier` if the stored record is malformed.
    fn get_by_id(&self, id: ClientId) -> AppResult<Client>;

    /// List all clients in identifier order
    fn list(&self) -> AppResult<Vec<Client>>;
}

/// In-memory client directory built from seed records.
#[derive(Debug, Default)]
pub struct InMemoryClientDirectory {
    records: BTreeMap<ClientId, ClientRecord>,
}

impl InMemoryClientDirectory {
    /// Create a directory from records; a later record replaces an earlier one with the same id
    pub fn new(records: impl IntoIterator<Item = ClientRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id, r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ClientRepository for InMemoryClientDirectory {
    fn get_by_id(&self, id: ClientId) -> AppResult<Client> {
        let record = self
            .records
            .get(&id)
            .ok_or_not_found(format!("Client {}", id))?;

        Ok(record.to_client()?)
    }

    fn list(&self) -> AppResult<Vec<Client>> {
        self.records
            .values()
            .map(|r| r.to_client().map_err(AppError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ClientTier;

    fn record(id: i32, name: &str, tier: &str) -> ClientRecord {
        ClientRecord {
            id: ClientId(id),
            name: name.to_string(),
            email: format!("{}@wp.pl", name.to_lowercase()),
            address: "Warszawa".to_string(),
            tier: tier.to_string(),
        }
    }

    #[test]
    fn test_get_by_id_success() {
        let directory = InMemoryClientDirectory::new(vec![
            record(1, "Kowalski", "Normal"),
            record(2, "Malewski", "VeryImportantClient"),
        ]);

        let client = directory.get_by_id(ClientId(2)).unwrap();
        assert_eq!(client.name, "Malewski");
        assert_eq!(client.tier, ClientTier::VeryImportant);
    }

    #[test]
    fn test_get_by_id_not_found() {
        let directory = InMemoryClientDirectory::new(vec![record(1, "Kowalski", "Normal")]);

        let err = directory.get_by_id(ClientId(42)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref what) if what == "Client 42"));
    }

    #[test]
    fn test_get_by_id_unknown_tier() {
        let directory = InMemoryClientDirectory::new(vec![record(3, "Nowak", "Gold")]);

        let err = directory.get_by_id(ClientId(3)).unwrap_err();
        assert!(matches!(err, AppError::UnknownTier(ref tier) if tier == "Gold"));
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let directory = InMemoryClientDirectory::new(vec![
            record(5, "Kwiatkowski", "Normal"),
            record(1, "Kowalski", "Normal"),
        ]);

        let ids: Vec<_> = directory.list().unwrap().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(directory.len(), 2);
    }
}
