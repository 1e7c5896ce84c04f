//! JSON seed backing the in-process client directory and credit bureau.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use common::{AppError, AppResult};
use domain::{Client, ClientId, ClientTier, DomainResult};

/// Seed compiled into the binary, used when no seed file is configured.
pub const DEFAULT_SEED: &str = include_str!("../../data/seed.json");

/// A client as stored; the tier is kept raw and parsed on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub tier: String,
}

impl ClientRecord {
    /// Convert into a domain client, failing on an unrecognised tier
    pub fn to_client(&self) -> DomainResult<Client> {
        let tier = ClientTier::try_from(self.tier.as_str())?;
        Ok(Client::new(
            self.id,
            self.name.clone(),
            self.email.clone(),
            self.address.clone(),
            tier,
        ))
    }
}

/// Contents of a seed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub clients: Vec<ClientRecord>,
    /// Surname -> bureau credit limit
    #[serde(default)]
    pub credit_limits: BTreeMap<String, u64>,
}

impl SeedData {
    /// Parse a seed document
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::config(format!("invalid seed: {}", e)))
    }

    /// Load the seed at `path`, or the built-in one when no path is given
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => {
                debug!("Loading seed from {}", path.display());
                let json = fs::read_to_string(path).map_err(|e| {
                    AppError::config(format!("cannot read seed {}: {}", path.display(), e))
                })?;
                Self::from_json(&json)
            }
            None => Self::from_json(DEFAULT_SEED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_parses() {
        let seed = SeedData::load(None).unwrap();
        assert_eq!(seed.clients.len(), 6);
        assert_eq!(seed.credit_limits.get("Kowalski"), Some(&200));
        for record in &seed.clients {
            assert!(record.to_client().is_ok(), "{} has a bad tier", record.name);
        }
    }

    #[test]
    fn test_record_with_unknown_tier_fails_conversion() {
        let record = ClientRecord {
            id: ClientId(9),
            name: "Nowak".to_string(),
            email: "nowak@wp.pl".to_string(),
            address: "Kraków".to_string(),
            tier: "Platinum".to_string(),
        };
        assert!(record.to_client().is_err());
    }

    #[test]
    fn test_missing_seed_file_is_config_error() {
        let err = SeedData::load(Some(Path::new("/nonexistent/seed.json"))).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_sections_default_to_empty() {
        let seed = SeedData::from_json("{}").unwrap();
        assert!(seed.clients.is_empty());
        assert!(seed.credit_limits.is_empty());
    }
}
