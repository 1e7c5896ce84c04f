//! Client domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::{LEGACY_TIER_SUFFIX, TIER_IMPORTANT, TIER_NORMAL, TIER_VERY_IMPORTANT};
use crate::error::DomainError;

/// Client identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        ClientId(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Commercial classification of a client, controlling credit-limit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClientTier {
    VeryImportant,
    Important,
    Normal,
}

impl ClientTier {
    /// Canonical name of this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientTier::VeryImportant => TIER_VERY_IMPORTANT,
            ClientTier::Important => TIER_IMPORTANT,
            ClientTier::Normal => TIER_NORMAL,
        }
    }
}

impl TryFrom<&str> for ClientTier {
    type Error = DomainError;

    /// Accepts the canonical names and the legacy `*Client` spellings.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let name = s.strip_suffix(LEGACY_TIER_SUFFIX).unwrap_or(s);
        match name {
            TIER_VERY_IMPORTANT => Ok(ClientTier::VeryImportant),
            TIER_IMPORTANT => Ok(ClientTier::Important),
            TIER_NORMAL => Ok(ClientTier::Normal),
            _ => Err(DomainError::unknown_tier(s)),
        }
    }
}

impl TryFrom<String> for ClientTier {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ClientTier::try_from(s.as_str())
    }
}

impl std::str::FromStr for ClientTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientTier::try_from(s)
    }
}

impl From<ClientTier> for String {
    fn from(tier: ClientTier) -> Self {
        tier.as_str().to_string()
    }
}

impl std::fmt::Display for ClientTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client domain entity.
///
/// Read-only from the registration workflow's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub tier: ClientTier,
}

impl Client {
    /// Create a new client
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        tier: ClientTier,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: address.into(),
            tier,
        }
    }

    /// Check if the client belongs to the very important tier
    pub fn is_very_important(&self) -> bool {
        matches!(self.tier, ClientTier::VeryImportant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parses_canonical_names() {
        assert_eq!(ClientTier::try_from("VeryImportant"), Ok(ClientTier::VeryImportant));
        assert_eq!(ClientTier::try_from("Important"), Ok(ClientTier::Important));
        assert_eq!(ClientTier::try_from("Normal"), Ok(ClientTier::Normal));
    }

    #[test]
    fn test_tier_parses_legacy_names() {
        assert_eq!(
            "VeryImportantClient".parse::<ClientTier>(),
            Ok(ClientTier::VeryImportant)
        );
        assert_eq!("ImportantClient".parse::<ClientTier>(), Ok(ClientTier::Important));
        assert_eq!("NormalClient".parse::<ClientTier>(), Ok(ClientTier::Normal));
    }

    #[test]
    fn test_tier_rejects_unknown_names() {
        for raw in ["Premium", "normal", "Client", ""] {
            assert_eq!(
                ClientTier::try_from(raw),
                Err(DomainError::unknown_tier(raw)),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_tier_serializes_canonical_name() {
        let json = serde_json::to_string(&ClientTier::VeryImportant).unwrap();
        assert_eq!(json, "\"VeryImportant\"");

        let tier: ClientTier = serde_json::from_str("\"ImportantClient\"").unwrap();
        assert_eq!(tier, ClientTier::Important);

        assert!(serde_json::from_str::<ClientTier>("\"Gold\"").is_err());
    }
}
