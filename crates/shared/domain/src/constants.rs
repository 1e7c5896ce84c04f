//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Client Tiers
// =============================================================================

/// Serialized name of the very important tier
pub const TIER_VERY_IMPORTANT: &str = "VeryImportant";

/// Serialized name of the important tier
pub const TIER_IMPORTANT: &str = "Important";

/// Serialized name of the normal tier
pub const TIER_NORMAL: &str = "Normal";

/// Suffix carried by the legacy tier spellings (e.g. `NormalClient`)
pub const LEGACY_TIER_SUFFIX: &str = "Client";

// =============================================================================
// Validation
// =============================================================================

/// Minimum age (in whole years) a user must have reached to register
pub const MINIMUM_AGE: i32 = 21;

/// Characters an email address must contain to be accepted
pub const EMAIL_REQUIRED_CHARS: &[char] = &['@', '.'];

// =============================================================================
// Credit Limits
// =============================================================================

/// A credit limit must be strictly greater than this to be accepted
pub const MINIMUM_CREDIT_LIMIT: u64 = 500;

/// Important clients get the bureau limit multiplied by this factor
pub const IMPORTANT_CLIENT_LIMIT_MULTIPLIER: u64 = 2;
