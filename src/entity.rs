//! Editable entity kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DealgateError, Result};

/// Record types an admin may update through the field allowlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Users,
    Deals,
    Comments,
    Stores,
    Categories,
    Banners,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Users,
        EntityKind::Deals,
        EntityKind::Comments,
        EntityKind::Stores,
        EntityKind::Categories,
        EntityKind::Banners,
    ];

    /// Table name, as used in request paths.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Deals => "deals",
            EntityKind::Comments => "comments",
            EntityKind::Stores => "stores",
            EntityKind::Categories => "categories",
            EntityKind::Banners => "banners",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DealgateError;

    fn from_str(s: &str) -> Result<Self> {
        validate_entity_kind(s)
    }
}

/// Validate an untrusted entity kind string.
///
/// Matching is exact: no trimming, no case folding, no prefix matching.
pub fn validate_entity_kind(candidate: &str) -> Result<EntityKind> {
    EntityKind::ALL
        .iter()
        .copied()
        .find(|k| k.as_str() == candidate)
        .ok_or_else(|| {
            tracing::warn!(entity = candidate, "rejected entity kind");
            DealgateError::InvalidEntityKind(candidate.to_string())
        })
}
