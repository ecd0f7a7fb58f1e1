//! User roles, ordered by privilege.
//!
//! Role strings arrive from sessions and admin tooling in two spellings of
//! the top tier (`superadmin` and `super_admin`). [`Role::parse`] accepts the
//! canonical names plus the entries of [`ROLE_ALIASES`] and nothing else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ADMIN_COLOR, BUSINESS_COLOR, FALLBACK_COLOR, FALLBACK_LABEL, MODERATOR_COLOR,
    SUPERADMIN_COLOR, USER_COLOR, VERIFIED_COLOR,
};
use crate::error::DealgateError;

/// Trust tier assigned to a user account.
///
/// Deserialization goes through [`Role::parse`], so serde input accepts the
/// same spellings as `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    Guest,
    User,
    Verified,
    Business,
    Moderator,
    Admin,
    Superadmin,
}

/// Alternate spellings accepted on input, mapped to their canonical role.
pub const ROLE_ALIASES: &[(&str, Role)] = &[("super_admin", Role::Superadmin)];

impl Role {
    /// All roles, lowest privilege first.
    pub const ALL: [Role; 7] = [
        Role::Guest,
        Role::User,
        Role::Verified,
        Role::Business,
        Role::Moderator,
        Role::Admin,
        Role::Superadmin,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::User => "user",
            Role::Verified => "verified",
            Role::Business => "business",
            Role::Moderator => "moderator",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Parse a canonical name or alias. Surrounding ASCII whitespace is
    /// ignored; case and any other whitespace are not.
    pub fn parse(s: &str) -> Option<Role> {
        let s = s.trim_matches(|c: char| c.is_ascii_whitespace());
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .or_else(|| ROLE_ALIASES.iter().find(|(a, _)| *a == s).map(|(_, r)| *r))
    }

    /// Hex color token for badges.
    pub fn color(self) -> &'static str {
        match self {
            Role::User => USER_COLOR,
            Role::Verified => VERIFIED_COLOR,
            Role::Business => BUSINESS_COLOR,
            Role::Moderator => MODERATOR_COLOR,
            Role::Admin => ADMIN_COLOR,
            Role::Superadmin => SUPERADMIN_COLOR,
            Role::Guest => FALLBACK_COLOR,
        }
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Verified => "Verified",
            Role::Business => "Business",
            Role::Moderator => "Moderator",
            Role::Admin => "Admin",
            Role::Superadmin => "Super Admin",
            Role::Guest => FALLBACK_LABEL,
        }
    }

    /// Trusted tiers: posts skip the review queue and need no reputation.
    pub fn is_trusted(self) -> bool {
        self >= Role::Verified
    }

    /// Moderation staff (moderator and above).
    pub fn is_staff(self) -> bool {
        self >= Role::Moderator
    }

    /// May open the admin panel.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DealgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| DealgateError::UnknownRole(s.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = DealgateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Color for a raw role string. Unknown input gets the fallback color.
pub fn color_for_raw(raw: &str) -> &'static str {
    Role::parse(raw).map_or(FALLBACK_COLOR, Role::color)
}

/// Label for a raw role string. Unknown input gets `"Guest"`.
pub fn display_name_for_raw(raw: &str) -> &'static str {
    Role::parse(raw).map_or(FALLBACK_LABEL, Role::display_name)
}

/// Color for an optional role, as read from a possibly missing profile field.
pub fn color_for(role: Option<Role>) -> &'static str {
    role.map_or(FALLBACK_COLOR, Role::color)
}

/// Label for an optional role.
pub fn display_name_for(role: Option<Role>) -> &'static str {
    role.map_or(FALLBACK_LABEL, Role::display_name)
}
