//! Role and reputation to capability resolution

use serde::{Deserialize, Serialize};

use crate::constants::{
    mask_to_names, COMMENT, INSTANT_PUBLISH, POST, POST_REPUTATION_THRESHOLD, REPORT, VOTE,
};
use crate::role::Role;

/// The five capabilities derived from a role and reputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegeSet {
    pub can_post: bool,
    pub can_vote: bool,
    pub can_comment: bool,
    pub can_report: bool,
    pub instant_publish: bool,
}

impl PrivilegeSet {
    /// Nothing allowed. What guests and unknown roles get.
    pub const NONE: PrivilegeSet = PrivilegeSet {
        can_post: false,
        can_vote: false,
        can_comment: false,
        can_report: false,
        instant_publish: false,
    };

    pub fn to_mask(&self) -> u8 {
        let mut m = 0;
        if self.can_post { m |= POST; }
        if self.can_vote { m |= VOTE; }
        if self.can_comment { m |= COMMENT; }
        if self.can_report { m |= REPORT; }
        if self.instant_publish { m |= INSTANT_PUBLISH; }
        m
    }

    /// Bits outside the five known privileges are ignored.
    pub fn from_mask(mask: u8) -> Self {
        Self {
            can_post: mask & POST != 0,
            can_vote: mask & VOTE != 0,
            can_comment: mask & COMMENT != 0,
            can_report: mask & REPORT != 0,
            instant_publish: mask & INSTANT_PUBLISH != 0,
        }
    }

    /// True iff every privilege in `required` is granted.
    pub fn allows(&self, required: u8) -> bool {
        (self.to_mask() & required) == required
    }

    pub fn names(&self) -> Vec<&'static str> {
        mask_to_names(self.to_mask())
    }
}

/// Resolve privileges for a known role.
///
/// Guests get nothing. Every other role may vote, comment and report.
/// Posting needs either a trusted role or a `user` at or above the
/// reputation threshold; instant publishing needs a trusted role.
pub fn privileges_for(role: Role, reputation: f64) -> PrivilegeSet {
    if role == Role::Guest {
        return PrivilegeSet::NONE;
    }
    let trusted = role.is_trusted();
    PrivilegeSet {
        can_post: trusted || (role == Role::User && reputation >= POST_REPUTATION_THRESHOLD),
        can_vote: true,
        can_comment: true,
        can_report: true,
        instant_publish: trusted,
    }
}

/// Resolve privileges for an untrusted role string. Unknown roles resolve
/// as guests.
pub fn privileges_for_raw(raw: &str, reputation: f64) -> PrivilegeSet {
    match Role::parse(raw) {
        Some(role) => privileges_for(role, reputation),
        None => {
            tracing::debug!(role = raw, "unknown role resolved as guest");
            PrivilegeSet::NONE
        }
    }
}
