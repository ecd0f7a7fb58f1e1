//! Privilege bits, role colors and labels

// Privilege bit constants
pub const POST: u8 = 1;
pub const VOTE: u8 = 1 << 1;
pub const COMMENT: u8 = 1 << 2;
pub const REPORT: u8 = 1 << 3;
pub const INSTANT_PUBLISH: u8 = 1 << 4;

/// Every privilege bit set
pub const ALL_PRIVILEGES: u8 = POST | VOTE | COMMENT | REPORT | INSTANT_PUBLISH;

/// Reputation at or above which a plain `user` may post
pub const POST_REPUTATION_THRESHOLD: f64 = 1.0;

// Role colors (hex tokens consumed by the UI)
pub const USER_COLOR: &str = "#6366f1";
pub const VERIFIED_COLOR: &str = "#10b981";
pub const BUSINESS_COLOR: &str = "#f59e0b";
pub const MODERATOR_COLOR: &str = "#8b5cf6";
pub const ADMIN_COLOR: &str = "#ef4444";
pub const SUPERADMIN_COLOR: &str = "#dc2626";
pub const FALLBACK_COLOR: &str = "#1e293b";

pub const FALLBACK_LABEL: &str = "Guest";

// Privilege name mappings
const PRIVILEGES: &[(&str, u8)] = &[
    ("post", POST),
    ("vote", VOTE),
    ("comment", COMMENT),
    ("report", REPORT),
    ("instant_publish", INSTANT_PUBLISH),
];

/// Convert a privilege mask to a list of privilege names
pub fn mask_to_names(mask: u8) -> Vec<&'static str> {
    PRIVILEGES
        .iter()
        .filter(|(_, b)| mask & b == *b)
        .map(|(n, _)| *n)
        .collect()
}

/// Convert a list of privilege names to a mask. Unknown names are ignored.
pub fn names_to_mask(names: &[&str]) -> u8 {
    names
        .iter()
        .filter_map(|n| PRIVILEGES.iter().find(|(k, _)| k == n).map(|(_, v)| v))
        .fold(0, |a, b| a | b)
}
