//! Column allowlists per entity kind.
//!
//! [`EDITABLE_COLUMNS`] decides which keys of an update payload reach the
//! database; anything else is dropped. [`SEARCHABLE_COLUMNS`] lists the
//! columns free-text search may match against. Both tables are the policy
//! source of truth and change only with a schema change.

use std::collections::BTreeSet;

use crate::entity::EntityKind;

/// Field name to value map supplied by an update request. Sorted, so
/// filtering is deterministic.
pub type UpdatePayload = serde_json::Map<String, serde_json::Value>;

pub const EDITABLE_COLUMNS: &[(EntityKind, &[&str])] = &[
    (
        EntityKind::Users,
        &[
            "username", "display_name", "avatar_url", "bio", "role", "reputation", "banned",
            "ban_reason",
        ],
    ),
    (
        EntityKind::Deals,
        &[
            "title", "description", "price", "original_price", "status", "category_id", "store_id",
            "tags", "images", "city", "state", "country", "is_online", "start_date", "expiry_date",
        ],
    ),
    (EntityKind::Comments, &["content", "status", "is_deleted"]),
    (
        EntityKind::Stores,
        &["name", "slug", "logo_url", "verified", "website_url", "description"],
    ),
    (EntityKind::Categories, &["name", "emoji", "active", "slug"]),
    (
        EntityKind::Banners,
        &["title", "image_url", "link_url", "active", "starts_at", "ends_at", "priority"],
    ),
];

pub const SEARCHABLE_COLUMNS: &[(EntityKind, &[&str])] = &[
    (EntityKind::Users, &["username", "display_name", "email"]),
    (EntityKind::Deals, &["title", "description", "city", "state"]),
    (EntityKind::Comments, &["content"]),
    (EntityKind::Stores, &["name", "slug"]),
    (EntityKind::Categories, &["name", "slug"]),
    (EntityKind::Banners, &["title", "link_url"]),
];

type ColumnTable = &'static [(EntityKind, &'static [&'static str])];

fn lookup(table: ColumnTable, entity: EntityKind) -> &'static [&'static str] {
    table
        .iter()
        .find(|(k, _)| *k == entity)
        .map(|(_, cols)| *cols)
        .unwrap_or(&[])
}

/// Editable columns for `entity`, in table order.
pub fn editable_columns(entity: EntityKind) -> &'static [&'static str] {
    lookup(EDITABLE_COLUMNS, entity)
}

pub fn is_editable(entity: EntityKind, column: &str) -> bool {
    editable_columns(entity).iter().any(|c| *c == column)
}

pub fn is_searchable(entity: EntityKind, column: &str) -> bool {
    lookup(SEARCHABLE_COLUMNS, entity).iter().any(|c| *c == column)
}

/// Columns eligible for free-text search. Empty if the entity has no entry.
pub fn searchable_columns_for(entity: EntityKind) -> BTreeSet<&'static str> {
    lookup(SEARCHABLE_COLUMNS, entity).iter().copied().collect()
}

/// Copy of `payload` holding only allowlisted keys. Never fails: a payload
/// with no allowed keys yields an empty map.
pub fn filter_editable_fields(entity: EntityKind, payload: &UpdatePayload) -> UpdatePayload {
    payload
        .iter()
        .filter(|(k, _)| is_editable(entity, k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// In-place variant of [`filter_editable_fields`]. Returns the removed keys,
/// sorted.
pub fn retain_editable_fields(entity: EntityKind, payload: &mut UpdatePayload) -> Vec<String> {
    let mut dropped: Vec<String> = payload
        .keys()
        .filter(|k| !is_editable(entity, k))
        .cloned()
        .collect();
    dropped.sort();
    for k in &dropped {
        payload.remove(k);
    }
    dropped
}
