//! Dealgate - role privileges and admin field allowlists
//!
//! Two stateless pieces: a resolver from role and reputation to what a user
//! may do, and an authorizer that validates entity kinds and strips update
//! payloads down to their editable columns. Neither does I/O.

pub mod columns;
pub mod constants;
pub mod entity;
pub mod error;
pub mod privilege;
pub mod role;
pub mod update;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use columns::{
    editable_columns, filter_editable_fields, is_editable, is_searchable, retain_editable_fields,
    searchable_columns_for, UpdatePayload, EDITABLE_COLUMNS, SEARCHABLE_COLUMNS,
};
pub use constants::*;
pub use entity::{validate_entity_kind, EntityKind};
pub use error::{DealgateError, Result};
pub use privilege::{privileges_for, privileges_for_raw, PrivilegeSet};
pub use role::{
    color_for, color_for_raw, display_name_for, display_name_for_raw, Role, ROLE_ALIASES,
};
pub use update::{authorize_update, authorize_update_for, AuthorizedUpdate};
