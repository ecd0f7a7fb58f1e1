//! Admin update authorization: validate the entity kind, then strip the
//! payload down to its editable columns.

use serde::Serialize;

use crate::columns::{retain_editable_fields, UpdatePayload};
use crate::entity::{validate_entity_kind, EntityKind};
use crate::error::Result;

/// What an update handler may persist, plus what it asked for and lost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorizedUpdate {
    pub entity: EntityKind,
    pub fields: UpdatePayload,
    /// Rejected keys, sorted.
    pub dropped: Vec<String>,
}

impl AuthorizedUpdate {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Authorize an update against an untrusted entity kind string.
pub fn authorize_update(raw_kind: &str, payload: UpdatePayload) -> Result<AuthorizedUpdate> {
    let entity = validate_entity_kind(raw_kind)?;
    Ok(authorize_update_for(entity, payload))
}

/// Authorize an update for an already validated entity kind.
pub fn authorize_update_for(entity: EntityKind, mut payload: UpdatePayload) -> AuthorizedUpdate {
    let dropped = retain_editable_fields(entity, &mut payload);
    if !dropped.is_empty() {
        tracing::debug!(%entity, ?dropped, "dropped non-editable fields");
    }
    AuthorizedUpdate { entity, fields: payload, dropped }
}
