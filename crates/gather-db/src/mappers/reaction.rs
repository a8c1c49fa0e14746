//! Reaction model to entity mapping
//!
//! Reaction rows are keyed by exactly one of user_id and session_id. A row
//! violating that invariant (both null) indicates schema corruption and maps
//! to an internal error rather than a panic.

use gather_core::{ContentRef, DomainError, Identity, Reaction, ReactionKind};

use crate::models::ReactionModel;

pub fn reaction_from_model(
    target: ContentRef,
    model: ReactionModel,
) -> Result<Reaction, DomainError> {
    let identity = identity_from_columns(model.user_id, model.session_id)?;
    let kind: ReactionKind = model
        .kind
        .parse()
        .map_err(|_| DomainError::InternalError(format!("bad reaction kind in db: {}", model.kind)))?;

    Ok(Reaction {
        target,
        identity,
        kind,
        created_at: model.created_at,
    })
}

pub(crate) fn identity_from_columns(
    user_id: Option<i64>,
    session_id: Option<uuid::Uuid>,
) -> Result<Identity, DomainError> {
    match (user_id, session_id) {
        (Some(id), _) => Ok(Identity::User(id)),
        (None, Some(id)) => Ok(Identity::Guest(id)),
        (None, None) => Err(DomainError::InternalError(
            "row has neither user_id nor session_id".to_string(),
        )),
    }
}
