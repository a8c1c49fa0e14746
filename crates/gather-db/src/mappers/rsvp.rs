//! RSVP model to entity mapping

use gather_core::{DomainError, EmailAddress, Rsvp, RsvpActor};

use crate::models::RsvpModel;

pub fn rsvp_from_model(model: RsvpModel) -> Result<Rsvp, DomainError> {
    let actor = match (model.user_id, model.email) {
        (Some(user_id), _) => RsvpActor::User(user_id),
        (None, Some(email)) => {
            // Emails are normalized before insert, but parse again so a
            // hand-edited row cannot smuggle an invalid address into the domain.
            let email = EmailAddress::parse(&email)
                .map_err(|e| DomainError::InternalError(format!("bad email in rsvp row: {e}")))?;
            RsvpActor::GuestEmail(email)
        }
        (None, None) => {
            return Err(DomainError::InternalError(
                "rsvp row has neither user_id nor email".to_string(),
            ))
        }
    };

    Ok(Rsvp {
        id: model.id,
        event_id: model.event_id,
        actor,
        created_at: model.created_at,
    })
}
