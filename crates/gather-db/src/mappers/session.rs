//! Session model to entity mapping

use gather_core::Session;

use crate::models::SessionModel;

impl From<SessionModel> for Session {
    fn from(model: SessionModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            is_valid: model.is_valid,
            created_at: model.created_at,
        }
    }
}
