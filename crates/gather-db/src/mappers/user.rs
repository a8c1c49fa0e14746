//! User model to entity mapping

use gather_core::{User, UserStatus};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            status: UserStatus::from_db(&model.status),
            created_at: model.created_at,
        }
    }
}
