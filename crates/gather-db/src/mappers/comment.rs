//! Comment model to entity mapping

use gather_core::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            author_name: model.author_name,
            content: model.content,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            created_at: model.created_at,
        }
    }
}
