//! Event model to entity mapping

use gather_core::Event;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            event_date: model.event_date,
            location: model.location,
            author_id: model.author_id,
            max_participants: model.max_participants,
            views: model.views,
            like_count: model.like_count,
            dislike_count: model.dislike_count,
            created_at: model.created_at,
        }
    }
}
