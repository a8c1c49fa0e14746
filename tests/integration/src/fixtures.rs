//! Test fixtures - a wired service context over the in-memory fakes

use std::sync::Arc;

use gather_common::auth::PasswordService;
use gather_core::entities::NewEvent;
use gather_core::{Event, Session, User};
use gather_service::dto::{LoginRequest, RegisterRequest};
use gather_service::{AuthService, ServiceContext, ServiceContextBuilder};

use crate::fakes::{
    InMemoryCommentRepository, InMemoryEventRepository, InMemoryReactionRepository,
    InMemoryRsvpRepository, InMemorySessionRepository, InMemoryStore, InMemoryUserRepository,
    InMemoryViewRepository,
};

/// Default password used by test users
pub const TEST_PASSWORD: &str = "correct horse battery";

/// A fully wired test application
pub struct TestApp {
    pub ctx: ServiceContext,
    pub store: Arc<InMemoryStore>,
}

/// Build a service context backed by the in-memory fakes
pub fn test_app() -> TestApp {
    let store = InMemoryStore::new();

    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(InMemoryUserRepository::new(store.clone())))
        .session_repo(Arc::new(InMemorySessionRepository::new(store.clone())))
        .event_repo(Arc::new(InMemoryEventRepository::new(store.clone())))
        .comment_repo(Arc::new(InMemoryCommentRepository::new(store.clone())))
        .reaction_repo(Arc::new(InMemoryReactionRepository::new(store.clone())))
        .rsvp_repo(Arc::new(InMemoryRsvpRepository::new(store.clone())))
        .view_repo(Arc::new(InMemoryViewRepository::new(store.clone())))
        .password_service(Arc::new(PasswordService::new()))
        .build()
        .expect("all dependencies provided");

    TestApp { ctx, store }
}

/// Register a user with [`TEST_PASSWORD`]
pub async fn register_user(ctx: &ServiceContext, email: &str) -> User {
    AuthService::new(ctx)
        .register(RegisterRequest {
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
        })
        .await
        .expect("registration succeeds")
}

/// Log a user in, returning the new user session
pub async fn login_user(ctx: &ServiceContext, email: &str) -> (User, Session) {
    AuthService::new(ctx)
        .login(
            LoginRequest {
                email: email.to_string(),
                password: TEST_PASSWORD.to_string(),
            },
            None,
        )
        .await
        .expect("login succeeds")
}

/// Seed an event directly through the repository
pub async fn seed_event(ctx: &ServiceContext, author_id: i64, max: Option<i32>) -> Event {
    ctx.event_repo()
        .create(&NewEvent {
            name: "Rustconf Meetup".to_string(),
            description: "Talks and pizza".to_string(),
            event_date: chrono::Utc::now() + chrono::Duration::days(14),
            location: "Community Hall".to_string(),
            author_id,
            max_participants: max,
        })
        .await
        .expect("event seeded")
}
