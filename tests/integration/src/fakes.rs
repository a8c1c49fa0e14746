//! In-memory repository fakes
//!
//! All fakes share one [`InMemoryStore`] behind a single mutex, so every
//! repository method is atomic exactly like its transactional PostgreSQL
//! counterpart: the whole read-modify-write sequence happens under one lock.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use gather_core::entities::{Comment, Event, NewComment, NewEvent, NewUser, Reaction, Rsvp, Session, User, UserStatus};
use gather_core::traits::{
    CommentRepository, EventRepository, ReactionOutcome, ReactionRepository, RepoResult,
    RsvpRepository, SessionRepository, UserRepository, ViewRepository,
};
use gather_core::{ContentRef, DomainError, Identity, ReactionKind, RsvpActor};

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct StoreInner {
    users: HashMap<i64, StoredUser>,
    sessions: HashMap<Uuid, Session>,
    events: HashMap<i64, Event>,
    comments: HashMap<i64, Comment>,
    event_reactions: HashMap<(i64, Identity), ReactionKind>,
    comment_reactions: HashMap<(i64, Identity), ReactionKind>,
    rsvps: Vec<Rsvp>,
    views: HashSet<(i64, Identity)>,
    next_id: i64,
}

impl StoreInner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory backing store for all fake repositories
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap()
    }

    /// Flip a user's status, for exercising inactive-account paths
    pub fn set_user_status(&self, user_id: i64, status: UserStatus) {
        let mut inner = self.lock();
        if let Some(stored) = inner.users.get_mut(&user_id) {
            stored.user.status = status;
        }
    }

    /// Direct event lookup for assertions
    pub fn event(&self, event_id: i64) -> Option<Event> {
        self.lock().events.get(&event_id).cloned()
    }

    /// Direct comment lookup for assertions
    pub fn comment(&self, comment_id: i64) -> Option<Comment> {
        self.lock().comments.get(&comment_id).cloned()
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Clone)]
pub struct InMemorySessionRepository {
    store: Arc<InMemoryStore>,
}

impl InMemorySessionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find(&self, id: Uuid) -> RepoResult<Option<Session>> {
        Ok(self.store.lock().sessions.get(&id).cloned())
    }

    async fn find_valid(&self, id: Uuid) -> RepoResult<Option<Session>> {
        Ok(self
            .store
            .lock()
            .sessions
            .get(&id)
            .filter(|s| s.is_valid)
            .cloned())
    }

    async fn create_guest(&self) -> RepoResult<Session> {
        let session = Session::guest(Uuid::new_v4());
        self.store
            .lock()
            .sessions
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn start_user_session(
        &self,
        user_id: i64,
        supersedes: Option<Uuid>,
    ) -> RepoResult<Session> {
        let mut inner = self.store.lock();

        if let Some(old_id) = supersedes {
            if let Some(old) = inner.sessions.get_mut(&old_id) {
                old.is_valid = false;
            }
        }

        let session = Session::for_user(Uuid::new_v4(), user_id);
        inner.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn invalidate(&self, id: Uuid) -> RepoResult<()> {
        let mut inner = self.store.lock();
        let Some(session) = inner.sessions.get_mut(&id) else {
            return Err(DomainError::SessionNotFound(id));
        };
        if !session.is_valid {
            return Err(DomainError::SessionAlreadyInvalid);
        }
        session.is_valid = false;
        Ok(())
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Clone)]
pub struct InMemoryUserRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.store.lock().users.get(&id).map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .store
            .lock()
            .users
            .values()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .lock()
            .users
            .values()
            .any(|s| s.user.email == email))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut inner = self.store.lock();
        if inner.users.values().any(|s| s.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let id = inner.next_id();
        let created = User {
            id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            status: UserStatus::Active,
            created_at: Utc::now(),
        };
        inner.users.insert(
            id,
            StoredUser {
                user: created.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(created)
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        Ok(self
            .store
            .lock()
            .users
            .get(&id)
            .map(|s| s.password_hash.clone()))
    }
}

// ============================================================================
// Events
// ============================================================================

#[derive(Clone)]
pub struct InMemoryEventRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryEventRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        Ok(self.store.lock().events.get(&id).cloned())
    }

    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let mut inner = self.store.lock();
        let id = inner.next_id();
        let created = Event {
            id,
            name: event.name.clone(),
            description: event.description.clone(),
            event_date: event.event_date,
            location: event.location.clone(),
            author_id: event.author_id,
            max_participants: event.max_participants,
            views: 0,
            like_count: 0,
            dislike_count: 0,
            created_at: Utc::now(),
        };
        inner.events.insert(id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// Comments
// ============================================================================

#[derive(Clone)]
pub struct InMemoryCommentRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        Ok(self.store.lock().comments.get(&id).cloned())
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut inner = self.store.lock();
        if !inner.events.contains_key(&comment.event_id) {
            return Err(DomainError::EventNotFound(comment.event_id));
        }

        let id = inner.next_id();
        let created = Comment {
            id,
            event_id: comment.event_id,
            author_name: comment.author_name.clone(),
            content: comment.content.clone(),
            like_count: 0,
            dislike_count: 0,
            created_at: Utc::now(),
        };
        inner.comments.insert(id, created.clone());
        Ok(created)
    }
}

// ============================================================================
// Reactions
// ============================================================================

#[derive(Clone)]
pub struct InMemoryReactionRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryReactionRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

fn adjust_counters(target: ContentRef, inner: &mut StoreInner, like_delta: i32, dislike_delta: i32) {
    match target {
        ContentRef::Event(id) => {
            if let Some(event) = inner.events.get_mut(&id) {
                event.like_count += like_delta;
                event.dislike_count += dislike_delta;
            }
        }
        ContentRef::Comment(id) => {
            if let Some(comment) = inner.comments.get_mut(&id) {
                comment.like_count += like_delta;
                comment.dislike_count += dislike_delta;
            }
        }
    }
}

#[async_trait]
impl ReactionRepository for InMemoryReactionRepository {
    async fn find(&self, target: ContentRef, identity: Identity) -> RepoResult<Option<Reaction>> {
        let inner = self.store.lock();
        let map = match target {
            ContentRef::Event(_) => &inner.event_reactions,
            ContentRef::Comment(_) => &inner.comment_reactions,
        };
        Ok(map
            .get(&(target.id(), identity))
            .map(|kind| Reaction::new(target, identity, *kind)))
    }

    async fn apply(
        &self,
        target: ContentRef,
        identity: Identity,
        kind: ReactionKind,
    ) -> RepoResult<ReactionOutcome> {
        let mut inner = self.store.lock();

        let exists = match target {
            ContentRef::Event(id) => inner.events.contains_key(&id),
            ContentRef::Comment(id) => inner.comments.contains_key(&id),
        };
        if !exists {
            return Err(DomainError::ContentNotFound(target));
        }

        let key = (target.id(), identity);
        let existing = match target {
            ContentRef::Event(_) => inner.event_reactions.get(&key).copied(),
            ContentRef::Comment(_) => inner.comment_reactions.get(&key).copied(),
        };

        let outcome = match existing {
            None => {
                match target {
                    ContentRef::Event(_) => inner.event_reactions.insert(key, kind),
                    ContentRef::Comment(_) => inner.comment_reactions.insert(key, kind),
                };
                match kind {
                    ReactionKind::Like => adjust_counters(target, &mut inner, 1, 0),
                    ReactionKind::Dislike => adjust_counters(target, &mut inner, 0, 1),
                }
                ReactionOutcome::Added
            }
            Some(current) if current == kind => ReactionOutcome::Unchanged,
            Some(_) => {
                match target {
                    ContentRef::Event(_) => inner.event_reactions.insert(key, kind),
                    ContentRef::Comment(_) => inner.comment_reactions.insert(key, kind),
                };
                match kind {
                    ReactionKind::Like => adjust_counters(target, &mut inner, 1, -1),
                    ReactionKind::Dislike => adjust_counters(target, &mut inner, -1, 1),
                }
                ReactionOutcome::Switched
            }
        };

        Ok(outcome)
    }
}

// ============================================================================
// RSVPs
// ============================================================================

#[derive(Clone)]
pub struct InMemoryRsvpRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryRsvpRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RsvpRepository for InMemoryRsvpRepository {
    async fn register(&self, event_id: i64, actor: &RsvpActor) -> RepoResult<Rsvp> {
        let mut inner = self.store.lock();

        let Some(event) = inner.events.get(&event_id).cloned() else {
            return Err(DomainError::EventNotFound(event_id));
        };

        if inner
            .rsvps
            .iter()
            .any(|r| r.event_id == event_id && r.actor == *actor)
        {
            return Err(DomainError::AlreadyRegistered);
        }

        let registered = inner.rsvps.iter().filter(|r| r.event_id == event_id).count();
        if !event.has_capacity_for(registered as i64) {
            return Err(DomainError::EventFull);
        }

        let rsvp = Rsvp {
            id: inner.next_id(),
            event_id,
            actor: actor.clone(),
            created_at: Utc::now(),
        };
        inner.rsvps.push(rsvp.clone());
        Ok(rsvp)
    }

    async fn count_for_event(&self, event_id: i64) -> RepoResult<i64> {
        Ok(self
            .store
            .lock()
            .rsvps
            .iter()
            .filter(|r| r.event_id == event_id)
            .count() as i64)
    }
}

// ============================================================================
// Views
// ============================================================================

#[derive(Clone)]
pub struct InMemoryViewRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryViewRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ViewRepository for InMemoryViewRepository {
    async fn record(&self, event_id: i64, identity: Identity) -> RepoResult<Event> {
        let mut inner = self.store.lock();

        if !inner.events.contains_key(&event_id) {
            return Err(DomainError::EventNotFound(event_id));
        }

        if inner.views.insert((event_id, identity)) {
            if let Some(event) = inner.events.get_mut(&event_id) {
                event.views += 1;
            }
        }

        Ok(inner.events[&event_id].clone())
    }
}
