//! Agent conversation state — message list, panel flag, loading flag, DAO
//! context.
//!
//! DESIGN
//! ======
//! The store is an explicit instance owned by the UI layer, not module
//! state, so independent conversations (and tests) never collide. Every
//! transition is synchronous, total, and delivered to each subscriber in
//! the order it was applied; the UI cannot miss an intermediate
//! assistant-loading state. A generation counter guards against late
//! completions landing in a conversation that was cleared or reset while
//! the request was in flight.

#[cfg(test)]
#[path = "agent_test.rs"]
mod agent_test;

use time::OffsetDateTime;
use uuid::Uuid;
use wire::{AgentRequest, ChatMessage, DaoContext, Role};

// =============================================================================
// MESSAGES
// =============================================================================

/// A message in the conversation, as held by the store.
///
/// `id` and `role` are fixed at append time; `content`, `loading`, and
/// `error` may change afterwards, and only on the most recently appended
/// message (see [`AgentStore::update_last_message`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub created_at: OffsetDateTime,
    /// `true` while this is a pending assistant placeholder.
    pub loading: bool,
    pub error: Option<String>,
}

impl Message {
    /// Wire form sent to the agent endpoint. Timestamps, ids, and local
    /// flags stay client-side.
    #[must_use]
    pub fn to_wire(&self) -> ChatMessage {
        ChatMessage { role: self.role, content: self.content.clone() }
    }
}

/// Caller-supplied part of a new message; the store assigns id and
/// timestamp on append.
#[derive(Clone, Debug)]
pub struct NewMessage {
    pub role: Role,
    pub content: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl NewMessage {
    #[must_use]
    pub fn new(role: Role, content: &str) -> Self {
        Self { role, content: content.to_owned(), loading: false, error: None }
    }

    #[must_use]
    pub fn user(content: &str) -> Self {
        Self::new(Role::User, content)
    }

    /// Pending assistant placeholder, filled in by `update_last_message`
    /// once the reply (or error) arrives.
    #[must_use]
    pub fn assistant_pending() -> Self {
        Self { role: Role::Assistant, content: String::new(), loading: true, error: None }
    }
}

/// Partial update merged into the last message. Carries no `id` or `role`
/// field, so those stay immutable by construction.
#[derive(Clone, Debug, Default)]
pub struct MessageUpdate {
    pub content: Option<String>,
    pub loading: Option<bool>,
    pub error: Option<String>,
}

// =============================================================================
// STATE
// =============================================================================

/// Snapshot of the conversation owned by [`AgentStore`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentState {
    /// Conversation order is append order and is never reordered.
    pub messages: Vec<Message>,
    pub is_open: bool,
    pub is_loading: bool,
    pub dao_context: Option<DaoContext>,
}

impl AgentState {
    /// Payload for `POST /api/dao-agent`: the full history in wire form
    /// plus the current context snapshot.
    #[must_use]
    pub fn to_request(&self) -> AgentRequest {
        AgentRequest {
            messages: self.messages.iter().map(Message::to_wire).collect(),
            dao_context: self.dao_context.clone(),
        }
    }
}

/// Handle returned by [`AgentStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&AgentState)>;

// =============================================================================
// STORE
// =============================================================================

/// Conversation state container with ordered observer delivery.
#[derive(Default)]
pub struct AgentStore {
    state: AgentState,
    generation: u64,
    next_subscriber: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl AgentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    /// Token identifying the current conversation lifetime. Capture it
    /// when issuing a request and pass it to
    /// [`Self::update_last_message_if_current`] so a reply that arrives
    /// after a clear/reset is discarded instead of applied.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Register a callback invoked with the state after every applied
    /// transition.
    pub fn subscribe(&mut self, callback: impl FnMut(&AgentState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    pub fn open(&mut self) {
        self.state.is_open = true;
        self.notify();
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
        self.notify();
    }

    pub fn toggle(&mut self) {
        self.state.is_open = !self.state.is_open;
        self.notify();
    }

    /// Replace the DAO context wholesale. A new context fully supersedes
    /// the old one; there is no merge.
    pub fn set_context(&mut self, context: Option<DaoContext>) {
        self.state.dao_context = context;
        self.notify();
    }

    /// Append a message, assigning a fresh id and the current timestamp.
    /// Never fails and never deduplicates.
    pub fn add_message(&mut self, message: NewMessage) {
        self.state.messages.push(Message {
            id: Uuid::new_v4(),
            role: message.role,
            content: message.content,
            created_at: OffsetDateTime::now_utc(),
            loading: message.loading,
            error: message.error,
        });
        self.notify();
    }

    /// Merge `update` into the most recently appended message. No-op on an
    /// empty conversation; earlier messages are never touched.
    pub fn update_last_message(&mut self, update: MessageUpdate) {
        let Some(last) = self.state.messages.last_mut() else {
            return;
        };
        if let Some(content) = update.content {
            last.content = content;
        }
        if let Some(loading) = update.loading {
            last.loading = loading;
        }
        if let Some(error) = update.error {
            last.error = Some(error);
        }
        self.notify();
    }

    /// [`Self::update_last_message`], guarded by the generation captured
    /// at request time. Returns `false` (state untouched) when the
    /// conversation was cleared or reset since.
    pub fn update_last_message_if_current(&mut self, generation: u64, update: MessageUpdate) -> bool {
        if generation != self.generation {
            return false;
        }
        self.update_last_message(update);
        true
    }

    /// Set the request-in-flight flag. Pairing this with the request
    /// lifecycle is the caller's responsibility.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.state.is_loading = is_loading;
        self.notify();
    }

    /// Empty the conversation, preserving context and panel state.
    pub fn clear_messages(&mut self) {
        self.state.messages.clear();
        self.generation += 1;
        self.notify();
    }

    /// Return to the initial empty state.
    pub fn reset(&mut self) {
        self.state = AgentState::default();
        self.generation += 1;
        self.notify();
    }

    fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
    }
}
