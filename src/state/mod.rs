//! State management module
//!
//! Per-chat dialogue state kept in memory only; it is lost on restart.

use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;

/// Where a chat currently is in a conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChatState {
    #[default]
    Idle,
}

pub type ChatStorage = InMemStorage<ChatState>;

/// Create the in-memory store registered with the dispatcher
pub fn new_storage() -> Arc<ChatStorage> {
    InMemStorage::new()
}
