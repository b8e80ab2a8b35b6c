//! Authentication middleware
//!
//! The admin-membership predicate shared by every router. One `AdminFilter`
//! is registered as a dispatcher dependency and injected into the filters.

use std::collections::HashSet;
use std::sync::Arc;
use teloxide::types::{CallbackQuery, Message, User};
use tracing::trace;

/// Admin-membership check over the configured Telegram ids
#[derive(Debug, Clone, Default)]
pub struct AdminFilter {
    admin_ids: Arc<HashSet<i64>>,
}

impl AdminFilter {
    /// Create a filter from the configured admin ids
    pub fn new(admin_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admin_ids: Arc::new(admin_ids.into_iter().collect()),
        }
    }

    /// Check if a Telegram id belongs to an admin
    pub fn allows(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Check the sender of an update
    pub fn allows_user(&self, user: &User) -> bool {
        let user_id = user.id.0 as i64;
        let allowed = self.allows(user_id);
        trace!(user_id = user_id, allowed = allowed, "Admin filter evaluated");
        allowed
    }

    /// Messages without a sender are never allowed
    pub fn allows_message(&self, msg: &Message) -> bool {
        msg.from.as_ref().is_some_and(|user| self.allows_user(user))
    }

    pub fn allows_callback(&self, query: &CallbackQuery) -> bool {
        self.allows_user(&query.from)
    }

    pub fn len(&self) -> usize {
        self.admin_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admin_ids.is_empty()
    }
}
