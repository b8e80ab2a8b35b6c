//! Bot handlers module
//!
//! Two routers share one admin filter:
//! - the admin router answers `/admin`
//! - the user router answers `/start`
//!
//! Both install the filter on the message and callback query channels.
//! Updates rejected by a filter get no reply.

pub mod admin;
pub mod user;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use crate::config::AccessConfig;
use crate::middleware::AdminFilter;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// The full handler tree: admin router first, then the user router
pub fn schema() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(admin::router())
        .branch(user::router())
}

/// Message filter shared by both routers
pub(crate) fn is_admin_message(msg: Message, filter: AdminFilter) -> bool {
    filter.allows_message(&msg)
}

/// Callback query filter shared by both routers
pub(crate) fn is_admin_callback(query: CallbackQuery, filter: AdminFilter) -> bool {
    filter.allows_callback(&query)
}

/// The user router admits everyone only when configured to
pub(crate) fn user_router_admits_message(
    msg: Message,
    filter: AdminFilter,
    access: AccessConfig,
) -> bool {
    access.user_router_public || is_admin_message(msg, filter)
}

pub(crate) fn user_router_admits_callback(
    query: CallbackQuery,
    filter: AdminFilter,
    access: AccessConfig,
) -> bool {
    access.user_router_public || is_admin_callback(query, filter)
}
