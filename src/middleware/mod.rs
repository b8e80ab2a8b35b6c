//! Middleware module
//!
//! Predicates applied to updates before they reach a handler

pub mod auth;

pub use auth::AdminFilter;
