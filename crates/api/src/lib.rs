//! Checklist web server library.
//!
//! Exposes the building blocks (config, state, error handling, session,
//! templates, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;
pub mod views;
