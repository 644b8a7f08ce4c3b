//! Domain layer for the checklist application: todo lists, their todos,
//! name validation, id generation and flash messages.
//!
//! Everything here is synchronous and free of I/O. The HTTP crate loads a
//! [`board::TodoBoard`] from the session, calls into it, and stores it back.

pub mod board;
pub mod display;
pub mod error;
pub mod flash;
pub mod ids;
pub mod model;
pub mod validation;
