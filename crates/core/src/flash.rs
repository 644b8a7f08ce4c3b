//! One-shot status messages shown on the next rendered page.

use serde::{Deserialize, Serialize};

/// Whether a flash reports a success or a failure. The serialized form
/// doubles as the CSS class of the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// A pending message. At most one is stored per session; a newer flash
/// replaces an older one that was never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const LIST_CREATED: &str = "A new list has been added";
pub const LIST_RENAMED: &str = "The list name has been updated";
pub const LIST_DELETED: &str = "The list has been deleted";
pub const TODO_CREATED: &str = "A new todo item was added";
pub const TODO_DELETED: &str = "The todo has been deleted";
pub const TODOS_COMPLETED: &str = "All todos have been completed";
pub const PAGE_NOT_FOUND: &str = "The page you requested does not exist";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(Flash::success("ok").kind, FlashKind::Success);
        assert_eq!(Flash::error("no").kind, FlashKind::Error);
    }

    #[test]
    fn serialized_kind_is_snake_case() {
        let json = serde_json::to_value(Flash::error("bad")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "bad");
        let json = serde_json::to_value(Flash::success("good")).unwrap();
        assert_eq!(json["kind"], "success");
    }
}
