//! Name validation for lists and todos.
//!
//! Both entity kinds share the same length bounds. List names must also be
//! unique within the session.

use validator::Validate;

use crate::error::CoreError;
use crate::model::TodoList;

pub const LIST_NAME_LENGTH_MESSAGE: &str = "List name must be between 1 and 100 characters";
pub const LIST_NAME_UNIQUE_MESSAGE: &str = "List name must be unique";
pub const TODO_NAME_LENGTH_MESSAGE: &str = "Todo item must be between 1 and 100 characters";

/// Names are 1 to 100 characters long, counted in chars.
#[derive(Debug, Validate)]
struct NameBounds {
    #[validate(length(min = 1, max = 100))]
    name: String,
}

fn name_within_bounds(name: &str) -> bool {
    NameBounds {
        name: name.to_string(),
    }
    .validate()
    .is_ok()
}

/// Validate a (trimmed) list name against the lists already in the session.
///
/// `exclude_id` names a list whose own name does not count towards the
/// uniqueness check, so renaming a list to its current name is accepted.
pub fn validate_list_name(
    name: &str,
    lists: &[TodoList],
    exclude_id: Option<&str>,
) -> Result<(), CoreError> {
    if !name_within_bounds(name) {
        return Err(CoreError::Validation(LIST_NAME_LENGTH_MESSAGE.to_string()));
    }

    let taken = lists
        .iter()
        .filter(|list| Some(list.id.as_str()) != exclude_id)
        .any(|list| list.name == name);
    if taken {
        return Err(CoreError::Conflict(LIST_NAME_UNIQUE_MESSAGE.to_string()));
    }

    Ok(())
}

/// Validate a (trimmed) todo name.
pub fn validate_todo_name(name: &str) -> Result<(), CoreError> {
    if !name_within_bounds(name) {
        return Err(CoreError::Validation(TODO_NAME_LENGTH_MESSAGE.to_string()));
    }
    Ok(())
}
