pub mod lists;
pub mod todos;

use axum::http::Uri;
use axum::response::{Redirect, Response};
use checklist_core::board::TODO_ENTITY;
use checklist_core::error::CoreError;
use checklist_core::flash::{self, Flash};
use serde::Deserialize;

use crate::error::AppResult;
use crate::session::UserSession;

/// Landing page for every "go back" redirect.
pub const ALL_LISTS_PATH: &str = "/all-lists";

/// Path of a single list page.
pub fn list_path(list_id: &str) -> String {
    format!("{ALL_LISTS_PATH}/{list_id}")
}

/// Form body shared by the new-list and rename-list forms.
#[derive(Debug, Deserialize)]
pub struct ListNameForm {
    #[serde(default)]
    pub new_list_name: String,
}

/// Form body of the add-todo form.
#[derive(Debug, Deserialize)]
pub struct TodoNameForm {
    #[serde(default)]
    pub new_todo_name: String,
}

/// Form body of a todo's toggle button.
#[derive(Debug, Deserialize)]
pub struct ToggleTodoForm {
    #[serde(default)]
    pub completed: String,
}

impl ToggleTodoForm {
    /// Only the literal `"true"` marks the todo as completed.
    pub fn completed(&self) -> bool {
        self.completed == "true"
    }
}

/// Turn a missing list or todo into an error flash and a redirect.
///
/// A missing list sends the visitor back to the index; a missing todo sends
/// them back to the list it was looked up in. Anything else is propagated.
pub(crate) async fn redirect_missing(
    session: &UserSession,
    err: CoreError,
    list_id: &str,
) -> AppResult<Response> {
    match &err {
        CoreError::NotFound { entity, id } => {
            tracing::debug!(entity = %entity, id = %id, "Requested entity does not exist");
            let to = if *entity == TODO_ENTITY {
                list_path(list_id)
            } else {
                ALL_LISTS_PATH.to_string()
            };
            session
                .redirect_with(Flash::error(err.user_message()), &to)
                .await
        }
        _ => Err(err.into()),
    }
}

/// GET /
pub async fn root() -> Redirect {
    Redirect::to(ALL_LISTS_PATH)
}

/// Fallback for unknown paths: flash an error and go back to the index.
pub async fn not_found(session: UserSession, uri: Uri) -> AppResult<Response> {
    tracing::debug!(%uri, "No route matched");
    session
        .redirect_with(Flash::error(flash::PAGE_NOT_FOUND), ALL_LISTS_PATH)
        .await
}
