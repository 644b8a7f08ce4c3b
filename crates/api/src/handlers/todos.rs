//! Handlers for the todos inside a list.
//!
//! Every mutation here may flip the owning list's `completed` flag; the
//! board recomputes it, so handlers only persist and redirect.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use checklist_core::error::CoreError;
use checklist_core::flash::{self, Flash};

use super::{list_path, redirect_missing, TodoNameForm, ToggleTodoForm};
use crate::error::AppResult;
use crate::session::UserSession;
use crate::state::AppState;
use crate::views;

/// POST /all-lists/{list_id}
///
/// Adds a todo and redirects back to the list, or re-renders the list with
/// the validation message.
pub async fn create_todo(
    State(state): State<AppState>,
    session: UserSession,
    Path(list_id): Path<String>,
    Form(form): Form<TodoNameForm>,
) -> AppResult<Response> {
    let mut board = session.board().await?;

    let added = board
        .add_todo(&list_id, &form.new_todo_name)
        .map(|todo| todo.id.clone());

    match added {
        Ok(todo_id) => {
            session.save_board(&board).await?;
            tracing::info!(list_id = %list_id, todo_id = %todo_id, "Todo created");
            session
                .redirect_with(Flash::success(flash::TODO_CREATED), &list_path(&list_id))
                .await
        }
        Err(err @ CoreError::Validation(_)) => {
            tracing::debug!(list_id = %list_id, error = %err, "Rejected todo name");
            let list = board.list(&list_id)?;
            let page = views::single_list_page(
                &state.templates,
                list,
                form.new_todo_name.trim(),
                Some(Flash::error(err.user_message())),
            )?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => redirect_missing(&session, err, &list_id).await,
    }
}

/// POST /all-lists/{list_id}/complete-all
pub async fn complete_all(
    session: UserSession,
    Path(list_id): Path<String>,
) -> AppResult<Response> {
    let mut board = session.board().await?;

    let completed = board
        .complete_all(&list_id)
        .map(|list| list.total_todos_count());

    match completed {
        Ok(count) => {
            session.save_board(&board).await?;
            tracing::info!(list_id = %list_id, count, "All todos completed");
            session
                .redirect_with(Flash::success(flash::TODOS_COMPLETED), &list_path(&list_id))
                .await
        }
        Err(err) => redirect_missing(&session, err, &list_id).await,
    }
}

/// POST /all-lists/{list_id}/todos/{todo_id}
///
/// Sets the todo's completion flag from the `completed` form field and
/// redirects back to the list.
pub async fn toggle_todo(
    session: UserSession,
    Path((list_id, todo_id)): Path<(String, String)>,
    Form(form): Form<ToggleTodoForm>,
) -> AppResult<Response> {
    let mut board = session.board().await?;
    let completed = form.completed();

    let toggled = board
        .set_todo_completed(&list_id, &todo_id, completed)
        .map(|list| list.completed);

    match toggled {
        Ok(list_completed) => {
            session.save_board(&board).await?;
            tracing::info!(
                list_id = %list_id,
                todo_id = %todo_id,
                completed,
                list_completed,
                "Todo toggled",
            );
            Ok(Redirect::to(&list_path(&list_id)).into_response())
        }
        Err(err) => redirect_missing(&session, err, &list_id).await,
    }
}

/// POST /all-lists/{list_id}/todos/{todo_id}/delete
pub async fn delete_todo(
    session: UserSession,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> AppResult<Response> {
    let mut board = session.board().await?;

    let deleted = board.delete_todo(&list_id, &todo_id);

    match deleted {
        Ok(_) => {
            session.save_board(&board).await?;
            tracing::info!(list_id = %list_id, todo_id = %todo_id, "Todo deleted");
            session
                .redirect_with(Flash::success(flash::TODO_DELETED), &list_path(&list_id))
                .await
        }
        Err(err) => redirect_missing(&session, err, &list_id).await,
    }
}
