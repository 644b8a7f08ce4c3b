//! Handlers for creating, viewing, renaming and deleting todo lists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use checklist_core::error::CoreError;
use checklist_core::flash::{self, Flash};

use super::{list_path, redirect_missing, ListNameForm, ALL_LISTS_PATH};
use crate::error::AppResult;
use crate::session::UserSession;
use crate::state::AppState;
use crate::views;

/// GET /all-lists
pub async fn index(State(state): State<AppState>, session: UserSession) -> AppResult<Response> {
    let board = session.board().await?;
    let flash = session.take_flash().await?;

    Ok(views::all_lists_page(&state.templates, &board, flash)?.into_response())
}

/// GET /all-lists/new
pub async fn new_list_form(
    State(state): State<AppState>,
    session: UserSession,
) -> AppResult<Response> {
    let flash = session.take_flash().await?;

    Ok(views::new_list_page(&state.templates, "", flash)?.into_response())
}

/// POST /all-lists/new
///
/// Creates the list and redirects to the index, or re-renders the form with
/// the validation message.
pub async fn create_list(
    State(state): State<AppState>,
    session: UserSession,
    Form(form): Form<ListNameForm>,
) -> AppResult<Response> {
    let mut board = session.board().await?;

    let created = board
        .create_list(&form.new_list_name)
        .map(|list| list.id.clone());

    match created {
        Ok(list_id) => {
            session.save_board(&board).await?;
            tracing::info!(list_id = %list_id, "List created");
            session
                .redirect_with(Flash::success(flash::LIST_CREATED), ALL_LISTS_PATH)
                .await
        }
        Err(err @ (CoreError::Validation(_) | CoreError::Conflict(_))) => {
            tracing::debug!(error = %err, "Rejected new list name");
            let page = views::new_list_page(
                &state.templates,
                form.new_list_name.trim(),
                Some(Flash::error(err.user_message())),
            )?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /all-lists/{list_id}
pub async fn show_list(
    State(state): State<AppState>,
    session: UserSession,
    Path(list_id): Path<String>,
) -> AppResult<Response> {
    let board = session.board().await?;
    let list = match board.list(&list_id) {
        Ok(list) => list,
        Err(err) => return redirect_missing(&session, err, &list_id).await,
    };
    let flash = session.take_flash().await?;

    Ok(views::single_list_page(&state.templates, list, "", flash)?.into_response())
}

/// GET /all-lists/{list_id}/edit
pub async fn edit_list_form(
    State(state): State<AppState>,
    session: UserSession,
    Path(list_id): Path<String>,
) -> AppResult<Response> {
    let board = session.board().await?;
    let list = match board.list(&list_id) {
        Ok(list) => list,
        Err(err) => return redirect_missing(&session, err, &list_id).await,
    };
    let flash = session.take_flash().await?;

    Ok(views::edit_list_page(&state.templates, list, &list.name, flash)?.into_response())
}

/// POST /all-lists/{list_id}/edit
///
/// Renames the list and redirects to it, or re-renders the edit form with
/// the validation message and the rejected name.
pub async fn update_list(
    State(state): State<AppState>,
    session: UserSession,
    Path(list_id): Path<String>,
    Form(form): Form<ListNameForm>,
) -> AppResult<Response> {
    let mut board = session.board().await?;

    let renamed = board
        .rename_list(&list_id, &form.new_list_name)
        .map(|list| list.name.clone());

    match renamed {
        Ok(name) => {
            session.save_board(&board).await?;
            tracing::info!(list_id = %list_id, name = %name, "List renamed");
            session
                .redirect_with(Flash::success(flash::LIST_RENAMED), &list_path(&list_id))
                .await
        }
        Err(err @ (CoreError::Validation(_) | CoreError::Conflict(_))) => {
            tracing::debug!(list_id = %list_id, error = %err, "Rejected list rename");
            let list = board.list(&list_id)?;
            let page = views::edit_list_page(
                &state.templates,
                list,
                form.new_list_name.trim(),
                Some(Flash::error(err.user_message())),
            )?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => redirect_missing(&session, err, &list_id).await,
    }
}

/// POST /all-lists/{list_id}/delete
pub async fn delete_list(
    session: UserSession,
    Path(list_id): Path<String>,
) -> AppResult<Response> {
    let mut board = session.board().await?;

    let deleted = board.delete_list(&list_id);

    match deleted {
        Ok(removed) => {
            session.save_board(&board).await?;
            tracing::info!(
                list_id = %list_id,
                todos = removed.total_todos_count(),
                "List deleted",
            );
            session
                .redirect_with(Flash::success(flash::LIST_DELETED), ALL_LISTS_PATH)
                .await
        }
        Err(err) => redirect_missing(&session, err, &list_id).await,
    }
}
