//! Route definitions for lists and their todos, mounted at `/all-lists`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{lists, todos};
use crate::state::AppState;

/// List and todo routes mounted at `/all-lists`.
///
/// ```text
/// GET    /                                  -> index
/// GET    /new                               -> new_list_form
/// POST   /new                               -> create_list
/// GET    /{list_id}                         -> show_list
/// POST   /{list_id}                         -> create_todo
/// POST   /{list_id}/complete-all            -> complete_all
/// GET    /{list_id}/edit                    -> edit_list_form
/// POST   /{list_id}/edit                    -> update_list
/// POST   /{list_id}/delete                  -> delete_list
/// POST   /{list_id}/todos/{todo_id}         -> toggle_todo
/// POST   /{list_id}/todos/{todo_id}/delete  -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lists::index))
        .route("/new", get(lists::new_list_form).post(lists::create_list))
        .route("/{list_id}", get(lists::show_list).post(todos::create_todo))
        .route("/{list_id}/complete-all", post(todos::complete_all))
        .route(
            "/{list_id}/edit",
            get(lists::edit_list_form).post(lists::update_list),
        )
        .route("/{list_id}/delete", post(lists::delete_list))
        .route("/{list_id}/todos/{todo_id}", post(todos::toggle_todo))
        .route("/{list_id}/todos/{todo_id}/delete", post(todos::delete_todo))
}
