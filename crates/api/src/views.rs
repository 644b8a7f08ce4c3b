//! Page view models and rendering.
//!
//! Each page gets a serialisable context struct built from core types, with
//! ordering and CSS classes already resolved so templates stay logic-free.

use axum::response::Html;
use checklist_core::board::TodoBoard;
use checklist_core::display::{li_class, sort_by_completion};
use checklist_core::flash::Flash;
use checklist_core::model::{Todo, TodoList};
use serde::Serialize;

use crate::error::AppResult;
use crate::templates::{self, Templates};

/// A list as shown in the index and in page headers.
#[derive(Debug, Serialize)]
pub struct ListView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub completed: bool,
    pub class: Option<&'static str>,
    pub total_todos: usize,
    pub completed_todos: usize,
}

impl<'a> From<&'a TodoList> for ListView<'a> {
    fn from(list: &'a TodoList) -> Self {
        Self {
            id: &list.id,
            name: &list.name,
            completed: list.completed,
            class: li_class(list.completed),
            total_todos: list.total_todos_count(),
            completed_todos: list.completed_todos_count(),
        }
    }
}

/// A todo row, including the value its toggle form submits.
#[derive(Debug, Serialize)]
pub struct TodoView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub completed: bool,
    pub class: Option<&'static str>,
    pub toggle_value: &'static str,
    pub toggle_label: &'static str,
}

impl<'a> From<&'a Todo> for TodoView<'a> {
    fn from(todo: &'a Todo) -> Self {
        let (toggle_value, toggle_label) = if todo.completed {
            ("false", "Undo")
        } else {
            ("true", "Done")
        };

        Self {
            id: &todo.id,
            name: &todo.name,
            completed: todo.completed,
            class: li_class(todo.completed),
            toggle_value,
            toggle_label,
        }
    }
}

#[derive(Serialize)]
struct AllListsPage<'a> {
    flash: Option<Flash>,
    lists: Vec<ListView<'a>>,
}

#[derive(Serialize)]
struct NewListPage<'a> {
    flash: Option<Flash>,
    new_list_name: &'a str,
}

#[derive(Serialize)]
struct SingleListPage<'a> {
    flash: Option<Flash>,
    list: ListView<'a>,
    todos: Vec<TodoView<'a>>,
    new_todo_name: &'a str,
}

#[derive(Serialize)]
struct EditListPage<'a> {
    flash: Option<Flash>,
    list: ListView<'a>,
    new_list_name: &'a str,
}

/// Every list, open ones first.
pub fn all_lists_page(
    templates: &Templates,
    board: &TodoBoard,
    flash: Option<Flash>,
) -> AppResult<Html<String>> {
    let lists = sort_by_completion(board.lists())
        .into_iter()
        .map(ListView::from)
        .collect();

    Ok(templates.render(templates::ALL_LISTS, AllListsPage { flash, lists })?)
}

/// The new-list form, pre-filled with `new_list_name`.
pub fn new_list_page(
    templates: &Templates,
    new_list_name: &str,
    flash: Option<Flash>,
) -> AppResult<Html<String>> {
    Ok(templates.render(
        templates::NEW_LIST,
        NewListPage {
            flash,
            new_list_name,
        },
    )?)
}

/// One list with its todos (open ones first) and the add-todo form.
pub fn single_list_page(
    templates: &Templates,
    list: &TodoList,
    new_todo_name: &str,
    flash: Option<Flash>,
) -> AppResult<Html<String>> {
    let todos = sort_by_completion(&list.todos)
        .into_iter()
        .map(TodoView::from)
        .collect();

    Ok(templates.render(
        templates::SINGLE_LIST,
        SingleListPage {
            flash,
            list: ListView::from(list),
            todos,
            new_todo_name,
        },
    )?)
}

/// The rename form for a list, pre-filled with `new_list_name`.
pub fn edit_list_page(
    templates: &Templates,
    list: &TodoList,
    new_list_name: &str,
    flash: Option<Flash>,
) -> AppResult<Html<String>> {
    Ok(templates.render(
        templates::EDIT_LIST,
        EditListPage {
            flash,
            list: ListView::from(list),
            new_list_name,
        },
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_toggle_submits_the_opposite_state() {
        let open = Todo {
            id: "todo0".into(),
            name: "milk".into(),
            completed: false,
        };
        let view = TodoView::from(&open);
        assert_eq!(view.toggle_value, "true");
        assert_eq!(view.class, None);

        let done = Todo {
            completed: true,
            ..open
        };
        let view = TodoView::from(&done);
        assert_eq!(view.toggle_value, "false");
        assert_eq!(view.class, Some("complete"));
    }

    #[test]
    fn index_shows_open_lists_before_completed_ones() {
        let templates = Templates::load().unwrap();
        let mut board = TodoBoard::new();
        board.create_list("Finished").unwrap();
        board.add_todo("list0", "x").unwrap();
        board.complete_all("list0").unwrap();
        board.create_list("Ongoing").unwrap();

        let Html(body) = all_lists_page(&templates, &board, None).unwrap();
        let ongoing = body.find("Ongoing").unwrap();
        let finished = body.find("Finished").unwrap();
        assert!(ongoing < finished);
        assert!(body.contains(r#"class="complete""#));
        assert!(body.contains("1 / 1"));
    }

    #[test]
    fn empty_index_says_so() {
        let templates = Templates::load().unwrap();
        let Html(body) = all_lists_page(&templates, &TodoBoard::new(), None).unwrap();
        assert!(body.contains("You have no lists yet."));
    }
}
