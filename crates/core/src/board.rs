//! The per-session collection of todo lists and every mutation on it.
//!
//! All names are trimmed before validation and storage. Any operation that
//! changes a list's todos recomputes that list's `completed` flag before
//! returning.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{next_id, LIST_PREFIX, TODO_PREFIX};
use crate::model::{Todo, TodoList};
use crate::validation::{validate_list_name, validate_todo_name};

pub const LIST_ENTITY: &str = "List";
pub const TODO_ENTITY: &str = "Todo";

/// All lists owned by one session, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoBoard {
    lists: Vec<TodoList>,
}

fn list_not_found(list_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: LIST_ENTITY,
        id: list_id.to_string(),
    }
}

fn todo_not_found(todo_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: TODO_ENTITY,
        id: todo_id.to_string(),
    }
}

impl TodoBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn list(&self, list_id: &str) -> Result<&TodoList, CoreError> {
        self.lists
            .iter()
            .find(|list| list.id == list_id)
            .ok_or_else(|| list_not_found(list_id))
    }

    pub fn list_mut(&mut self, list_id: &str) -> Result<&mut TodoList, CoreError> {
        self.lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or_else(|| list_not_found(list_id))
    }

    /// Validate `name` and append a new empty list. Returns the new list.
    pub fn create_list(&mut self, name: &str) -> Result<&TodoList, CoreError> {
        let name = name.trim();
        validate_list_name(name, &self.lists, None)?;

        let id = next_id(self.lists.iter().map(|list| list.id.as_str()), LIST_PREFIX);
        self.lists.push(TodoList::new(id, name.to_string()));

        Ok(&self.lists[self.lists.len() - 1])
    }

    /// Rename a list. The list keeps its old name when validation fails.
    pub fn rename_list(&mut self, list_id: &str, name: &str) -> Result<&TodoList, CoreError> {
        let name = name.trim();
        self.list(list_id)?;
        validate_list_name(name, &self.lists, Some(list_id))?;

        let list = self.list_mut(list_id)?;
        list.name = name.to_string();
        Ok(&*list)
    }

    /// Remove a list and all its todos. Returns the removed list.
    pub fn delete_list(&mut self, list_id: &str) -> Result<TodoList, CoreError> {
        let index = self
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or_else(|| list_not_found(list_id))?;

        Ok(self.lists.remove(index))
    }

    /// Validate `name` and append a new open todo to a list.
    pub fn add_todo(&mut self, list_id: &str, name: &str) -> Result<&Todo, CoreError> {
        let list = self.list_mut(list_id)?;
        let name = name.trim();
        validate_todo_name(name)?;

        let id = next_id(list.todos.iter().map(|todo| todo.id.as_str()), TODO_PREFIX);
        list.todos.push(Todo {
            id,
            name: name.to_string(),
            completed: false,
        });
        list.refresh_completed();

        Ok(&list.todos[list.todos.len() - 1])
    }

    /// Set a todo's completion flag. Returns the owning list's new state.
    pub fn set_todo_completed(
        &mut self,
        list_id: &str,
        todo_id: &str,
        completed: bool,
    ) -> Result<&TodoList, CoreError> {
        let list = self.list_mut(list_id)?;
        list.find_todo_mut(todo_id)
            .ok_or_else(|| todo_not_found(todo_id))?
            .completed = completed;
        list.refresh_completed();

        Ok(&*list)
    }

    /// Mark every todo in a list as completed.
    pub fn complete_all(&mut self, list_id: &str) -> Result<&TodoList, CoreError> {
        let list = self.list_mut(list_id)?;
        for todo in &mut list.todos {
            todo.completed = true;
        }
        list.refresh_completed();

        Ok(&*list)
    }

    /// Remove a todo from a list. Returns the removed todo.
    pub fn delete_todo(&mut self, list_id: &str, todo_id: &str) -> Result<Todo, CoreError> {
        let list = self.list_mut(list_id)?;
        let index = list
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or_else(|| todo_not_found(todo_id))?;

        let removed = list.todos.remove(index);
        list.refresh_completed();

        Ok(removed)
    }
}
