//! Lists and the todos they contain.
//!
//! Both types are serde-serialisable because they live inside the user's
//! session record between requests.

use serde::{Deserialize, Serialize};

/// A single actionable item with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

/// A named collection of todos.
///
/// `completed` is derived from `todos`; every mutation of `todos` must be
/// followed by [`TodoList::refresh_completed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    pub name: String,
    pub completed: bool,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty, not-completed list.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
            todos: Vec::new(),
        }
    }

    /// True iff the list is non-empty and every todo is completed.
    pub fn all_todos_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.completed)
    }

    /// Recompute the derived `completed` flag from the todos.
    pub fn refresh_completed(&mut self) {
        self.completed = self.all_todos_completed();
    }

    pub fn total_todos_count(&self) -> usize {
        self.todos.len()
    }

    pub fn completed_todos_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    pub fn find_todo(&self, todo_id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub fn find_todo_mut(&mut self, todo_id: &str) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}
