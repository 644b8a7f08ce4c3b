//! Ordering and styling helpers used when rendering lists and todos.

use crate::model::{Todo, TodoList};

/// Anything with a completion flag.
pub trait Completable {
    fn is_completed(&self) -> bool;
}

impl Completable for Todo {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Completable for TodoList {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Open items first, completed items after. Each group keeps its original
/// relative order.
pub fn sort_by_completion<T: Completable>(items: &[T]) -> Vec<&T> {
    let (completed, open): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| item.is_completed());

    open.into_iter().chain(completed).collect()
}

/// CSS class for a `<li>` holding an item.
pub fn li_class(completed: bool) -> Option<&'static str> {
    completed.then_some("complete")
}
