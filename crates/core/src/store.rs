//! In-memory todo store.
//!
//! The store owns the live collection (in creation order) and the id
//! counter. Ids start at 1 and are never reused, even after deletions, so
//! every id handed out over a store's lifetime stays unique. Storage is
//! process-lifetime only; there is no persistence layer behind this.
//!
//! All methods are plain synchronous calls. Instances share nothing, so
//! callers needing concurrent access wrap a store in their own lock and
//! each test can construct a fresh one.

use serde::Serialize;

use crate::error::CoreError;
use crate::todo::{CreateTodo, Todo, UpdateTodo};
use crate::types::TodoId;

/// Outcome of a bulk delete.
///
/// The confirmation message matches the original API text; `count` carries
/// the number of deleted records as a structured field as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDeleteOutcome {
    pub message: String,
    pub count: usize,
}

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// An empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos, in creation order.
    pub fn find_all(&self) -> &[Todo] {
        &self.todos
    }

    /// The todo with the given id.
    pub fn find_one(&self, id: TodoId) -> Result<&Todo, CoreError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound { entity: "Todo", id })
    }

    /// Create a todo from the given payload.
    ///
    /// Assigns the next sequential id, stamps the current UTC time as
    /// `created_at`, and forces `completed` to false. The payload is
    /// assumed pre-validated (see [`crate::todo::validate_create`]).
    pub fn create(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            text: input.text,
            completed: false,
            created_at: chrono::Utc::now(),
            priority: input.priority,
            due_date: input.due_date,
            description: input.description,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    /// Apply a partial update to the todo with the given id.
    ///
    /// Only fields present in the patch are overwritten; `id` and
    /// `created_at` never change. The record is mutated in place and a
    /// borrow of it is returned.
    pub fn update(&mut self, id: TodoId, patch: UpdateTodo) -> Result<&Todo, CoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound { entity: "Todo", id })?;

        if let Some(text) = patch.text {
            todo.text = text;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(priority) = patch.priority {
            todo.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = Some(due_date);
        }
        if let Some(description) = patch.description {
            todo.description = Some(description);
        }

        Ok(todo)
    }

    /// Remove the todo with the given id, preserving the relative order of
    /// the remainder.
    pub fn remove(&mut self, id: TodoId) -> Result<(), CoreError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::NotFound { entity: "Todo", id })?;
        self.todos.remove(index);
        Ok(())
    }

    /// Delete every todo. Never fails; deleting an empty store reports a
    /// count of 0. The id counter keeps counting from where it was, so
    /// later creates do not reuse ids.
    pub fn remove_all(&mut self) -> BulkDeleteOutcome {
        let count = self.todos.len();
        self.todos.clear();
        BulkDeleteOutcome {
            message: "All todos have been deleted.".to_string(),
            count,
        }
    }

    /// Delete every completed todo, preserving the order of the rest.
    pub fn remove_completed(&mut self) -> BulkDeleteOutcome {
        let count = self.todos.iter().filter(|t| t.completed).count();
        self.todos.retain(|t| !t.completed);
        BulkDeleteOutcome {
            message: format!("{count} completed todos have been deleted."),
            count,
        }
    }
}
