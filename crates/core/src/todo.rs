//! The todo entity and its request payloads.
//!
//! Payload validation lives here too: the API layer checks a payload with
//! [`validate_create`] / [`validate_update`] before handing it to the
//! store, so the store itself can assume its preconditions hold.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{Timestamp, TodoId};

/// A single task entry.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards. Field names serialize in camelCase, the wire format
/// the frontend client expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: Timestamp,
    /// Star rating from 1 (lowest) to 5 (highest).
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for creating a todo.
///
/// Deliberately has no `completed` field -- a new todo always starts out
/// incomplete, whatever the caller sends.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
    #[validate(range(min = 1, max = 5, message = "priority must be between 1 and 5"))]
    pub priority: i32,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Partial update payload.
///
/// Fields left out of the request keep their current value on the stored
/// todo; `id` and `created_at` are not patchable at all.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: Option<String>,
    pub completed: Option<bool>,
    #[validate(range(min = 1, max = 5, message = "priority must be between 1 and 5"))]
    pub priority: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Validate a create payload, mapping any violation to
/// [`CoreError::Validation`].
pub fn validate_create(input: &CreateTodo) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(collect_messages(&e)))
}

/// Validate an update payload. Only fields that are present are checked.
pub fn validate_update(input: &UpdateTodo) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(collect_messages(&e)))
}

/// Flatten `validator` errors into a single stable message string.
fn collect_messages(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    // Field iteration order is not deterministic; sort for stable output.
    messages.sort();
    messages.join("; ")
}
