//! Keys of the Practicum API payload.
//!
//! Records are kept as raw JSON objects. Only the first one is ever read, so
//! the shape of the others never affects a cycle.

use serde_json::{Map, Value};

/// Top-level key holding the list of changed homeworks.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Top-level key holding the server timestamp.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Record key holding the review status code.
pub const STATUS_KEY: &str = "status";

/// Record key holding the homework name, usually `<login>__<project>.zip`.
pub const HOMEWORK_NAME_KEY: &str = "homework_name";

/// Record key holding the homework id.
pub const ID_KEY: &str = "id";

/// Record key holding the lesson the homework belongs to.
pub const LESSON_NAME_KEY: &str = "lesson_name";

/// Looks up `key`, treating a `null` value as absent.
pub(crate) fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
