//! Structural validation of the Practicum API payload.

use crate::models::{present, CURRENT_DATE_KEY, HOMEWORKS_KEY};
use hwbot_common::{PollError, Result};
use serde_json::Value;
use tracing::debug;

/// Checks the payload shape and returns the homework records untouched.
///
/// A key holding `null` counts as absent. Records are returned in the order
/// the API sent them and are not inspected; callers consume only the first
/// one. An empty list is reported as [`PollError::EmptyResult`].
pub fn check_response(payload: &Value) -> Result<&[Value]> {
    let object = payload
        .as_object()
        .ok_or_else(|| PollError::type_mismatch("ответ не является словарем"))?;

    let (homeworks, current_date) =
        match (present(object, HOMEWORKS_KEY), present(object, CURRENT_DATE_KEY)) {
            (Some(homeworks), Some(current_date)) => (homeworks, current_date),
            (homeworks, _) => {
                debug!("No status change: response lacks required keys");
                let key = if homeworks.is_none() {
                    HOMEWORKS_KEY
                } else {
                    CURRENT_DATE_KEY
                };
                return Err(PollError::missing_key(key));
            }
        };

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| PollError::type_mismatch("homeworks в ответе API не является списком"))?;

    let current_date = current_date.as_i64().ok_or_else(|| {
        PollError::type_mismatch("current_date в ответе API не является целым числом")
    })?;

    if homeworks.is_empty() {
        debug!(current_date, "Homework list is empty");
        return Err(PollError::EmptyResult);
    }

    Ok(homeworks)
}
