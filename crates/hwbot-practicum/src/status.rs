//! Review status codes and their verdict sentences.

use crate::models::{present, HOMEWORK_NAME_KEY, STATUS_KEY};
use hwbot_common::{PollError, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Review status reported by the Practicum API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// The reviewer accepted the work.
    Approved,
    /// The work is being reviewed.
    Reviewing,
    /// The reviewer left remarks.
    Rejected,
}

impl HomeworkStatus {
    /// Every known status.
    pub const ALL: [Self; 3] = [Self::Approved, Self::Reviewing, Self::Rejected];

    /// Status code as the API spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Fixed sentence shown to the user for this status.
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = PollError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PollError::invalid_status(format!("неизвестный статус {s:?}")))
    }
}

/// Formats the notification for a homework whose status changed.
///
/// `status` and `homework_name` must be present and not `null`; a value of
/// the wrong JSON type is reported like an unknown status.
pub fn parse_status(homework: &Value) -> Result<String> {
    let record = homework
        .as_object()
        .ok_or_else(|| PollError::type_mismatch("запись о работе не является словарем"))?;

    let status = present(record, STATUS_KEY).ok_or_else(|| PollError::missing_key(STATUS_KEY))?;
    let homework_name = present(record, HOMEWORK_NAME_KEY)
        .ok_or_else(|| PollError::missing_key(HOMEWORK_NAME_KEY))?;

    let homework_name = homework_name
        .as_str()
        .ok_or_else(|| PollError::invalid_status("homework_name не является строкой"))?;
    if homework_name.is_empty() {
        return Err(PollError::invalid_status("пустое значение homework_name"));
    }

    let verdict = status
        .as_str()
        .ok_or_else(|| PollError::invalid_status(format!("неизвестный статус {status}")))?
        .parse::<HomeworkStatus>()?
        .verdict();

    Ok(format!(
        "Изменился статус проверки работы \"{homework_name}\". {verdict}"
    ))
}
