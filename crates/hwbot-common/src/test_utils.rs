//! Test utilities and shared fixtures for the homework bot workspace.

use serde_json::{json, Value};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Timestamp used as `from_date` and `current_date` throughout the fixtures.
pub const TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Verdict sentence for the `approved` status.
pub const APPROVED_VERDICT: &str = "Работа проверена: ревьюеру всё понравилось. Ура!";

/// Verdict sentence for the `reviewing` status.
pub const REVIEWING_VERDICT: &str = "Работа взята на проверку ревьюером.";

/// Verdict sentence for the `rejected` status.
pub const REJECTED_VERDICT: &str = "Работа проверена: у ревьюера есть замечания.";

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// A single homework record as the Practicum API returns it.
pub fn homework(status: &str, name: &str) -> Value {
    json!({
        "id": 124,
        "status": status,
        "homework_name": name,
        "reviewer_comment": "",
        "date_updated": "2023-11-14T22:13:20Z",
        "lesson_name": "Итоговый проект"
    })
}

/// Wraps records into a full API payload.
pub fn payload_with(homeworks: Vec<Value>) -> Value {
    json!({
        "homeworks": homeworks,
        "current_date": TEST_TIMESTAMP,
    })
}

/// Payload with a single approved homework named `hw1`.
pub fn approved_payload() -> Value {
    json!({
        "homeworks": [{"status": "approved", "homework_name": "hw1"}],
        "current_date": TEST_TIMESTAMP,
    })
}

/// Payload with no homework changes since `from_date`.
pub fn empty_payload() -> Value {
    payload_with(Vec::new())
}
