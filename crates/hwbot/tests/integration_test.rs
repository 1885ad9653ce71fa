//! Integration tests for the hwbot crate.
//!
//! Both external APIs are replaced by mock servers; the bot is built from
//! environment-style variables exactly as the binary builds it.

use hwbot::{CycleOutcome, HomeworkBot, PollState, Stage};
use hwbot_common::test_utils::{approved_payload, init_test_logging, TEST_TIMESTAMP};
use hwbot_common::ErrorKind;
use hwbot_config::{
    ConfigLoader, PRACTICUM_ENDPOINT, PRACTICUM_TOKEN, TELEGRAM_API_URL, TELEGRAM_CHAT_ID,
    TELEGRAM_TOKEN,
};
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";
const SEND_PATH: &str = "/bot42:bot-token/sendMessage";

struct Harness {
    practicum: MockServer,
    telegram: MockServer,
    bot: HomeworkBot,
}

async fn harness() -> Harness {
    init_test_logging();
    let practicum = MockServer::start().await;
    let telegram = MockServer::start().await;

    let env = HashMap::from([
        (PRACTICUM_TOKEN, "practicum-token".to_string()),
        (TELEGRAM_TOKEN, "42:bot-token".to_string()),
        (TELEGRAM_CHAT_ID, "777".to_string()),
        (PRACTICUM_ENDPOINT, format!("{}{STATUSES_PATH}", practicum.uri())),
        (TELEGRAM_API_URL, telegram.uri()),
    ]);
    let config = ConfigLoader::from_lookup(|name: &str| env.get(name).cloned())
        .load()
        .unwrap();
    let bot = HomeworkBot::new(config).unwrap();

    Harness {
        practicum,
        telegram,
        bot,
    }
}

#[tokio::test]
async fn test_status_change_reaches_chat() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", "OAuth practicum-token"))
        .and(query_param("from_date", TEST_TIMESTAMP.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(approved_payload()))
        .expect(1)
        .mount(&h.practicum)
        .await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json(json!({
            "chat_id": "777",
            "text": "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&h.telegram)
        .await;

    let outcome = h
        .bot
        .poller()
        .run_cycle(&PollState::new(TEST_TIMESTAMP))
        .await;
    assert!(matches!(outcome, CycleOutcome::Delivered { .. }));
}

#[tokio::test]
async fn test_api_outage_is_reported_to_chat() {
    let h = harness().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&h.practicum)
        .await;

    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json(json!({
            "chat_id": "777",
            "text": "Сбой в работе программы: API вернул код 503"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&h.telegram)
        .await;

    let outcome = h
        .bot
        .poller()
        .run_cycle(&PollState::new(TEST_TIMESTAMP))
        .await;
    assert_eq!(
        outcome,
        CycleOutcome::Reported {
            stage: Stage::Fetching,
            kind: ErrorKind::ResponseStatus,
            report: "Сбой в работе программы: API вернул код 503".to_string(),
        }
    );
}

#[tokio::test]
async fn test_both_apis_down_does_not_panic() {
    let h = harness().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&h.practicum)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&h.telegram)
        .await;

    let outcome = h
        .bot
        .poller()
        .run_cycle(&PollState::new(TEST_TIMESTAMP))
        .await;
    assert!(matches!(
        outcome,
        CycleOutcome::Unreported {
            stage: Stage::Validating,
            kind: ErrorKind::MissingKey,
            ..
        }
    ));
}

#[tokio::test]
async fn test_bot_exposes_its_config() {
    let h = harness().await;
    assert_eq!(h.bot.config().telegram.chat_id.0, "777");
    assert_eq!(h.bot.poller().retry_period().as_secs(), 600);
}
