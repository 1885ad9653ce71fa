//! Fixed-interval polling loop.
//!
//! Every cycle runs fetch → validate → format → notify strictly in order and
//! is followed by an unconditional pause. Failures never escape a cycle: they
//! are classified, logged, and reported to the chat on a best-effort basis.

use chrono::Utc;
use hwbot_common::{ErrorKind, PollError};
use hwbot_practicum::{check_response, parse_status, HomeworkSource, ID_KEY, LESSON_NAME_KEY};
use hwbot_telegram::Notifier;
use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

/// Prefix of every failure report sent to the chat.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// State carried from one cycle to the next.
///
/// The lower bound is never advanced to the server's `current_date`, so a
/// homework whose status changed after startup is reported again on every
/// cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollState {
    timestamp: i64,
}

impl PollState {
    /// State querying changes since `timestamp` (unix seconds).
    pub const fn new(timestamp: i64) -> Self {
        Self { timestamp }
    }

    /// State querying changes since the current time.
    pub fn starting_now() -> Self {
        Self::new(Utc::now().timestamp())
    }

    /// Value sent as `from_date`.
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Step of a cycle that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Requesting the API.
    Fetching,
    /// Checking the payload shape.
    Validating,
    /// Turning the first record into a message.
    Formatting,
    /// Delivering the message.
    Notifying,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetching => "fetching",
            Self::Validating => "validating",
            Self::Formatting => "formatting",
            Self::Notifying => "notifying",
        })
    }
}

/// Result of one polling cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was delivered.
    Delivered {
        /// Text that reached the chat.
        message: String,
    },
    /// The cycle failed and the failure report reached the chat.
    Reported {
        /// Step that failed.
        stage: Stage,
        /// Classification of the failure.
        kind: ErrorKind,
        /// Text that reached the chat.
        report: String,
    },
    /// The cycle failed and the failure report could not be delivered either.
    Unreported {
        /// Step that failed.
        stage: Stage,
        /// Classification of the failure.
        kind: ErrorKind,
        /// Text that was attempted.
        report: String,
    },
}

/// Drives the polling cycles.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    retry_period: Duration,
}

impl<S, N> Poller<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    /// Creates a poller that pauses `retry_period` after every cycle.
    pub const fn new(source: S, notifier: N, retry_period: Duration) -> Self {
        Self {
            source,
            notifier,
            retry_period,
        }
    }

    /// Notifier used for status and failure messages.
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Pause between cycles.
    pub const fn retry_period(&self) -> Duration {
        self.retry_period
    }

    /// Runs one cycle.
    #[instrument(skip(self, state), fields(from_date = state.timestamp()))]
    pub async fn run_cycle(&self, state: &PollState) -> CycleOutcome {
        match self.poll_once(state).await {
            Ok(message) => {
                info!("Status change delivered");
                CycleOutcome::Delivered { message }
            }
            Err((stage, err)) => self.report_failure(stage, err).await,
        }
    }

    /// Runs cycles until `shutdown` resolves.
    ///
    /// Shutdown is observed only between cycles, so an in-flight cycle always
    /// completes.
    pub async fn run_until<F>(&self, state: PollState, shutdown: F) -> PollState
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(
            from_date = state.timestamp(),
            retry_period_secs = self.retry_period.as_secs(),
            "Poll loop started"
        );

        loop {
            let outcome = self.run_cycle(&state).await;
            debug!(?outcome, "Polling cycle finished");

            tokio::select! {
                () = &mut shutdown => {
                    info!("Shutdown requested, poll loop stopped");
                    return state;
                }
                () = sleep(self.retry_period) => {}
            }
        }
    }

    async fn poll_once(&self, state: &PollState) -> Result<String, (Stage, PollError)> {
        let payload = self
            .source
            .fetch_updates(state.timestamp())
            .await
            .map_err(|e| (Stage::Fetching, e))?;

        let homeworks = check_response(&payload).map_err(|e| (Stage::Validating, e))?;
        let homework = homeworks
            .first()
            .ok_or((Stage::Validating, PollError::EmptyResult))?;
        debug!(
            count = homeworks.len(),
            id = ?homework.get(ID_KEY),
            lesson = ?homework.get(LESSON_NAME_KEY),
            "Formatting first homework record"
        );

        let message = parse_status(homework).map_err(|e| (Stage::Formatting, e))?;

        self.notifier
            .notify(&message)
            .await
            .map_err(|e| (Stage::Notifying, e))?;
        Ok(message)
    }

    async fn report_failure(&self, stage: Stage, err: PollError) -> CycleOutcome {
        let kind = err.kind();
        let report = format!("{FAILURE_PREFIX}: {err}");

        error!(%stage, %kind, "{report}");

        match self.notifier.notify(&report).await {
            Ok(()) => CycleOutcome::Reported {
                stage,
                kind,
                report,
            },
            Err(send_err) => {
                error!(
                    kind = %send_err.kind(),
                    "Failure report was not delivered: {send_err}"
                );
                CycleOutcome::Unreported {
                    stage,
                    kind,
                    report,
                }
            }
        }
    }
}
