//! Wiring of configuration, API client and notifier into a poller.

use crate::error::BotResult;
use crate::poller::{PollState, Poller};
use hwbot_config::Config;
use hwbot_practicum::PracticumClient;
use hwbot_telegram::TelegramNotifier;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Main bot structure.
pub struct HomeworkBot {
    config: Arc<Config>,
    poller: Poller<PracticumClient, TelegramNotifier>,
}

impl HomeworkBot {
    /// Creates a new bot instance.
    pub fn new(config: Config) -> BotResult<Self> {
        let config = Arc::new(config);
        let source = PracticumClient::new(&config.practicum)?;
        let notifier = TelegramNotifier::new(&config.telegram)?;
        let poller = Poller::new(source, notifier, config.polling.retry_period());

        Ok(Self { config, poller })
    }

    /// Configuration the bot was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying poll loop.
    pub const fn poller(&self) -> &Poller<PracticumClient, TelegramNotifier> {
        &self.poller
    }

    /// Polls from the current time until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> PollState
    where
        F: Future<Output = ()>,
    {
        info!(
            endpoint = %self.config.practicum.endpoint,
            chat_id = %self.config.telegram.chat_id,
            "Starting homework status bot"
        );
        self.poller
            .run_until(PollState::starting_now(), shutdown)
            .await
    }
}
