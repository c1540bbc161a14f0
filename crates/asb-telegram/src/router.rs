use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};
use tracing::{info, warn};

use asb_core::{
    config::Config,
    messaging::port::MessagingPort,
    service::BotService,
    store::UsageStore,
    transform::{AiResponder, TransformDispatcher},
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BotService>,
}

/// Everything the bot needs besides the Telegram connection itself.
pub struct BotParts {
    pub store: UsageStore,
    pub dispatcher: TransformDispatcher,
    pub ai: Option<Arc<dyn AiResponder>>,
    pub timeline: String,
}

pub async fn run_polling(cfg: Arc<Config>, parts: BotParts) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.expose());

    match bot.get_me().await {
        Ok(me) => info!("asb started: @{}", me.username()),
        Err(e) => warn!("could not fetch bot identity: {e}"),
    }
    info!(
        scripts = parts.dispatcher.len(),
        ai = parts.ai.is_some(),
        cooldown_secs = cfg.settings.cooldown.as_secs(),
        "bot configured"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let mut service = BotService::new(
        parts.store,
        messenger,
        parts.dispatcher,
        cfg.settings.clone(),
    )
    .with_timeline(parts.timeline);
    if let Some(ai) = parts.ai {
        service = service.with_ai(ai, cfg.ai_variant.clone());
    }

    let state = Arc::new(AppState {
        service: Arc::new(service),
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state.clone()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    state.service.store().close().await;
    info!("asb stopped");
    Ok(())
}
