use std::sync::Arc;

use tracing::info;

use asb_core::{config::Config, store::UsageStore, transform::AiResponder};
use asb_openai::OpenAiResponder;
use asb_scripts::Timeline;
use asb_telegram::router::{run_polling, BotParts};

#[tokio::main]
async fn main() -> Result<(), asb_core::Error> {
    asb_core::logging::init("asb")?;

    let cfg = Arc::new(Config::load()?);
    let store = UsageStore::open(&cfg.database_path).await?;

    let ai: Option<Arc<dyn AiResponder>> = match &cfg.settings.ai_api_key {
        Some(key) => Some(Arc::new(OpenAiResponder::new(
            key.clone(),
            &cfg.ai_base_url,
            cfg.ai_model.clone(),
            cfg.ai_timeout,
        )?)),
        None => {
            info!("AI_API_KEY not set; '+' requests will get the fixed error reply");
            None
        }
    };

    let parts = BotParts {
        store,
        dispatcher: asb_scripts::dispatcher(),
        ai,
        timeline: Timeline.as_text(),
    };

    run_polling(cfg, parts)
        .await
        .map_err(|e| asb_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
