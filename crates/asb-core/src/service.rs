//! Framework-agnostic message handling.
//!
//! The Telegram adapter converts updates to [`InboundMessage`] and calls
//! [`BotService::handle`]; everything else happens here.

use std::sync::Arc;

use tracing::info;

use crate::{
    config::BotSettings,
    delivery::{split_chunks, ChunkedDelivery},
    domain::MessageRef,
    formatting::{self, AI_SENTINEL},
    governor::RequestGovernor,
    locale::{JalaliFormatter, LocaleFormatter},
    messaging::{
        port::MessagingPort,
        types::{BotCommand, InboundMessage},
    },
    store::UsageStore,
    transform::{self, AiResponder, TransformDispatcher, TransformOutcome},
    Result,
};

pub struct BotService {
    store: UsageStore,
    governor: RequestGovernor,
    dispatcher: TransformDispatcher,
    delivery: ChunkedDelivery,
    messenger: Arc<dyn MessagingPort>,
    ai: Option<Arc<dyn AiResponder>>,
    ai_variant: String,
    locale: Arc<dyn LocaleFormatter>,
    timeline: String,
    settings: BotSettings,
}

impl BotService {
    pub fn new(
        store: UsageStore,
        messenger: Arc<dyn MessagingPort>,
        dispatcher: TransformDispatcher,
        settings: BotSettings,
    ) -> Self {
        Self {
            governor: RequestGovernor::new(store.clone(), settings.cooldown),
            delivery: ChunkedDelivery::new(
                messenger.clone(),
                settings.chunk_size,
                settings.chunk_pace,
            ),
            store,
            dispatcher,
            messenger,
            ai: None,
            ai_variant: "pahlavi".to_string(),
            locale: Arc::new(JalaliFormatter),
            timeline: String::new(),
            settings,
        }
    }

    pub fn with_ai(mut self, responder: Arc<dyn AiResponder>, variant: impl Into<String>) -> Self {
        self.ai = Some(responder);
        self.ai_variant = variant.into();
        self
    }

    pub fn with_locale(mut self, locale: Arc<dyn LocaleFormatter>) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = timeline.into();
        self
    }

    pub fn store(&self) -> &UsageStore {
        &self.store
    }

    /// Routes one inbound message. Errors end handling of this message only.
    pub async fn handle(&self, msg: &InboundMessage) -> Result<()> {
        match msg.text.as_deref().and_then(BotCommand::parse) {
            Some(BotCommand::Start) => self.handle_start(msg).await,
            Some(BotCommand::Stats) => self.handle_stats(msg).await,
            None => self.handle_text(msg).await,
        }
    }

    pub async fn handle_start(&self, msg: &InboundMessage) -> Result<()> {
        let id = msg.chat_id.key();
        self.store.ensure_user(&id).await?;
        let stats = self.store.read_stats(&id).await?;

        let text = formatting::render_start(
            &self.timeline,
            &stats,
            self.locale.as_ref(),
            self.settings.cooldown,
        );
        self.reply(msg, &text).await?;
        Ok(())
    }

    pub async fn handle_stats(&self, msg: &InboundMessage) -> Result<()> {
        let stats = self.store.read_stats(&msg.chat_id.key()).await?;
        let text = formatting::render_stats(&stats, self.locale.as_ref());
        self.reply(msg, &text).await?;
        Ok(())
    }

    pub async fn handle_text(&self, msg: &InboundMessage) -> Result<()> {
        let Some(text) = msg.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(());
        };

        if let Some(prompt) = text.strip_prefix(AI_SENTINEL) {
            return self.handle_ai(msg, prompt.trim()).await;
        }

        let id = msg.chat_id.key();
        if !self.governor.try_accept_now(&id).await? {
            self.reply(msg, formatting::COOLDOWN_WAIT).await?;
            return Ok(());
        }
        self.store.increment_count(&id).await?;
        info!(chat = %msg.chat_id, chars = text.chars().count(), "transform request accepted");

        self.reply(msg, formatting::CONVERTING).await?;

        let outcomes = self.dispatcher.run_all(text);
        let payload = transform::render_payload(&outcomes);
        self.delivery
            .send_all(msg.chat_id, Some(msg.message_id), &payload)
            .await?;
        Ok(())
    }

    async fn handle_ai(&self, msg: &InboundMessage, prompt: &str) -> Result<()> {
        if prompt.is_empty() {
            self.reply(msg, formatting::AI_EMPTY_PROMPT).await?;
            return Ok(());
        }

        // Outside the cooldown and the usage counters.
        let processing = self.reply(msg, formatting::AI_PROCESSING).await?;

        let outcome = match &self.ai {
            Some(ai) => transform::run_ai(ai.as_ref(), prompt, &self.ai_variant).await,
            None => TransformOutcome::Failed,
        };
        let answer = transform::render_ai(outcome);

        // The first chunk replaces the processing notice; any overflow follows
        // as regular replies.
        let first_len = split_chunks(&answer, self.delivery.chunk_size())
            .first()
            .map_or(0, |c| c.len());
        let (head, rest) = answer.split_at(first_len);
        if self.messenger.capabilities().supports_edit {
            self.messenger.edit_text(processing, head).await?;
        } else {
            self.reply(msg, head).await?;
        }
        self.delivery
            .send_all(msg.chat_id, Some(msg.message_id), rest)
            .await?;
        Ok(())
    }

    async fn reply(&self, msg: &InboundMessage, text: &str) -> Result<MessageRef> {
        let reply_to = self
            .messenger
            .capabilities()
            .supports_reply
            .then_some(msg.message_id);
        self.messenger.send_text(msg.chat_id, text, reply_to).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        domain::{ChatId, MessageId},
        errors::Error,
        testing::RecordingMessenger,
        transform::Transform,
    };

    fn dispatcher() -> TransformDispatcher {
        let rev: Arc<dyn Transform> =
            Arc::new(|t: &str| -> Result<String> { Ok(t.chars().rev().collect()) });
        let upper: Arc<dyn Transform> =
            Arc::new(|t: &str| -> Result<String> { Ok(t.to_uppercase()) });
        let broken: Arc<dyn Transform> = Arc::new(|_: &str| -> Result<String> {
            Err(Error::Transform {
                script: "broken".to_string(),
                reason: "unsupported".to_string(),
            })
        });
        TransformDispatcher::new()
            .with("rev", rev)
            .with("broken", broken)
            .with("upper", upper)
    }

    fn settings(cooldown: Duration) -> BotSettings {
        BotSettings {
            cooldown,
            chunk_size: 4000,
            chunk_pace: Duration::ZERO,
            ai_api_key: None,
        }
    }

    async fn service(cooldown: Duration) -> (BotService, Arc<RecordingMessenger>) {
        let messenger = Arc::new(RecordingMessenger::default());
        let store = UsageStore::in_memory().await.unwrap();
        let svc = BotService::new(store, messenger.clone(), dispatcher(), settings(cooldown))
            .with_timeline("TIMELINE");
        (svc, messenger)
    }

    fn msg(chat: i64, text: &str) -> InboundMessage {
        InboundMessage {
            chat_id: ChatId(chat),
            message_id: MessageId(10),
            text: Some(text.to_string()),
        }
    }

    #[tokio::test]
    async fn text_request_is_counted_and_delivered() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        svc.handle(&msg(1, "  abc  ")).await.unwrap();

        assert_eq!(
            messenger.sent_texts(),
            vec![
                formatting::CONVERTING.to_string(),
                format!(
                    "rev:\ncba\n\nbroken:\n{}\n\nupper:\nABC",
                    formatting::TRANSFORM_FAILED
                ),
            ]
        );
        assert!(messenger
            .sent()
            .iter()
            .all(|s| s.reply_to == Some(MessageId(10))));
        assert_eq!(svc.store().read_stats("1").await.unwrap().user_requests, 1);
    }

    #[tokio::test]
    async fn second_request_within_cooldown_is_rejected() {
        let (svc, messenger) = service(Duration::from_secs(60)).await;
        svc.handle(&msg(1, "one")).await.unwrap();
        svc.handle(&msg(1, "two")).await.unwrap();

        assert_eq!(
            messenger.sent_texts().last().map(String::as_str),
            Some(formatting::COOLDOWN_WAIT)
        );
        assert_eq!(svc.store().read_stats("1").await.unwrap().user_requests, 1);
    }

    #[tokio::test]
    async fn start_and_stats_never_count() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        svc.handle(&msg(3, "/start")).await.unwrap();
        svc.handle(&msg(3, "/help")).await.unwrap();
        svc.handle(&msg(3, "/stats")).await.unwrap();
        svc.handle(&msg(3, "/امار")).await.unwrap();

        let stats = svc.store().read_stats("3").await.unwrap();
        assert_eq!(stats.user_requests, 0);
        assert_eq!(stats.total_users, 1);
        assert!(stats.last_start.is_some());

        let sent = messenger.sent_texts();
        assert_eq!(sent.len(), 4);
        assert!(sent[0].starts_with("تاریخ زمان :\nTIMELINE\n"));
        assert!(sent[2].starts_with("📊 آمار کلی:"));
    }

    #[tokio::test]
    async fn stats_of_unregistered_user_does_not_create_row() {
        let (svc, _) = service(Duration::from_secs(5)).await;
        svc.handle(&msg(9, "/stats")).await.unwrap();
        assert!(svc.store().read_user("9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn aggregate_stats_over_two_users() {
        let (svc, _) = service(Duration::ZERO).await;
        for _ in 0..3 {
            svc.handle(&msg(1, "a")).await.unwrap();
        }
        svc.handle(&msg(2, "b")).await.unwrap();

        let stats = svc.store().read_stats("1").await.unwrap();
        assert_eq!(stats.user_requests, 3);
        assert_eq!(stats.total_users, 2);
        assert_eq!(stats.total_requests, 4);
    }

    #[tokio::test]
    async fn long_payload_is_chunked() {
        let messenger = Arc::new(RecordingMessenger::default());
        let store = UsageStore::in_memory().await.unwrap();
        let mut s = settings(Duration::from_secs(5));
        s.chunk_size = 8;
        let svc = BotService::new(store, messenger.clone(), dispatcher(), s);

        svc.handle(&msg(1, "abcdef")).await.unwrap();
        let sent = messenger.sent_texts();
        let chunks = &sent[1..];
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= 8));
        assert_eq!(
            chunks.concat(),
            format!(
                "rev:\nfedcba\n\nbroken:\n{}\n\nupper:\nABCDEF",
                formatting::TRANSFORM_FAILED
            )
        );
    }

    #[tokio::test]
    async fn send_failure_ends_only_that_message() {
        let messenger = Arc::new(RecordingMessenger::failing_for(ChatId(1)));
        let store = UsageStore::in_memory().await.unwrap();
        let svc = BotService::new(
            store,
            messenger.clone(),
            dispatcher(),
            settings(Duration::from_secs(5)),
        );

        assert!(matches!(
            svc.handle(&msg(1, "abc")).await,
            Err(Error::External(_))
        ));
        // Accepted and counted before the first reply was attempted.
        let user = svc.store().read_user("1").await.unwrap().unwrap();
        assert!(user.last_request.is_some());
        assert_eq!(user.request_count, 1);

        svc.handle(&msg(2, "abc")).await.unwrap();
        let sent = messenger.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|s| s.chat_id == ChatId(2)));
        assert_eq!(svc.store().read_stats("2").await.unwrap().total_requests, 2);
    }

    #[tokio::test]
    async fn storage_failure_is_returned_without_replying() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        svc.store().close().await;

        for text in ["abc", "/start", "/stats"] {
            assert!(matches!(
                svc.handle(&msg(1, text)).await,
                Err(Error::Storage(_))
            ));
        }
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn blank_text_is_ignored() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        svc.handle(&msg(1, "   ")).await.unwrap();
        svc.handle(&InboundMessage {
            chat_id: ChatId(1),
            message_id: MessageId(1),
            text: None,
        })
        .await
        .unwrap();
        assert!(messenger.sent().is_empty());
        assert!(svc.store().read_user("1").await.unwrap().is_none());
    }

    struct EchoAi;

    #[async_trait]
    impl AiResponder for EchoAi {
        async fn respond(&self, prompt: &str, variant: &str) -> Result<String> {
            Ok(format!("[{variant}] {prompt}"))
        }
    }

    #[tokio::test]
    async fn ai_request_edits_processing_notice() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        let svc = svc.with_ai(Arc::new(EchoAi), "pahlavi");

        svc.handle(&msg(4, "+  who was Darius? ")).await.unwrap();

        assert_eq!(messenger.sent_texts(), vec![formatting::AI_PROCESSING]);
        let edits = messenger.edits();
        assert_eq!(edits.len(), 1);
        assert_eq!(edits[0].1, "[pahlavi] who was Darius?");
        assert_eq!(svc.store().read_stats("4").await.unwrap().user_requests, 0);
    }

    #[tokio::test]
    async fn ai_request_does_not_consume_cooldown() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        let svc = svc.with_ai(Arc::new(EchoAi), "pahlavi");

        svc.handle(&msg(5, "+q")).await.unwrap();
        assert!(svc.store().read_user("5").await.unwrap().is_none());

        svc.handle(&msg(5, "abc")).await.unwrap();
        let user = svc.store().read_user("5").await.unwrap().unwrap();
        assert!(user.last_request.is_some());
        assert_eq!(user.request_count, 1);

        // Still inside the window opened by "abc".
        svc.handle(&msg(5, "+again")).await.unwrap();
        assert_eq!(
            svc.store().read_last_request("5").await.unwrap(),
            user.last_request
        );

        let sent = messenger.sent_texts();
        assert_eq!(sent[0], formatting::AI_PROCESSING);
        assert_eq!(sent[1], formatting::CONVERTING);
        assert!(sent[2].starts_with("rev:\ncba"));
        assert_eq!(sent[3], formatting::AI_PROCESSING);
        assert!(!sent.iter().any(|t| t == formatting::COOLDOWN_WAIT));

        let edits: Vec<_> = messenger.edits().into_iter().map(|(_, t)| t).collect();
        assert_eq!(edits, vec!["[pahlavi] q", "[pahlavi] again"]);
    }

    #[tokio::test]
    async fn ai_without_backend_shows_fixed_error() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        svc.handle(&msg(4, "+hello")).await.unwrap();
        assert_eq!(messenger.edits()[0].1, formatting::AI_FAILED);
    }

    #[tokio::test]
    async fn ai_with_empty_prompt_asks_for_text() {
        let (svc, messenger) = service(Duration::from_secs(5)).await;
        svc.handle(&msg(4, "+   ")).await.unwrap();
        assert_eq!(messenger.sent_texts(), vec![formatting::AI_EMPTY_PROMPT]);
        assert!(messenger.edits().is_empty());
    }

    #[tokio::test]
    async fn ai_overflow_is_sent_as_follow_up_chunks() {
        struct LongAi;

        #[async_trait]
        impl AiResponder for LongAi {
            async fn respond(&self, _: &str, _: &str) -> Result<String> {
                Ok("x".repeat(10))
            }
        }

        let messenger = Arc::new(RecordingMessenger::default());
        let store = UsageStore::in_memory().await.unwrap();
        let mut s = settings(Duration::from_secs(5));
        s.chunk_size = 4;
        let svc = BotService::new(store, messenger.clone(), dispatcher(), s)
            .with_ai(Arc::new(LongAi), "pahlavi");

        svc.handle(&msg(4, "+q")).await.unwrap();
        assert_eq!(messenger.edits()[0].1, "xxxx");
        assert_eq!(
            messenger.sent_texts(),
            vec![formatting::AI_PROCESSING, "xxxx", "xx"]
        );
    }
}
