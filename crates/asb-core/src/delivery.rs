use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::warn;

use crate::{
    domain::{ChatId, MessageId},
    messaging::port::MessagingPort,
    Result,
};

/// Splits `payload` into contiguous pieces of at most `limit` characters.
///
/// Purely length-based: words and lines may be cut. Never splits a char.
pub fn split_chunks(payload: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut out = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in payload.char_indices() {
        if count == limit {
            out.push(&payload[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < payload.len() {
        out.push(&payload[start..]);
    }
    out
}

/// Sends long payloads as a paced sequence of bounded messages.
pub struct ChunkedDelivery {
    messenger: Arc<dyn MessagingPort>,
    chunk_size: usize,
    pace: Duration,
}

impl ChunkedDelivery {
    /// `chunk_size` is capped at the messenger's own message limit.
    pub fn new(messenger: Arc<dyn MessagingPort>, chunk_size: usize, pace: Duration) -> Self {
        let max_len = messenger.capabilities().max_message_len.max(1);
        Self {
            messenger,
            chunk_size: chunk_size.clamp(1, max_len),
            pace,
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Sends every chunk in order, pausing between consecutive sends.
    ///
    /// Fail-fast: the first failed send aborts the remaining chunks. Returns
    /// the number of chunks sent.
    pub async fn send_all(
        &self,
        chat_id: ChatId,
        reply_to: Option<MessageId>,
        payload: &str,
    ) -> Result<usize> {
        let chunks = split_chunks(payload, self.chunk_size);
        let total = chunks.len();

        for (i, chunk) in chunks.into_iter().enumerate() {
            if i > 0 && !self.pace.is_zero() {
                sleep(self.pace).await;
            }
            if let Err(e) = self.messenger.send_text(chat_id, chunk, reply_to).await {
                warn!(chat = %chat_id, chunk = i + 1, total, error = %e, "chunk delivery failed");
                return Err(e);
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingMessenger;

    #[test]
    fn chunk_count_and_concatenation() {
        let payload = "x".repeat(9001);
        let chunks = split_chunks(&payload, 4000);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 4000));
        assert_eq!(chunks[2].len(), 1001);
        assert_eq!(chunks.concat(), payload);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_chunk() {
        let payload = "ab".repeat(4000);
        assert_eq!(split_chunks(&payload, 4000).len(), 2);
    }

    #[test]
    fn empty_payload_has_no_chunks() {
        assert!(split_chunks("", 4000).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let payload = "𓃭ا".repeat(5); // 10 chars, multi-byte
        let chunks = split_chunks(&payload, 3);
        assert_eq!(chunks.len(), 4);
        assert_eq!(
            chunks.iter().map(|c| c.chars().count()).collect::<Vec<_>>(),
            vec![3, 3, 3, 1]
        );
        assert_eq!(chunks.concat(), payload);
    }

    #[tokio::test(start_paused = true)]
    async fn sends_in_order_with_pacing_between() {
        let messenger = Arc::new(RecordingMessenger::default());
        let delivery = ChunkedDelivery::new(messenger.clone(), 4, Duration::from_millis(300));

        let start = tokio::time::Instant::now();
        let sent = delivery
            .send_all(ChatId(5), Some(MessageId(77)), "aaaabbbbcc")
            .await
            .unwrap();

        assert_eq!(sent, 3);
        assert_eq!(start.elapsed(), Duration::from_millis(600));
        let texts = messenger.sent_texts();
        assert_eq!(texts, vec!["aaaa", "bbbb", "cc"]);
        assert!(messenger
            .sent()
            .iter()
            .all(|s| s.chat_id == ChatId(5) && s.reply_to == Some(MessageId(77))));
    }

    #[tokio::test]
    async fn chunk_size_is_capped_by_messenger_limit() {
        let messenger = Arc::new(RecordingMessenger::default());
        let delivery = ChunkedDelivery::new(messenger.clone(), 10_000, Duration::ZERO);
        let payload = "y".repeat(5000);

        assert_eq!(delivery.send_all(ChatId(1), None, &payload).await.unwrap(), 2);
        assert_eq!(messenger.sent_texts()[0].chars().count(), 4096);
    }

    #[tokio::test]
    async fn empty_payload_sends_nothing() {
        let messenger = Arc::new(RecordingMessenger::default());
        let delivery = ChunkedDelivery::new(messenger.clone(), 10, Duration::ZERO);
        assert_eq!(delivery.send_all(ChatId(1), None, "").await.unwrap(), 0);
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn aborts_remaining_chunks_on_failure() {
        let messenger = Arc::new(RecordingMessenger::failing_after(1));
        let delivery = ChunkedDelivery::new(messenger.clone(), 2, Duration::ZERO);

        let res = delivery.send_all(ChatId(1), None, "aabbccdd").await;
        assert!(res.is_err());
        assert_eq!(messenger.sent_texts(), vec!["aa"]);
    }
}
