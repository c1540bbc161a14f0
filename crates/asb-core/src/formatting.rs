//! Fixed user-facing strings and reply rendering.
//!
//! Internal error details never reach the chat; every failure kind maps to one
//! of the pre-rendered strings below.

use std::time::Duration;

use crate::{locale::LocaleFormatter, store::UsageStats};

/// Leading character that routes a message to the AI path.
pub const AI_SENTINEL: char = '+';

pub const TRANSFORM_FAILED: &str = "❌ خطا";
pub const AI_FAILED: &str = "❌ خطا در پاسخ هوش مصنوعی";
pub const AI_EMPTY_PROMPT: &str = "⚠️ بعد از + متن بنویس";
pub const AI_PROCESSING: &str = "⏳ در حال پردازش با هوش مصنوعی...";
pub const COOLDOWN_WAIT: &str = "⏳ لطفاً چند ثانیه صبر کنید.";
pub const CONVERTING: &str = "⏳ در حال تبدیل متن...";

pub fn render_start(
    timeline: &str,
    stats: &UsageStats,
    locale: &dyn LocaleFormatter,
    cooldown: Duration,
) -> String {
    format!(
        "تاریخ زمان :\n{timeline}\n\
         سلام! 👋\n\
         به ربات تبدیل متن به خطوط باستانی خوش اومدی.\n\n\
         📊 آمار شما:\n\
         ▫️ تعداد درخواست\u{200c}ها: {requests}\n\
         ▫️ آخرین استارت: {last_start}\n\n\
         ⚠️ لطفاً هر {secs} ثانیه فقط یک پیام ارسال کن.",
        timeline = timeline.trim_end(),
        requests = stats.user_requests,
        last_start = locale.format(stats.last_start),
        secs = cooldown.as_secs(),
    )
}

pub fn render_stats(stats: &UsageStats, locale: &dyn LocaleFormatter) -> String {
    format!(
        "📊 آمار کلی:\n\
         👥 کاربران: {}\n\
         📨 کل درخواست\u{200c}ها: {}\n\n\
         👤 شما:\n\
         ▫️ درخواست\u{200c}ها: {}\n\
         ▫️ آخرین استارت: {}",
        stats.total_users,
        stats.total_requests,
        stats.user_requests,
        locale.format(stats.last_start),
    )
}
