//! Display formatting for stored timestamps.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Shown when a user has no recorded timestamp.
pub const UNKNOWN: &str = "نامشخص";

pub trait LocaleFormatter: Send + Sync {
    fn format(&self, at: Option<DateTime<Utc>>) -> String;
}

/// Solar Hijri (Jalali) calendar, rendered as `YYYY/MM/DD HH:MM` in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct JalaliFormatter;

impl LocaleFormatter for JalaliFormatter {
    fn format(&self, at: Option<DateTime<Utc>>) -> String {
        let Some(at) = at else {
            return UNKNOWN.to_string();
        };
        let (jy, jm, jd) =
            gregorian_to_jalali(i64::from(at.year()), i64::from(at.month()), i64::from(at.day()));
        format!(
            "{jy:04}/{jm:02}/{jd:02} {:02}:{:02}",
            at.hour(),
            at.minute()
        )
    }
}

/// Converts a proleptic Gregorian date to (year, month, day) in the Jalali calendar.
pub fn gregorian_to_jalali(gy: i64, gm: i64, gd: i64) -> (i64, i64, i64) {
    const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100
        + (gy2 + 399) / 400
        + gd
        + DAYS_BEFORE_MONTH[(gm - 1) as usize];

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    // First six months have 31 days, the next five 30, Esfand 29/30.
    if days < 186 {
        (jy, 1 + days / 31, 1 + days % 31)
    } else {
        (jy, 7 + (days - 186) / 30, 1 + (days - 186) % 30)
    }
}
