//! Calendar-event template carrying the card attachment.

use cardcast_core::constants::{
    ATTACH_PARAMS, CALENDAR_VERSION_LINE, CRLF, DEFAULT_SUMMARY, VCARD_FILE_EXTENSION,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::embed::embed_card;
use crate::rfc::vcard::build::{escape_param_value, escape_text, fold_line};

/// Event settings for the calendar wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Zone named in `DTSTART`/`DTEND` and used for their wall-clock time.
    pub timezone: Tz,
    /// Event `SUMMARY` text.
    pub summary: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Europe::London,
            summary: DEFAULT_SUMMARY.to_string(),
        }
    }
}

/// Wraps a rendered card into a one-event calendar.
///
/// ## Summary
/// `DTSTART` is the current minute in `options.timezone` with seconds `00`,
/// `DTEND` the same minute with seconds `01`, and `DTSTAMP` the current UTC
/// minute. The card is attached as `<filename>.vcf`, with control
/// characters, `:` and `"` removed from `filename`.
#[must_use]
pub fn wrap_card(
    card: &str,
    filename: &str,
    options: &CalendarOptions,
    now: DateTime<Utc>,
) -> String {
    let local_minute = now
        .with_timezone(&options.timezone)
        .format("%Y%m%dT%H%M")
        .to_string();
    let utc_minute = now.format("%Y%m%dT%H%M").to_string();
    let tzid = options.timezone.name();

    let mut output = String::new();

    output.push_str("BEGIN:VCALENDAR");
    output.push_str(CRLF);
    output.push_str(CALENDAR_VERSION_LINE);
    output.push_str("BEGIN:VEVENT");
    output.push_str(CRLF);

    output.push_str(&format!("DTSTART;TZID={tzid}:{local_minute}00{CRLF}"));
    output.push_str(&format!("DTEND;TZID={tzid}:{local_minute}01{CRLF}"));
    output.push_str(&fold_line(&format!("SUMMARY:{}", escape_text(&options.summary))));
    output.push_str(&format!("DTSTAMP:{utc_minute}00Z{CRLF}"));

    output.push_str(ATTACH_PARAMS);
    output.push_str(CRLF);
    output.push_str(&fold_line(&format!(
        " X-APPLE-FILENAME={}.{VCARD_FILE_EXTENSION}:",
        escape_param_value(filename)
    )));
    output.push_str(&embed_card(card));

    output.push_str("END:VEVENT");
    output.push_str(CRLF);
    output.push_str("END:VCALENDAR");
    output.push_str(CRLF);

    tracing::debug!(
        timezone = tzid,
        card_bytes = card.len(),
        bytes = output.len(),
        "Wrapped vCard in vCalendar"
    );

    output
}
