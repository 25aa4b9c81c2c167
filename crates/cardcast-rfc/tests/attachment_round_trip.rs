//! The calendar attachment carries the exact card bytes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cardcast_core::types::OutputFormat;
use cardcast_rfc::rfc::builder::VCardBuilder;
use cardcast_rfc::rfc::vcalendar::extract_card;
use cardcast_rfc::rfc::vcard::{Organization, StructuredName};
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 30, 23, 59, 59)
        .single()
        .expect("valid timestamp")
}

/// Collects the `ATTACH` value by hand: the lines after the filename line,
/// each with its leading space removed.
fn attachment_stream(calendar: &str) -> String {
    calendar
        .split("\r\n")
        .skip_while(|line| !line.starts_with(" X-APPLE-FILENAME="))
        .skip(1)
        .take_while(|line| line.starts_with(' '))
        .map(|line| &line[1..])
        .collect()
}

#[test_log::test]
fn calendar_attachment_decodes_to_card() {
    let mut card = VCardBuilder::new(OutputFormat::VCalendar);
    card.add_name(&StructuredName::simple("Doe", "Jane"))
        .and_then(|c| c.add_company(&Organization::new("Acme")))
        .and_then(|c| c.add_note(&"Long note with ünïcödé. ".repeat(20)))
        .expect("setters");

    let calendar = card.render_at(now());
    assert!(calendar.starts_with("BEGIN:VCALENDAR\r\n"));

    for line in calendar.split("\r\n") {
        assert!(line.len() <= 75, "over-long line: {line}");
    }

    let decoded = STANDARD
        .decode(attachment_stream(&calendar))
        .expect("valid base64");
    assert_eq!(decoded, card.build_card_at(now()).into_bytes());
}

#[test]
fn dtstart_uses_london_wall_clock() {
    let card = VCardBuilder::new(OutputFormat::VCalendar);
    let calendar = card.render_at(now());

    // GMT in November
    assert!(calendar.contains("DTSTART;TZID=Europe/London:20251130T235900\r\n"));
    assert!(calendar.contains("DTEND;TZID=Europe/London:20251130T235901\r\n"));
    assert!(calendar.contains("DTSTAMP:20251130T235900Z\r\n"));
}

proptest! {
    #[test]
    fn any_note_survives_the_attachment(note in "\\PC{0,300}", email in "[a-z]{1,12}@[a-z]{1,8}\\.com") {
        let mut card = VCardBuilder::new(OutputFormat::VCalendar);
        card.add_note(&note).expect("note");
        card.add_email(&email, "").expect("email");

        let calendar = card.render_at(now());
        let expected = card.build_card_at(now());

        prop_assert_eq!(extract_card(&calendar).expect("extractable"), expected.clone());

        let decoded = STANDARD.decode(attachment_stream(&calendar)).expect("valid base64");
        prop_assert_eq!(decoded, expected.into_bytes());
    }
}
