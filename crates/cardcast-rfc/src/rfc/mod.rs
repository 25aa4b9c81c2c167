pub mod builder;
pub mod vcalendar;
pub mod vcard;
