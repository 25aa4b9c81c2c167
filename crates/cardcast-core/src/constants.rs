/// Protocol constants shared across crates
pub const VCARD_VERSION: &str = "3.0";
pub const VCALENDAR_VERSION: &str = "2.0";

pub const VCARD_CONTENT_TYPE: &str = "text/x-vcard";
pub const VCALENDAR_CONTENT_TYPE: &str = "text/x-vcalendar";
pub const ATTACHMENT_MEDIA_TYPE: &str = "text/directory";

pub const VCARD_FILE_EXTENSION: &str = "vcf";
pub const VCALENDAR_FILE_EXTENSION: &str = "ics";

pub const DEFAULT_CHARSET: &str = "utf-8";
pub const DEFAULT_FILENAME: &str = "vcard";
pub const DEFAULT_TIMEZONE: &str = "Europe/London";
pub const DEFAULT_SUMMARY: &str = "Click the attachment to save to your contacts";

/// Record line terminator.
pub const CRLF: &str = "\r\n";

pub const VERSION_LINE: &str = const_str::concat!("VERSION:", VCARD_VERSION, CRLF);
pub const CALENDAR_VERSION_LINE: &str = const_str::concat!("VERSION:", VCALENDAR_VERSION, CRLF);
pub const ATTACH_PARAMS: &str = const_str::concat!(
    "ATTACH;VALUE=BINARY;ENCODING=BASE64;FMTTYPE=",
    ATTACHMENT_MEDIA_TYPE,
    ";"
);
