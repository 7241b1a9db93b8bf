use crate::i18n::Locale;
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

const PREVIEW_MAX_CHARS: usize = 100;
const PREVIEW_KEEP_CHARS: usize = 97;

pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

/// `prefix-` followed by 16 random hex digits.
pub(crate) fn random_id(prefix: &str) -> String {
    let mut buf = [0u8; 8];
    if getrandom::getrandom(&mut buf).is_err() {
        // Entropy is unavailable only on exotic targets; fall back to the clock.
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        buf = nanos.to_le_bytes();
    }
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}

fn format_in<Tz: TimeZone>(locale: Locale, at: &DateTime<Tz>, with_weekday: bool) -> String {
    let month = locale.month_names()[at.month0() as usize];
    let date = match locale {
        Locale::En => format!("{} {}, {}", month, at.day(), at.year()),
        Locale::Id => format!("{} {} {}", at.day(), month, at.year()),
    };
    if !with_weekday {
        return date;
    }
    let weekday = locale.weekday_names()[at.weekday().num_days_from_monday() as usize];
    format!("{weekday}, {date}")
}

fn format_created_at(locale: Locale, created_at: &str, with_weekday: bool) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(at) => format_in(locale, &at.with_timezone(&Local), with_weekday),
        Err(_) => String::new(),
    }
}

/// "July 28, 2022" / "28 Juli 2022" in the viewer's timezone.
/// Unparseable timestamps render as an empty string.
pub(crate) fn format_date(locale: Locale, created_at: &str) -> String {
    format_created_at(locale, created_at, false)
}

/// Like [`format_date`] with the weekday in front.
pub(crate) fn format_date_long(locale: Locale, created_at: &str) -> String {
    format_created_at(locale, created_at, true)
}

/// Bodies over 100 characters are cut to 97 plus an ellipsis.
pub(crate) fn body_preview(body: &str) -> String {
    if body.chars().count() > PREVIEW_MAX_CHARS {
        let kept: String = body.chars().take(PREVIEW_KEEP_CHARS).collect();
        format!("{kept}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .expect("valid timestamp")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_format_in_english() {
        let at = utc("2022-07-28T10:03:12.594Z");
        assert_eq!(format_in(Locale::En, &at, false), "July 28, 2022");
        assert_eq!(format_in(Locale::En, &at, true), "Thursday, July 28, 2022");
    }

    #[test]
    fn test_format_in_indonesian() {
        let at = utc("2022-07-28T10:03:12.594Z");
        assert_eq!(format_in(Locale::Id, &at, false), "28 Juli 2022");
        assert_eq!(format_in(Locale::Id, &at, true), "Kamis, 28 Juli 2022");
    }

    #[test]
    fn test_format_date_of_garbage_is_empty() {
        assert_eq!(format_date(Locale::En, ""), "");
        assert_eq!(format_date(Locale::En, "yesterday"), "");
    }

    #[test]
    fn test_body_preview_cuts_long_bodies() {
        let short = "a".repeat(100);
        assert_eq!(body_preview(&short), short);

        let long = "b".repeat(101);
        let preview = body_preview(&long);
        assert_eq!(preview.chars().count(), 100);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_random_id_has_prefix_and_differs() {
        let a = random_id("notes");
        let b = random_id("notes");
        assert!(a.starts_with("notes-"));
        assert_eq!(a.len(), "notes-".len() + 16);
        assert_ne!(a, b);
    }

    #[test]
    fn test_now_iso_roundtrips() {
        assert!(DateTime::parse_from_rfc3339(&now_iso()).is_ok());
    }
}
