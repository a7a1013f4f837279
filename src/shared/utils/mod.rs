pub mod email_validator;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// Current UTC time in the fixed-width form stored in every timestamp column.
///
/// All timestamps share the `YYYY-MM-DDTHH:MM:SSZ` layout so that range
/// filters can compare them as plain strings.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Lowercase, hyphen-separated form of `text`, used to prepopulate slugs.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '_' || c == '-' || c.is_whitespace() {
            pending_dash = true;
        }
    }

    slug
}

pub fn is_valid_slug(slug: &str) -> bool {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern is valid"))
        .is_match(slug)
}
