//! Memo records, hashtag extraction, and relative timestamps.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A short note posted to the memo board.
pub struct Memo {
    /// Store-assigned identifier.
    pub id: String,
    /// Text as typed, including the hashtags.
    pub content: String,
    /// Tags found in `content`, without the leading `#`.
    pub hashtags: Vec<String>,
    /// When the memo was posted.
    pub created_at: DateTime<Utc>,
}

const HASHTAG_PATTERN: &str = r"#([\p{L}\p{N}_]+)";

fn hashtag_regex() -> Option<&'static Regex> {
    static HASHTAG: OnceLock<Option<Regex>> = OnceLock::new();
    HASHTAG
        .get_or_init(|| Regex::new(HASHTAG_PATTERN).ok())
        .as_ref()
}

/// Collects every `#tag` in `text`, in order of appearance.
///
/// A tag is `#` followed by one or more Unicode letters, numbers, or underscores, so
/// `#rust_lang` and `#学习` both count while a lone `#` does not. Combining marks end a tag.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let Some(regex) = hashtag_regex() else {
        return Vec::new();
    };
    regex
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|tag| tag.as_str().to_string())
        .collect()
}

/// Human label for how long ago `created_at` was, relative to `now`.
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    created_at.format("%B %-d, %Y at %I:%M %p").to_string()
}
