use crate::api::Article;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An article reduced to the lines the UI shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    /// `None` when the article has no timestamp at all
    pub timestamp: Option<String>,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub url: String,
    pub publisher: Option<String>,
    pub author: Option<String>,
}

pub fn format_article(article: &Article) -> DisplayRecord {
    DisplayRecord {
        timestamp: article.published_at.as_deref().map(format_published_at),
        title: article.title.clone(),
        description: article.description.clone().unwrap_or_default(),
        image_url: article.image_url.clone().filter(|u| !u.is_empty()),
        url: article.url.clone(),
        publisher: article.publisher().map(str::to_string),
        author: article.author.clone().filter(|a| !a.is_empty()),
    }
}

/// `YYYY-MM-DD HH:MM:SS` in the timestamp's own offset, or `raw` untouched
/// if it isn't ISO-8601.
pub fn format_published_at(raw: &str) -> String {
    parse_iso8601(raw)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Wall-clock time of an ISO-8601 timestamp. A trailing `Z` reads as `+00:00`.
fn parse_iso8601(raw: &str) -> Option<NaiveDateTime> {
    // chrono tolerates padding before numeric fields and a lowercase `z`; ISO-8601 here doesn't
    if raw.trim() != raw || raw.ends_with('z') {
        return None;
    }
    let s = match raw.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => raw.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(&s, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len < 3 {
        return s.chars().take(max_len).collect();
    }
    if s.chars().count() > max_len {
        let end = s
            .char_indices()
            .nth(max_len - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}

/// Wrap text to lines of at most `width` characters, breaking at word boundaries.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
