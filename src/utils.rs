use chrono::DateTime;

/// Return the value of the first tag starting with `prefix`.
///
/// The value is everything after the first colon of the matching tag, so
/// `extract_tag_value(&tags, "pod_name:")` on `"pod_name:web-7f9c"` yields
/// `"web-7f9c"`. Later matches are ignored.
pub fn extract_tag_value<'a, S: AsRef<str>>(tags: &'a [S], prefix: &str) -> Option<&'a str> {
    tags.iter()
        .map(AsRef::<str>::as_ref)
        .find(|tag| tag.starts_with(prefix))
        .and_then(|tag| tag.split_once(':').map(|(_, value)| value))
}

/// Relative `from`/`to` pair covering the trailing `hours`
pub fn trailing_window(hours: i64) -> (String, String) {
    (format!("now-{}h", hours), "now".to_string())
}

/// Convert timestamp to human-readable format
pub fn format_timestamp(timestamp: i64) -> String {
    if let Some(dt) = DateTime::from_timestamp(timestamp, 0) {
        dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    } else {
        format!("Invalid timestamp: {}", timestamp)
    }
}
