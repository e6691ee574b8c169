/// Current wall-clock instant in milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Next identifier derived from `now`, bumped past `latest` so identifiers
/// stay strictly increasing even when several are minted within one millisecond.
pub fn next_identity(now: i64, latest: Option<i64>) -> i64 {
    match latest {
        Some(latest) if latest >= now => latest.saturating_add(1),
        _ => now,
    }
}
