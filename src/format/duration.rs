// ============================================================================
// Duration Formatting
// Clock-style and sparse human-readable renderings of a second count
// ============================================================================

/// Format a duration in seconds as zero-padded `HH:MM:SS`.
///
/// Hours are unbounded; durations past 99 hours simply widen the field.
///
/// # Example
/// ```
/// use numfmt::format::format_duration;
///
/// assert_eq!(format_duration(3661), "01:01:01");
/// assert_eq!(format_duration(360000), "100:00:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a duration in seconds as a sparse `Nh Nm Ns` string.
///
/// Zero components are skipped, except that the seconds component is kept
/// when it is the only one, so a zero duration renders as `"0s"` rather
/// than an empty string.
///
/// # Example
/// ```
/// use numfmt::format::format_duration_short;
///
/// assert_eq!(format_duration_short(3661), "1h 1m 1s");
/// assert_eq!(format_duration_short(3600), "1h");
/// assert_eq!(format_duration_short(0), "0s");
/// ```
pub fn format_duration_short(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    if secs > 0 || out.is_empty() {
        out.push_str(&format!("{secs}s"));
    }
    out.trim().to_string()
}
