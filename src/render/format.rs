// Text formatting for gauges, counters and uptime

/// `round(v)%`, e.g. `37.6` -> `"38%"`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Formats a feed uptime as `{h}h {m}m {s}s`.
///
/// Values below 1000 are taken as seconds, anything else as milliseconds.
/// Hours are not rolled over into days.
pub fn format_uptime(raw: u64) -> String {
    let ms = if raw < 1000 { raw * 1000 } else { raw };
    let total = ms / 1000;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h}h {m}m {s}s")
}

pub const CMD_TOTAL_PREFIX: &str = "📈 ";
pub const CMD_OK_PREFIX: &str = "🟢 ";
pub const CMD_ERROR_PREFIX: &str = "🔴 ";

pub fn prefixed(prefix: &str, value: u64) -> String {
    format!("{prefix}{value}")
}
