// Counters published by the external status feed

use serde::Serialize;
use serde_json::Value;

/// Bot-style counters read from the status feed. `Default` is the all-zero
/// fallback used whenever the feed cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounters {
    pub users: u64,
    pub guilds: u64,
    pub uptime: u64,
    pub commands_total: u64,
    pub commands_ok: u64,
    pub commands_error: u64,
}

impl StatusCounters {
    /// Builds counters from an untrusted JSON body. Every field is optional;
    /// anything that does not coerce to a number becomes 0.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| coerce_count(body.get(name));
        Self {
            users: field("users"),
            guilds: field("guilds"),
            uptime: field("uptime"),
            commands_total: field("commands_total"),
            commands_ok: field("commands_ok"),
            commands_error: field("commands_error"),
        }
    }
}

/// Loose numeric coercion of a feed field, truncated to a non-negative integer.
pub(crate) fn coerce_count(value: Option<&Value>) -> u64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else if let Some(n) = parse_radix(s) {
                n as f64
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() && n > 0.0 {
        // `as` saturates at u64::MAX for huge values
        n.trunc() as u64
    } else {
        0
    }
}

/// `0x`, `0o` and `0b` literals, unsigned only.
fn parse_radix(s: &str) -> Option<u64> {
    let prefix = s.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    // from_str_radix would accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(0);
    }
    Some(u64::from_str_radix(digits, radix).unwrap_or(u64::MAX))
}
