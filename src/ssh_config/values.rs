//! Scalar converters for typed SSH config values.

/// Parse an SSH boolean (`yes`/`no`/`true`/`false`/`1`/`0`, any case).
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Render a boolean the way OpenSSH writes it.
pub(crate) fn format_bool(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
#[path = "../test/ssh_config/values.rs"]
mod tests;
