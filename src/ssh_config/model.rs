//! SSH config domain models.

/// Label shown for a `Host` line that carried no patterns.
pub const UNNAMED_HOST: &str = "(unnamed)";

/// One parsed `Host` block.
///
/// Every optional field is `None` when the directive never appeared in the
/// block; `Some("")` and `Some(false)` are real values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEntry {
    /// Tokens following `Host`; the first one is the alias used to connect.
    pub patterns: Vec<String>,
    pub host_name: Option<String>,
    pub user: Option<String>,
    pub port: Option<String>,
    pub identity_file: Option<String>,
    pub proxy_jump: Option<String>,
    pub server_alive_interval: Option<i64>,
    pub server_alive_count_max: Option<i64>,
    pub forward_agent: Option<bool>,
    pub identities_only: Option<bool>,
}

impl HostEntry {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            ..Self::default()
        }
    }

    /// The alias passed to `ssh`, if the block named one.
    pub fn primary_alias(&self) -> Option<&str> {
        self.patterns.first().map(String::as_str)
    }

    /// Lower-cased text the fuzzy matcher runs against.
    pub fn search_text(&self) -> String {
        let mut parts = vec![self.patterns.join(" ")];
        for value in [&self.host_name, &self.user, &self.port, &self.identity_file, &self.proxy_jump] {
            parts.push(value.clone().unwrap_or_default());
        }
        if let Some(interval) = self.server_alive_interval {
            parts.push(interval.to_string());
        }
        if let Some(count_max) = self.server_alive_count_max {
            parts.push(count_max.to_string());
        }
        for flag in [self.forward_agent, self.identities_only].into_iter().flatten() {
            parts.push(super::values::format_bool(flag).to_string());
        }
        parts.join(" ").to_lowercase()
    }

    /// Returns `(primary, secondary)` list text for this entry.
    pub fn display_text(&self) -> (String, String) {
        let mut primary = self.primary_alias().unwrap_or(UNNAMED_HOST).to_string();

        match (non_empty(&self.user), non_empty(&self.host_name)) {
            (Some(user), Some(host_name)) => primary.push_str(&format!("  {}@{}", user, host_name)),
            (None, Some(host_name)) => primary.push_str(&format!("  {}", host_name)),
            (Some(user), None) => primary.push_str(&format!("  {}", user)),
            (None, None) => {}
        }
        if let Some(port) = non_empty(&self.port) {
            primary.push_str(&format!(" :{}", port));
        }
        if let Some(proxy_jump) = non_empty(&self.proxy_jump) {
            primary.push_str(&format!(" via {}", proxy_jump));
        }

        let secondary = if self.patterns.len() > 1 { self.patterns[1..].join(" ") } else { String::new() };

        (primary, secondary)
    }

    /// Labelled `(directive, value)` pairs for every set field, in config order.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let mut details = Vec::new();
        let text_fields = [
            ("HostName", &self.host_name),
            ("User", &self.user),
            ("Port", &self.port),
            ("IdentityFile", &self.identity_file),
            ("ProxyJump", &self.proxy_jump),
        ];
        for (label, value) in text_fields {
            if let Some(value) = value {
                details.push((label, value.clone()));
            }
        }
        if let Some(forward_agent) = self.forward_agent {
            details.push(("ForwardAgent", super::values::format_bool(forward_agent).to_string()));
        }
        if let Some(identities_only) = self.identities_only {
            details.push(("IdentitiesOnly", super::values::format_bool(identities_only).to_string()));
        }
        if let Some(interval) = self.server_alive_interval {
            details.push(("ServerAliveInterval", interval.to_string()));
        }
        if let Some(count_max) = self.server_alive_count_max {
            details.push(("ServerAliveCountMax", count_max.to_string()));
        }
        details
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "../test/ssh_config/model.rs"]
mod tests;
