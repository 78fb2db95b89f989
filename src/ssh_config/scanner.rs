//! Line classification for SSH config files.

/// One line of an SSH config file after tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScannedLine {
    /// Blank line or comment.
    Ignore,
    Directive { keyword: String, fields: Vec<String> },
}

impl ScannedLine {
    /// The directive value: fields rejoined with single spaces.
    pub(crate) fn value(fields: &[String]) -> String {
        fields.join(" ").trim().to_string()
    }
}

pub(crate) fn scan_line(line: &str) -> ScannedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return ScannedLine::Ignore;
    }

    let mut tokens = trimmed.split_whitespace();
    let Some(first) = tokens.next() else {
        return ScannedLine::Ignore;
    };
    let mut fields: Vec<String> = tokens.map(str::to_string).collect();

    // `Keyword=value`, `Keyword= value` and `Keyword = value` all name the same directive.
    let keyword = match first.split_once('=') {
        Some((keyword, rest)) => {
            if !rest.is_empty() {
                fields.insert(0, rest.to_string());
            }
            keyword
        }
        None => {
            if let Some(head) = fields.first_mut()
                && let Some(rest) = head.strip_prefix('=')
            {
                if rest.is_empty() {
                    fields.remove(0);
                } else {
                    *head = rest.to_string();
                }
            }
            first
        }
    };

    if keyword.is_empty() {
        return ScannedLine::Ignore;
    }

    ScannedLine::Directive {
        keyword: keyword.to_lowercase(),
        fields,
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/scanner.rs"]
mod tests;
