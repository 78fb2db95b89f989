//! Fuzzy host filtering.
//!
//! Matching is a plain yes/no subsequence test. Filtered results keep the
//! order of the loaded entries; nothing is ranked.

use crate::ssh_config::HostEntry;

/// Returns true if the characters of `query` appear in `text` in order.
///
/// Comparison is case-insensitive and works on chars, not bytes. A blank query
/// matches everything.
pub fn matches(query: &str, text: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    let mut needle = query.chars().peekable();

    for text_char in text.chars().flat_map(char::to_lowercase) {
        match needle.peek() {
            Some(&wanted) if wanted == text_char => {
                needle.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    needle.peek().is_none()
}

/// Entries whose search text matches `query`, in their original order.
pub fn filter_entries<'a>(entries: &'a [HostEntry], query: &str) -> Vec<&'a HostEntry> {
    entries.iter().filter(|entry| matches(query, &entry.search_text())).collect()
}

#[cfg(test)]
#[path = "test/search.rs"]
mod tests;
