use crate::ssh_config::AliasPrompt;
use std::io::{BufRead, Write};

/// Line-based alias confirmation: shows the default and accepts Enter or a replacement.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> AliasPrompt for LinePrompt<R, W> {
    fn confirm_alias(&mut self, default_alias: &str) -> Option<String> {
        write!(self.output, "Alias [{}]: ", default_alias).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        // EOF means the user backed out.
        if self.input.read_line(&mut line).ok()? == 0 {
            return None;
        }

        let answer = line.trim();
        if answer.is_empty() {
            Some(default_alias.to_string())
        } else {
            Some(answer.to_string())
        }
    }
}

#[cfg(test)]
#[path = "../test/cli/prompt.rs"]
mod tests;
