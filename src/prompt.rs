// ============================================================================
// src/prompt.rs – Where numeric menu answers come from
// ============================================================================

use anyhow::{Context, Result};
use console::Style;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, Write};

/// Source of menu answers. `Ok(None)` means input is exhausted.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads from the controlling terminal via dialoguer, or line-by-line from
/// stdin when it is a pipe (dialoguer refuses non-terminals).
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stderr),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.interactive {
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("read menu choice")?;
            return Ok(Some(answer));
        }

        print!("{}", Style::new().bold().apply_to(format!("{prompt}: ")));
        io::stdout().flush().context("flush prompt")?;
        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read menu choice")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Parse a menu answer the way a user types it: surrounding whitespace is
/// ignored, anything that is not a plain integer is `None`.
pub fn parse_choice(answer: &str) -> Option<u32> {
    answer.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_choice;

    #[test]
    fn accepts_padded_integers() {
        assert_eq!(parse_choice(" 1\n"), Some(1));
        assert_eq!(parse_choice("2"), Some(2));
        assert_eq!(parse_choice("7"), Some(7));
    }

    #[test]
    fn rejects_words_and_blanks() {
        assert_eq!(parse_choice("one"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("1.0"), None);
        assert_eq!(parse_choice("-"), None);
    }
}
