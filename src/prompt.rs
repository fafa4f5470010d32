//! Yes/no confirmation
//!
//! The installer asks one question before editing a startup file. It goes
//! through [`Confirm`] so the terminal prompt can be swapped for `--yes`
//! or a scripted answer.

use std::io::{self, BufRead, Write};

use crate::theme::Theme;

/// Something that can answer a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers every question with yes (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Fixed answer, for tests and embedding.
#[derive(Debug, Clone, Copy)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

/// Interactive prompt on the controlling terminal.
///
/// The question goes to stderr; the answer is read from stdin. When stdin
/// is not a TTY nothing is read and the answer is no.
#[derive(Debug, Clone)]
pub struct TerminalPrompt {
    theme: Theme,
}

impl TerminalPrompt {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn ask(&self, prompt: &str) -> io::Result<bool> {
        let mut stderr = io::stderr();
        write!(stderr, "{} [y/N] ", prompt)?;
        stderr.flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(is_yes(&input))
    }
}

impl Confirm for TerminalPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        if !atty::is(atty::Stream::Stdin) {
            eprintln!(
                "{}",
                self.theme
                    .secondary_text("Non-interactive mode: use --yes to apply changes automatically")
            );
            return false;
        }

        match self.ask(prompt) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

/// Whether a typed response means yes.
pub fn is_yes(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}
