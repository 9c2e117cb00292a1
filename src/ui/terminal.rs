//! Interactive terminal UI.

use std::io::Write;

use console::Term;

use crate::error::Result;

use super::{confirm_on, EddyTheme, NonInteractiveUI, Prompt, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: EddyTheme,
    assume_yes: bool,
}

impl TerminalUI {
    /// Create a new terminal UI. `assume_yes` answers every prompt with yes.
    pub fn new(theme: EddyTheme, assume_yes: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            assume_yes,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        if self.assume_yes {
            writeln!(self.term, "{} {}", prompt.question, self.theme.dim.apply_to("yes")).ok();
            return Ok(true);
        }
        confirm_on(prompt, &self.term)
    }
}

/// Pick the terminal UI when attached to a TTY, the non-interactive one otherwise.
pub fn create_ui(assume_yes: bool, no_color: bool) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && Term::stderr().is_term() {
        Box::new(TerminalUI::new(EddyTheme::detect(no_color), assume_yes))
    } else {
        Box::new(NonInteractiveUI::new(assume_yes))
    }
}
