//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use super::{parse_answer, Prompt, UserInterface};
use crate::error::Result;

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "EDDY_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `EDDY_PROMPT_<KEY>` overrides, then from
/// `--yes`, then with the prompt's default.
pub struct NonInteractiveUI {
    assume_yes: bool,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    pub fn new(assume_yes: bool) -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();
        Self {
            assume_yes,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(assume_yes: bool, overrides: HashMap<String, String>) -> Self {
        Self {
            assume_yes,
            env_overrides: overrides,
        }
    }

    fn override_for(&self, key: &str) -> Option<bool> {
        let env_key = format!(
            "{}{}",
            PROMPT_ENV_PREFIX,
            key.to_uppercase().replace(['-', ' '], "_")
        );
        self.env_overrides
            .get(&env_key)
            .and_then(|value| parse_answer(value))
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", title);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let answer = self
            .override_for(&prompt.key)
            .unwrap_or(self.assume_yes || prompt.default);
        println!("{} {}", prompt.question, if answer { "yes" } else { "no" });
        Ok(answer)
    }
}
