//! Yes/no questions asked during `init`

use anyhow::Result;
use dialoguer::Confirm;

use crate::output;

/// Asks the user to confirm an action
pub trait Prompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;
}

/// Interactive prompt on the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()?)
    }
}

/// Non-interactive prompt answering every question with its default
#[derive(Debug, Default)]
pub struct AssumeDefaults;

impl Prompter for AssumeDefaults {
    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        output::info(&format!(
            "{question} {}",
            if default { "yes" } else { "no" }
        ));
        Ok(default)
    }
}

/// Pick the prompter for this invocation
pub fn prompter(assume_yes: bool) -> Box<dyn Prompter> {
    if assume_yes {
        Box::new(AssumeDefaults)
    } else {
        Box::new(TerminalPrompter)
    }
}
