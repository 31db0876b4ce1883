//! Recording fakes for the prompt and shell seams

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use std::cell::RefCell;

use crate::prompt::Prompter;
use crate::shell::Shell;

/// Shell that records commands instead of running them
#[derive(Default)]
pub struct RecordingShell {
    pub commands: RefCell<Vec<(String, Utf8PathBuf)>>,
}

impl RecordingShell {
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|(command, _)| command.clone())
            .collect()
    }
}

impl Shell for RecordingShell {
    fn exec(&self, command: &str, cwd: &Utf8Path) -> Result<()> {
        self.commands
            .borrow_mut()
            .push((command.to_string(), cwd.to_path_buf()));
        Ok(())
    }
}

/// Prompter giving the same answer to every question, recording the questions
pub struct FixedPrompter {
    answer: bool,
    pub questions: RefCell<Vec<String>>,
}

impl FixedPrompter {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            questions: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for FixedPrompter {
    fn confirm(&self, question: &str, _default: bool) -> Result<bool> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.answer)
    }
}
