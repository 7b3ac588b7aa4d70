// ============================================================================
// src/testutil.rs – Recording shell and scripted prompter for flow tests
// ============================================================================

use std::collections::VecDeque;

use anyhow::Result;

use crate::cmd::shell::Shell;
use crate::error::{self, DockyardError};
use crate::prompt::Prompter;
use crate::ui::UX;

/// Records every line. Each entry in `fail` makes the next matching line
/// exit with status 1 once; list a line twice to fail it twice.
#[derive(Default)]
pub struct ScriptedShell {
    pub issued: Vec<String>,
    fail: Vec<String>,
}

impl ScriptedShell {
    pub fn failing(lines: &[&str]) -> Self {
        Self {
            issued: Vec::new(),
            fail: lines.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Shell for ScriptedShell {
    fn exec(&mut self, _ui: &UX, line: &str) -> error::Result<()> {
        self.issued.push(line.to_string());
        if let Some(pos) = self.fail.iter().position(|f| f == line) {
            self.fail.remove(pos);
            return Err(DockyardError::CommandFailed {
                command: line.to_string(),
                status: 1,
            });
        }
        Ok(())
    }
}

/// Hands out canned answers, then reports closed input.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: usize,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            asked: 0,
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.asked += 1;
        Ok(self.answers.pop_front())
    }
}
