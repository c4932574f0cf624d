//! Operator I/O Seams
//!
//! The session reads operator input through an `InputSource` and renders every
//! line of output through a `Notifier`. Console-backed implementations live in
//! the service crate; the scripted and recording versions here drive tests.

use crate::error::InputError;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;

/// Yields one line of operator-entered text per request.
#[async_trait]
pub trait InputSource: Send {
    /// Shows `prompt` and waits for the next line. The returned text has its
    /// line terminator removed and is otherwise untouched.
    async fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Accepts ordered lines of output for the operator.
pub trait Notifier: Send {
    fn notify(&mut self, line: &str);
}

/// An input source that replays a fixed list of lines.
///
/// Once the script runs out, reads fail with `InputError::Closed`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        let line = self.lines.pop_front().ok_or(InputError::Closed)?;
        Ok(line)
    }
}

/// A notifier that keeps every line it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    lines: Vec<String>,
}

impl RecordingNotifier {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
