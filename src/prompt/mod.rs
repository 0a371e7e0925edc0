// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive questions.
//!
//! ```text
//! Prompt (trait)
//!   confirm(question) -> bool     "yes", trimmed, any case
//!   ask(question)     -> String   trimmed
//!
//! ConsolePrompt<R: BufRead, W: Write>   stdin/stdout, or any reader/writer
//! PresetPrompt<P>                      canned answers, falls back to P
//! ```

use std::io::{BufRead, Stdout, Write};

use crate::error::{PromptError, Result};

/// Source of answers to yes/no and free-text questions.
pub trait Prompt {
    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if no answer can be read.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Ask for a free-text answer, returned with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if no answer can be read.
    fn ask(&mut self, question: &str) -> Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        (**self).confirm(question)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        (**self).ask(question)
    }
}

/// Only `yes`, ignoring surrounding whitespace and ASCII case, is affirmative.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Prompt that writes questions to `output` and reads one line per answer
/// from `input`.
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl ConsolePrompt<std::io::StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, question: &str, suffix: &str) -> Result<String> {
        write!(self.output, "{question}{suffix}").map_err(PromptError::from)?;
        self.output.flush().map_err(PromptError::from)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(PromptError::from)?;
        if read == 0 {
            return Err(PromptError::Closed {
                question: question.to_string(),
            }
            .into());
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.read_answer(question, " (yes/no): ")?;
        Ok(is_affirmative(&answer))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        let answer = self.read_answer(question, ": ")?;
        Ok(answer.trim().to_string())
    }
}

/// Prompt with answers fixed up front, e.g. from command-line flags.
///
/// Questions without a preset answer go to the wrapped prompt.
#[derive(Debug)]
pub struct PresetPrompt<P> {
    inner: P,
    confirm: Option<bool>,
    answer: Option<String>,
}

impl<P: Prompt> PresetPrompt<P> {
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            confirm: None,
            answer: None,
        }
    }

    /// Answer every yes/no question with `confirm`, when set.
    #[must_use]
    pub fn with_confirm(mut self, confirm: Option<bool>) -> Self {
        self.confirm = confirm;
        self
    }

    /// Answer every free-text question with `answer`, when set.
    #[must_use]
    pub fn with_answer(mut self, answer: Option<String>) -> Self {
        self.answer = answer.map(|a| a.trim().to_string());
        self
    }
}

impl<P: Prompt> Prompt for PresetPrompt<P> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.confirm {
            Some(confirm) => Ok(confirm),
            None => self.inner.confirm(question),
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        match &self.answer {
            Some(answer) => Ok(answer.clone()),
            None => self.inner.ask(question),
        }
    }
}
