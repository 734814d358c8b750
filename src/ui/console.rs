use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::style::Stylize;

/// How a message line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Error,
}

/// Line-oriented terminal seam. Everything the session shows or asks goes
/// through here, which is what lets tests script a whole session.
pub trait Console {
    /// Show `prompt` (without adding a newline) and read one line with its
    /// terminator removed. `Ok(None)` means input is closed.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one message line.
    fn emit(&mut self, tone: Tone, text: &str) -> io::Result<()>;

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.emit(Tone::Plain, text)
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        self.emit(Tone::Success, text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        self.emit(Tone::Error, text)
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// The real terminal: stdin for answers, stdout for everything else. Colour is
/// only used when stdout is a terminal.
pub struct StdConsole {
    colored: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            colored: io::stdout().is_terminal(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn emit(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match (self.colored, tone) {
            (true, Tone::Success) => writeln!(stdout, "{}", text.green()),
            (true, Tone::Error) => writeln!(stdout, "{}", text.red()),
            _ => writeln!(stdout, "{text}"),
        }
    }
}

/// Console fed from a fixed list of answers, recording everything shown.
/// Input closes once the answers run out.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Prompts, answers and messages in the order they happened.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Answers that were never asked for.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push_str(prompt);
        let answer = self.answers.pop_front();
        if let Some(answer) = &answer {
            self.transcript.push_str(answer);
        }
        self.transcript.push('\n');
        Ok(answer)
    }

    fn emit(&mut self, _tone: Tone, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }
}
