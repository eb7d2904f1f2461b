use std::io::{self, BufRead, Write};

use crate::interview::SessionSettings;

/// Line-based interaction with the student.
pub trait Console {
    /// Prints a block of text.
    fn say(&mut self, text: &str);

    /// Shows `prompt` and blocks for one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// stdin/stdout console.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, text: &str) {
        println!("{text}");
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// What the student's line means to the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(String),
    Skip,
    Quit,
}

impl SessionSettings {
    /// Exact match on a trimmed exit token, ignoring case.
    pub fn is_exit(&self, input: &str) -> bool {
        let input = input.trim().to_lowercase();
        self.exit_tokens.iter().any(|t| t.to_lowercase() == input)
    }

    /// Substring match on any skip keyword, ignoring case.
    pub fn is_skip(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.skip_keywords
            .iter()
            .any(|k| input.contains(&k.to_lowercase()))
    }

    /// Classifies a console line. End of input counts as quitting.
    pub fn classify(&self, input: Option<String>) -> Reply {
        match input {
            None => Reply::Quit,
            Some(line) if self.is_exit(&line) => Reply::Quit,
            Some(line) if self.is_skip(&line) => Reply::Skip,
            Some(line) => Reply::Answer(line.trim().to_string()),
        }
    }
}
