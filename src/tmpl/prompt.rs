use crate::error::{Result, TmplError};
use std::io::{self, BufRead, Write};

/// Interactive input used when the command line leaves something out.
///
/// Reads block until a line arrives; there is no timeout. A closed input with
/// no data is `TmplError::NoInput`.
pub trait Prompter {
    /// Prints `question` and returns the next line of input, without its line ending.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Prints a heading followed by one item per line.
    fn show(&mut self, heading: &str, items: &[&str]) -> Result<()>;
}

/// Prompter over any line reader and writer; `LinePrompter::stdio()` in the binary.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TmplError::NoInput);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn show(&mut self, heading: &str, items: &[&str]) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", heading)?;
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Prompter that replays canned answers and records what it was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub questions: Vec<String>,
        pub shown: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Self::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.questions.push(question.to_string());
            self.answers.pop_front().ok_or(TmplError::NoInput)
        }

        fn show(&mut self, _heading: &str, items: &[&str]) -> Result<()> {
            self.shown.extend(items.iter().map(|s| s.to_string()));
            Ok(())
        }
    }
}
