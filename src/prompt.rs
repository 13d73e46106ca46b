use crate::error::Error;

use dialoguer::{Input, theme::ColorfulTheme};
use std::io::{BufRead, Write};

/// Abstraction over a single-line text prompt.
///
/// The session only ever asks for one raw line at a time and interprets it
/// itself, which keeps the quit and trimming rules testable without a
/// terminal.
pub trait LinePrompter {
    /// Shows `prompt` and returns the line the operator entered, without its
    /// line terminator.
    ///
    /// # Returns
    /// `Ok(String)` with the raw line (possibly empty), [`Error::EndOfInput`]
    /// when input is exhausted, or [`Error::Prompt`] on any other failure.
    fn read_line(&mut self, prompt: &str) -> Result<String, Error>;
}

/// Terminal implementation of [`LinePrompter`] using `dialoguer::Input`.
///
/// Uses the `ColorfulTheme`; empty answers are accepted because an empty
/// reply is meaningful at the "same date?" question.
pub struct DialoguerLinePrompter;

impl LinePrompter for DialoguerLinePrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        let theme = ColorfulTheme::default();
        let input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        match input.interact_text() {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::Prompt(e.to_string())),
        }
    }
}

/// [`LinePrompter`] over any buffered reader, used when stdin is not a
/// terminal (piped or scripted input).
pub struct ReaderLinePrompter<R> {
    reader: R,
}

impl<R: BufRead> ReaderLinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LinePrompter for ReaderLinePrompter<R> {
    fn read_line(&mut self, prompt: &str) -> Result<String, Error> {
        print!("{} ", prompt);
        std::io::stdout()
            .flush()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        let mut line = String::new();
        let n = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::Prompt(e.to_string()))?;
        if n == 0 {
            return Err(Error::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reader_strips_line_terminator_only() {
        let mut p = ReaderLinePrompter::new(Cursor::new("  n \n3\r\n"));
        assert_eq!(p.read_line("first").unwrap(), "  n ");
        assert_eq!(p.read_line("second").unwrap(), "3");
    }

    #[test]
    fn reader_returns_last_line_without_newline() {
        let mut p = ReaderLinePrompter::new(Cursor::new("q"));
        assert_eq!(p.read_line("prompt").unwrap(), "q");
    }

    #[test]
    fn reader_keeps_empty_lines() {
        let mut p = ReaderLinePrompter::new(Cursor::new("\n"));
        assert_eq!(p.read_line("prompt").unwrap(), "");
    }

    #[test]
    fn reader_reports_end_of_input() {
        let mut p = ReaderLinePrompter::new(Cursor::new(""));
        assert!(matches!(p.read_line("prompt"), Err(Error::EndOfInput)));
    }
}
