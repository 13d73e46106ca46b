use crate::error::Error;

use console::Style;
use std::fmt;

/// Separator placed between fields by the `git log --format` string.
///
/// A commit subject that itself contains this text yields more than five
/// fields and is reported as [`Error::MalformedRecord`].
pub const FIELD_SEPARATOR: &str = "@#@";

/// One history entry as shown in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub hash: String,
    pub relative_date: String,
    pub message: String,
    pub author: String,
    pub ref_tags: String,
}

impl LogRecord {
    /// Splits `line` on `sep` into hash, date, message, author and tags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] unless the line holds exactly five
    /// fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use git_redate::log_line::LogRecord;
    ///
    /// let r = LogRecord::parse("1234567#2 days ago#Fix#Ann#", "#").unwrap();
    /// assert_eq!(r.author, "Ann");
    /// assert_eq!(r.ref_tags, "");
    /// ```
    pub fn parse(line: &str, sep: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = line.split(sep).collect();

        match fields.as_slice() {
            [hash, date, message, author, tags] => Ok(Self {
                hash: hash.to_string(),
                relative_date: date.to_string(),
                message: message.to_string(),
                author: author.to_string(),
                ref_tags: tags.to_string(),
            }),
            _ => Err(Error::MalformedRecord {
                line: line.to_string(),
                fields: fields.len(),
            }),
        }
    }

    /// Renders the record as `<hash> - (<date>) <message> - <author><tags>`.
    pub fn styled(&self, palette: &Palette) -> String {
        format!(
            "{} - ({}) {} - {}{}",
            palette.hash.apply_to(&self.hash),
            palette.date.apply_to(&self.relative_date),
            self.message,
            palette.author.apply_to(&self.author),
            palette.tags.apply_to(&self.ref_tags),
        )
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.styled(&Palette::default()))
    }
}

/// Per-field styles used when rendering a [`LogRecord`].
#[derive(Debug, Clone)]
pub struct Palette {
    pub hash: Style,
    pub date: Style,
    pub author: Style,
    pub tags: Style,
}

impl Palette {
    /// Same styles as [`Palette::default`], emitted even when stdout is not a
    /// terminal.
    pub fn forced() -> Self {
        let p = Self::default();
        Self {
            hash: p.hash.force_styling(true),
            date: p.date.force_styling(true),
            author: p.author.force_styling(true),
            tags: p.tags.force_styling(true),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hash: Style::new().blue().bold(),
            date: Style::new().green().bold(),
            author: Style::new().dim(),
            tags: Style::new().yellow().bold(),
        }
    }
}
