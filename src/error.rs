use std::{io, num::ParseIntError};

/// Every way a redate run can fail.
///
/// None of these are recovered from: the CLI prints the error (including any
/// captured git output) and exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `git log` line did not split into exactly five fields.
    #[error("malformed log line ({fields} fields, expected 5): {line:?}")]
    MalformedRecord { line: String, fields: usize },

    /// The backend process could not be started at all.
    #[error("failed to execute `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The backend ran but exited non-zero.
    #[error("`{command}` failed ({status}): {output}")]
    Backend {
        command: String,
        status: String,
        output: String,
    },

    /// The revision selection was neither `q` nor a non-negative integer.
    #[error("invalid revision {input:?}: {source}")]
    InvalidRevision {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("unexpected end of input")]
    EndOfInput,

    #[error("`git` not found in PATH: {0}")]
    GitNotFound(#[source] which::Error),
}
