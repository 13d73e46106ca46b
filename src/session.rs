//! The interactive redate session.
//!
//! The session is a strictly forward state machine:
//!
//! 1. [`State::ListHistory`] prints the numbered log.
//! 2. [`State::SelectRevision`] reads the offset from `HEAD`.
//! 3. [`State::ConfirmSameDate`] asks whether both dates get the same value.
//! 4. [`State::CollectAuthorDate`] reads the new author date.
//! 5. [`State::CollectCommitterDate`] reads the new committer date, unless
//!    the answer to 3 made it equal to the author date.
//!
//! Input handling is pure ([`State::advance`]); [`run`] performs the
//! listing, the lookups and the rewrite between prompts. Typing `q` at any
//! prompt ends the run before anything else is executed.

use crate::banner::{DATE_FORMATS, commit_lines, print_framed};
use crate::config::Config;
use crate::error::Error;
use crate::git::Backend;
use crate::history::{CommitDates, HistoryQuery};
use crate::log_line::{FIELD_SEPARATOR, LogRecord};
use crate::prompt::LinePrompter;
use crate::rewrite::{self, RewriteRequest};

use console::Color;
use tracing::debug;

/// Sentinel that ends the session at any prompt.
pub const QUIT: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    ListHistory,
    SelectRevision,
    ConfirmSameDate {
        commit: CommitDates,
    },
    CollectAuthorDate {
        commit: CommitDates,
        same_date: bool,
    },
    CollectCommitterDate {
        commit: CommitDates,
        author_date: String,
    },
}

/// What the driver does after a state consumed its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Next(State),
    /// A revision offset was chosen; its commit must be looked up before
    /// entering [`State::ConfirmSameDate`].
    Resolve(usize),
    Rewrite(RewriteRequest),
    Quit,
}

/// How a session ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    Rewritten(RewriteRequest),
}

impl State {
    /// Question shown before reading input in this state.
    pub fn prompt(&self) -> &'static str {
        match self {
            State::ListHistory => "",
            State::SelectRevision => "Which previous commit? (q to quit)",
            State::ConfirmSameDate { .. } => {
                "Are GIT_AUTHOR_DATE and GIT_COMMITTER_DATE the same? (y/n/q)"
            }
            State::CollectAuthorDate { .. } => "new GIT_AUTHOR_DATE",
            State::CollectCommitterDate { .. } => "new GIT_COMMITTER_DATE",
        }
    }

    /// Consumes one line of operator input.
    ///
    /// # Errors
    ///
    /// Only [`State::SelectRevision`] can fail, with
    /// [`Error::InvalidRevision`] when the line is neither `q` nor a
    /// non-negative integer.
    pub fn advance(self, input: &str) -> Result<Step, Error> {
        let step = match self {
            State::ListHistory => Step::Next(State::SelectRevision),

            State::SelectRevision => {
                if input == QUIT {
                    return Ok(Step::Quit);
                }
                let rev = input
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| Error::InvalidRevision {
                        input: input.to_string(),
                        source: e,
                    })?;
                Step::Resolve(rev)
            }

            State::ConfirmSameDate { commit } => match input.trim() {
                QUIT => Step::Quit,
                "n" | "N" => Step::Next(State::CollectAuthorDate {
                    commit,
                    same_date: false,
                }),
                _ => Step::Next(State::CollectAuthorDate {
                    commit,
                    same_date: true,
                }),
            },

            State::CollectAuthorDate { commit, same_date } => {
                if input == QUIT {
                    return Ok(Step::Quit);
                }
                let author_date = input.trim().to_string();
                if same_date {
                    Step::Rewrite(RewriteRequest {
                        hash: commit.hash,
                        committer_date: author_date.clone(),
                        author_date,
                    })
                } else {
                    Step::Next(State::CollectCommitterDate {
                        commit,
                        author_date,
                    })
                }
            }

            State::CollectCommitterDate {
                commit,
                author_date,
            } => {
                if input == QUIT {
                    return Ok(Step::Quit);
                }
                Step::Rewrite(RewriteRequest {
                    hash: commit.hash,
                    author_date,
                    committer_date: input.trim().to_string(),
                })
            }
        };
        Ok(step)
    }
}

/// Runs one full session: list, select, collect dates, rewrite.
///
/// Every backend or input error aborts the session immediately and is
/// returned to the caller; nothing is retried.
pub fn run<B, P>(config: &Config, backend: &B, prompter: &mut P) -> Result<Outcome, Error>
where
    B: Backend + ?Sized,
    P: LinePrompter,
{
    let history = HistoryQuery::new(backend);
    let mut state = State::ListHistory;

    loop {
        let step = if state == State::ListHistory {
            print_history(&history, config)?;
            state.advance("")?
        } else {
            let input = prompter.read_line(state.prompt())?;
            state.advance(&input)?
        };

        match step {
            Step::Next(next) => state = next,
            Step::Resolve(rev) => {
                debug!(rev, "resolving selected revision");
                let commit = history.commit_dates(rev)?;
                print_framed(&commit_lines(&commit), Color::Yellow);
                println!("{}", DATE_FORMATS);
                state = State::ConfirmSameDate { commit };
            }
            Step::Rewrite(request) => {
                let output = rewrite::execute(backend, &request)?;
                println!("{}", output);
                print!("{}", rewrite::cleanup_reminder(history.head_ref().as_deref()));
                return Ok(Outcome::Rewritten(request));
            }
            Step::Quit => {
                println!("Quitting");
                return Ok(Outcome::Quit);
            }
        }
    }
}

/// Prints the recent history, each line prefixed with its offset from `HEAD`.
fn print_history<B: Backend + ?Sized>(
    history: &HistoryQuery<'_, B>,
    config: &Config,
) -> Result<(), Error> {
    let lines = history.list_recent(config.limit, config.skip)?;
    for (i, line) in lines.iter().enumerate() {
        let record = LogRecord::parse(line, FIELD_SEPARATOR)?;
        println!("[{}] {}", config.skip + i, record);
    }
    Ok(())
}
