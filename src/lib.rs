//! # git-redate
//!
//! A CLI tool to change the author and committer dates of one commit in the
//! current branch's history.
//!
//! This crate provides functionality to:
//! - List recent commits with colorized one-line summaries
//! - Let the operator pick a commit by its offset from `HEAD`
//! - Prompt for new `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE` values
//! - Rewrite the history with `git filter-branch --env-filter`
//!
//! ## Usage
//!
//! ```bash
//! # List the last 10 commits and pick one
//! git-redate
//!
//! # List 25 commits
//! git-redate -n 25
//! ```
//!
//! Typing `q` at any prompt quits without touching the repository.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`config`] - Startup settings
//! - [`error`] - Error type shared by all modules
//! - [`git`] - Backend process abstraction
//! - [`history`] - Read-only history queries
//! - [`log_line`] - Log line parsing and formatting
//! - [`prompt`] - Line input abstractions
//! - [`session`] - The interactive state machine
//! - [`rewrite`] - `filter-branch` script construction and execution
//! - [`banner`] - Framed terminal output

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod log_line;
pub mod prompt;
pub mod rewrite;
pub mod session;

pub use error::Error;
