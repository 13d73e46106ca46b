//! Builds and runs the `git filter-branch` call that rewrites one commit's
//! dates.

use crate::error::Error;
use crate::git::{Backend, command_line};

use tracing::info;

/// Backup ref namespace assumed when the current branch is unknown.
const DEFAULT_HEAD_REF: &str = "refs/heads/master";

/// New dates for the commit identified by `hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    pub hash: String,
    pub author_date: String,
    pub committer_date: String,
}

impl RewriteRequest {
    /// The `--env-filter` script: overrides both dates only while git is
    /// rewriting the commit whose id equals `hash`.
    pub fn env_filter(&self) -> String {
        format!(
            "if [ $GIT_COMMIT = {} ]\nthen\nexport GIT_AUTHOR_DATE=\"{}\"\nexport GIT_COMMITTER_DATE=\"{}\"\nfi",
            self.hash, self.author_date, self.committer_date
        )
    }

    /// Full argument list for the rewrite.
    ///
    /// No revision range is given: git walks the whole history of HEAD and
    /// the script itself picks out the target commit.
    pub fn filter_branch_args(&self) -> Vec<String> {
        vec![
            "filter-branch".to_string(),
            "-f".to_string(),
            "--env-filter".to_string(),
            self.env_filter(),
        ]
    }
}

/// Runs the rewrite and returns git's output with trailing newlines removed.
///
/// # Errors
///
/// A non-zero exit becomes [`Error::Backend`] whose message carries both the
/// exit status and everything git printed.
pub fn execute<B: Backend + ?Sized>(backend: &B, request: &RewriteRequest) -> Result<String, Error> {
    let args = request.filter_branch_args();
    info!(hash = %request.hash, "rewriting commit dates");

    let out = backend.run(&args)?;
    if !out.success {
        return Err(Error::Backend {
            command: command_line(&args[..3]),
            status: out.status,
            output: out.combined.trim_end().to_string(),
        });
    }
    Ok(out.combined.trim_end_matches('\n').to_string())
}

/// Reminder printed after a successful rewrite; `filter-branch` keeps the
/// pre-rewrite history under `refs/original/`.
pub fn cleanup_reminder(head_ref: Option<&str>) -> String {
    format!(
        "\nRemove old refs using\n\n\tgit update-ref -d refs/original/{}\n\nSee https://stackoverflow.com/a/7654880 for details\n",
        head_ref.unwrap_or(DEFAULT_HEAD_REF)
    )
}
