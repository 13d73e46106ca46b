use crate::error::Error;

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of one backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOutput {
    /// Whether the process exited with status `0`.
    pub success: bool,
    /// Human-readable exit status, e.g. `exit status: 128`.
    pub status: String,
    /// Standard output followed by standard error, decoded lossily.
    pub combined: String,
}

/// Abstraction over the version-control program this tool shells out to.
///
/// Every history query and the final rewrite go through this trait so the
/// session can be driven against a fake in tests.
pub trait Backend {
    /// Runs the backend with `args` and captures its combined output.
    ///
    /// # Returns
    ///
    /// * `Ok(BackendOutput)` whenever the process ran, even if it exited non-zero.
    /// * `Err(Error::Launch)` if the process could not be spawned.
    fn run(&self, args: &[String]) -> Result<BackendOutput, Error>;
}

/// [`Backend`] implementation that spawns a real process (normally `git`).
#[derive(Debug, Clone)]
pub struct GitBackend {
    program: PathBuf,
}

impl GitBackend {
    /// Creates a backend that runs `program` instead of `git`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for GitBackend {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Backend for GitBackend {
    fn run(&self, args: &[String]) -> Result<BackendOutput, Error> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!(program = %self.program.display(), ?args, "running backend");

        let out = cmd.output().map_err(|e| Error::Launch {
            command: format!("{} {}", self.program.display(), args.join(" ")),
            source: e,
        })?;

        let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&out.stderr));

        debug!(status = %out.status, bytes = combined.len(), "backend finished");

        Ok(BackendOutput {
            success: out.status.success(),
            status: out.status.to_string(),
            combined,
        })
    }
}

/// Renders `args` as the git command line used in diagnostics.
pub fn command_line(args: &[String]) -> String {
    format!("git {}", args.join(" "))
}

/// Runs a backend command and returns its output with trailing newlines removed.
///
/// A non-zero exit becomes [`Error::Backend`] carrying the command line and the
/// full combined output, so the operator sees git's own diagnostic.
///
/// # Examples
///
/// ```ignore
/// // Ignored because it requires a Git repository.
/// let backend = GitBackend::default();
/// let args = vec!["rev-parse".to_string(), "HEAD".to_string()];
/// let hash = query(&backend, &args)?;
/// ```
pub fn query<B: Backend + ?Sized>(backend: &B, args: &[String]) -> Result<String, Error> {
    let out = backend.run(args)?;

    if out.success {
        Ok(out.combined.trim_end_matches('\n').to_string())
    } else {
        Err(Error::Backend {
            command: command_line(args),
            status: out.status,
            output: out.combined.trim().to_string(),
        })
    }
}

/// Builds an owned argument vector from string slices.
pub(crate) fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
