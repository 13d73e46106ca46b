//! Read-only history queries against the backend.

use crate::error::Error;
use crate::git::{Backend, args, query};
use crate::log_line::FIELD_SEPARATOR;

/// Hash and current timestamps of the commit picked for rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDates {
    pub hash: String,
    pub author_date: String,
    pub committer_date: String,
}

/// Issues the `git log` / `rev-parse` / `show` queries the session needs.
pub struct HistoryQuery<'a, B: Backend + ?Sized> {
    backend: &'a B,
}

impl<'a, B: Backend + ?Sized> HistoryQuery<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Lists at most `limit` recent commits as raw `@#@`-delimited lines.
    ///
    /// Fields are abbreviated hash, relative author date, subject, author
    /// name and ref decoration. With `skip > 0` the first `skip` commits are
    /// left out; with `skip == 0` no extra argument is passed.
    pub fn list_recent(&self, limit: usize, skip: usize) -> Result<Vec<String>, Error> {
        let format = ["%h", "%ar", "%s", "%an", "%d"].join(FIELD_SEPARATOR);
        let mut a = vec![
            "log".to_string(),
            format!("-n{}", limit),
            format!("--format=format:{}", format),
        ];
        if skip > 0 {
            a.push(format!("--skip={}", skip));
        }

        let out = query(self.backend, &a)?;
        Ok(out
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| l.to_string())
            .collect())
    }

    /// Full hash of the commit `offset` commits behind `HEAD`.
    pub fn resolve_hash(&self, offset: usize) -> Result<String, Error> {
        query(self.backend, &args(&["rev-parse", rev(offset).as_str()]))
    }

    /// Author date of `HEAD~offset` in git's ISO-like format (`%ai`).
    pub fn author_date(&self, offset: usize) -> Result<String, Error> {
        self.show_format("%ai", offset)
    }

    /// Committer date of `HEAD~offset` in git's ISO-like format (`%ci`).
    pub fn committer_date(&self, offset: usize) -> Result<String, Error> {
        self.show_format("%ci", offset)
    }

    pub fn commit_dates(&self, offset: usize) -> Result<CommitDates, Error> {
        Ok(CommitDates {
            hash: self.resolve_hash(offset)?,
            author_date: self.author_date(offset)?,
            committer_date: self.committer_date(offset)?,
        })
    }

    /// Full ref name of the checked-out branch, e.g. `refs/heads/main`.
    ///
    /// Returns `None` when HEAD is detached or the query fails; callers only
    /// use it to word the closing reminder.
    pub fn head_ref(&self) -> Option<String> {
        query(self.backend, &args(&["symbolic-ref", "-q", "HEAD"]))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn show_format(&self, format: &str, offset: usize) -> Result<String, Error> {
        let format_arg = format!("--format={}", format);
        query(
            self.backend,
            &args(&["show", "-s", format_arg.as_str(), rev(offset).as_str()]),
        )
    }
}

fn rev(offset: usize) -> String {
    format!("HEAD~{}", offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::BackendOutput;
    use std::cell::RefCell;

    /// Records every call and answers by the first argument.
    struct FakeBackend {
        calls: RefCell<Vec<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    impl Backend for FakeBackend {
        fn run(&self, args: &[String]) -> Result<BackendOutput, Error> {
            self.calls.borrow_mut().push(args.to_vec());
            let sub = args[0].as_str();
            if self.fail_on == Some(sub) {
                return Ok(BackendOutput {
                    success: false,
                    status: "exit status: 128".to_string(),
                    combined: "fatal: not a git repository\n".to_string(),
                });
            }
            let combined = match sub {
                "log" => "a1@#@1 day ago@#@One@#@Ann@#@ (HEAD -> main)\nb2@#@2 days ago@#@Two@#@Bob@#@",
                "rev-parse" => "0cfd8742049972a90b68021353add7a3b5134316\n",
                "show" if args[2] == "--format=%ai" => "2019-07-26 09:43:44 -0500\n",
                "show" => "2019-07-27 10:00:00 -0500\n",
                "symbolic-ref" => "refs/heads/main\n",
                _ => "",
            };
            Ok(BackendOutput {
                success: true,
                status: "exit status: 0".to_string(),
                combined: combined.to_string(),
            })
        }
    }

    #[test]
    fn list_recent_uses_exact_log_arguments() {
        let backend = FakeBackend::new();
        let lines = HistoryQuery::new(&backend).list_recent(10, 0).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            backend.calls.borrow()[0],
            args(&["log", "-n10", "--format=format:%h@#@%ar@#@%s@#@%an@#@%d"])
        );
    }

    #[test]
    fn list_recent_appends_skip_when_set() {
        let backend = FakeBackend::new();
        HistoryQuery::new(&backend).list_recent(5, 3).unwrap();

        let calls = backend.calls.borrow();
        assert_eq!(calls[0][1], "-n5");
        assert_eq!(calls[0].last().map(String::as_str), Some("--skip=3"));
    }

    #[test]
    fn commit_dates_query_head_offset() {
        let backend = FakeBackend::new();
        let dates = HistoryQuery::new(&backend).commit_dates(2).unwrap();

        assert_eq!(dates.hash, "0cfd8742049972a90b68021353add7a3b5134316");
        assert_eq!(dates.author_date, "2019-07-26 09:43:44 -0500");
        assert_eq!(dates.committer_date, "2019-07-27 10:00:00 -0500");

        let calls = backend.calls.borrow();
        assert_eq!(calls[0], args(&["rev-parse", "HEAD~2"]));
        assert_eq!(calls[1], args(&["show", "-s", "--format=%ai", "HEAD~2"]));
        assert_eq!(calls[2], args(&["show", "-s", "--format=%ci", "HEAD~2"]));
    }

    #[test]
    fn backend_failure_is_fatal() {
        let mut backend = FakeBackend::new();
        backend.fail_on = Some("rev-parse");
        let err = HistoryQuery::new(&backend).commit_dates(0).unwrap_err();

        match err {
            Error::Backend { command, output, .. } => {
                assert_eq!(command, "git rev-parse HEAD~0");
                assert_eq!(output, "fatal: not a git repository");
            }
            other => panic!("unexpected error {:?}", other),
        }
        // No further queries after the failure.
        assert_eq!(backend.calls.borrow().len(), 1);
    }

    #[test]
    fn head_ref_is_none_on_failure() {
        let mut backend = FakeBackend::new();
        assert_eq!(
            HistoryQuery::new(&backend).head_ref().as_deref(),
            Some("refs/heads/main")
        );
        backend.fail_on = Some("symbolic-ref");
        assert_eq!(HistoryQuery::new(&backend).head_ref(), None);
    }

    #[cfg(unix)]
    #[test]
    fn echo_stub_reports_resolve_arguments() {
        let backend = crate::git::GitBackend::new("echo");
        let out = HistoryQuery::new(&backend).resolve_hash(2).unwrap();
        assert_eq!(out, "rev-parse HEAD~2");
    }
}
