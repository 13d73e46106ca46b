use crate::{
    config::Config,
    error::Error,
    git::{self, GitBackend},
    prompt, session,
};

use clap::Parser;
use console::style;
use std::{env, io::IsTerminal};
use tracing::{Level, debug};

/// Interactively rewrite the author and committer dates of a recent commit.
#[derive(Parser, Debug)]
#[command(name = "git-redate", version)]
pub struct Args {
    /// Limit the number of commits to output.
    #[arg(short = 'n', long = "number", value_name = "N", default_value_t = 10)]
    pub number: usize,

    /// Skip number commits before starting to show the commit output.
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub skip: usize,

    /// Log every git invocation to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            limit: args.number,
            skip: args.skip,
            verbose: args.verbose,
        }
    }
}

/// Long flags that are also accepted with a single dash (`-number 5`).
const SINGLE_DASH_LONG: [&str; 2] = ["number", "skip"];

/// Rewrites `-number`/`-skip` (and their `=value` forms) to the double-dash
/// spelling clap expects. Arguments after `--` are left alone.
pub(crate) fn normalize_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut out = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let single_dash_long = arg
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .map(|rest| rest.split('=').next().unwrap_or(rest))
            .is_some_and(|name| SINGLE_DASH_LONG.contains(&name));

        if single_dash_long {
            out.push(format!("-{}", arg));
        } else {
            out.push(arg);
        }
    }
    out
}

/// Installs the stderr log subscriber. Warnings only unless `verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Verifies the backend program is on `PATH` and that we are inside a work tree.
fn verify_environment(backend: &GitBackend) -> Result<(), Error> {
    which::which(backend.program()).map_err(Error::GitNotFound)?;

    let root = git::query(backend, &git::args(&["rev-parse", "--show-toplevel"]))?;
    debug!(%root, "repository root");
    Ok(())
}

fn report(e: &Error) {
    eprintln!("{}", style(format!("Error: {}", e)).red().bold());
}

/// Main CLI entry point for `git-redate`.
///
/// This function:
/// 1. Parses CLI flags into a [`Config`].
/// 2. Sets up logging.
/// 3. Verifies that `git` is installed and that the current directory is a git repository.
/// 4. Runs the interactive session, reading from the terminal through `dialoguer`
///    or, when stdin is not a terminal, line by line from stdin.
///
/// # Exit Codes
///
/// * `0` – Rewrite finished, the operator quit with `q`, or `--help`/`--version`.
/// * `2` – Invalid command-line flags.
/// * `Err(())` – Any failure after startup; the error has already been printed.
pub fn entry() -> Result<i32, ()> {
    let args = match Args::try_parse_from(normalize_args(env::args())) {
        Ok(a) => a,
        Err(e) => {
            let _ = e.print();
            return Ok(e.exit_code());
        }
    };

    let config = Config::from(args);
    init_logging(config.verbose);
    debug!(?config, "starting");

    let backend = GitBackend::default();
    if let Err(e) = verify_environment(&backend) {
        report(&e);
        return Err(());
    }

    let result = if std::io::stdin().is_terminal() {
        session::run(&config, &backend, &mut prompt::DialoguerLinePrompter)
    } else {
        let mut prompter = prompt::ReaderLinePrompter::new(std::io::stdin().lock());
        session::run(&config, &backend, &mut prompter)
    };

    match result {
        Ok(outcome) => {
            debug!(?outcome, "session finished");
            Ok(0)
        }
        Err(e) => {
            report(&e);
            Err(())
        }
    }
}
