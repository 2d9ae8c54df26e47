//! Command dispatch.
//!
//! One forward pass per invocation:
//!
//! 1. scan the whole argv for the global flags `-V/--verbose`, `-q/--quiet`
//! 2. take the first other argument as the command token (none: usage)
//! 3. substitute an alias, once
//! 4. run a built-in (`list`, `help`, `--version`/`-v`, `--help`/`-h`)
//! 5. otherwise resolve the plugin and spawn it with the remaining
//!    arguments, returning its exit code unchanged
//!
//! Every failure is reported once on the error stream and mapped to a
//! stable exit code (see [`ErrorCode`]).

use std::io::Write;

use tracing::{debug, info};

use crate::cli::usage::{self, VERSION};
use crate::context::AppContext;
use crate::error::{DevError, ErrorCode, Result};
use crate::runner::ProcessRunner;

/// Output verbosity selected by the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Default log filter directive; `DEV_LOG` takes precedence when set.
    pub fn log_level(self) -> &'static str {
        match self {
            Verbosity::Verbose => "debug",
            Verbosity::Normal => "warn",
            Verbosity::Quiet => "error",
        }
    }
}

/// A scanned command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub verbose: bool,
    pub quiet: bool,
    /// The command token, before alias substitution.
    pub command: Option<String>,
    /// Arguments after the command token, forwarded verbatim.
    pub args: Vec<String>,
}

pub(crate) fn is_global_flag(arg: &str) -> bool {
    matches!(arg, "-V" | "--verbose" | "-q" | "--quiet")
}

impl Request {
    /// Scan an argument list (program name excluded).
    ///
    /// Global flags are recognised anywhere. Before the command token they
    /// are consumed; after it they also stay in the forwarded arguments,
    /// which are passed to the plugin untouched.
    pub fn parse<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut request = Request::default();
        for arg in argv.into_iter().map(Into::into) {
            match arg.as_str() {
                "-V" | "--verbose" => request.verbose = true,
                "-q" | "--quiet" => request.quiet = true,
                _ => {}
            }

            if request.command.is_some() {
                request.args.push(arg);
            } else if !is_global_flag(&arg) {
                request.command = Some(arg);
            }
        }
        request
    }

    /// `--verbose` takes precedence over `--quiet`.
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

/// Resolves a request to a built-in or a plugin and runs it.
pub struct Dispatcher<'a, R: ProcessRunner> {
    ctx: &'a AppContext,
    runner: R,
}

impl<'a, R: ProcessRunner> Dispatcher<'a, R> {
    pub fn new(ctx: &'a AppContext, runner: R) -> Self {
        Self { ctx, runner }
    }

    /// Run a request, writing user-facing output to `out` and `err`.
    ///
    /// Returns the process exit code.
    pub fn run<O: Write, E: Write>(&self, request: &Request, out: &mut O, err: &mut E) -> i32 {
        match self.dispatch(request, out) {
            Ok(code) => code,
            Err(e) => {
                debug!(error = %e, "Dispatch failed");
                // Nothing useful can be done if the error stream is gone.
                let _ = self.report(&e, err);
                e.exit_code()
            }
        }
    }

    fn dispatch<O: Write>(&self, request: &Request, out: &mut O) -> Result<i32> {
        let Some(token) = request.command.as_deref() else {
            usage::write_usage(out, self.ctx)?;
            return Ok(ErrorCode::Success.code());
        };

        let command = self.ctx.aliases.resolve(token);
        debug!(token = %token, command = %command, args = request.args.len(), "Dispatching");

        match command {
            "--version" | "-v" => {
                writeln!(out, "dev v{}", VERSION)?;
                Ok(ErrorCode::Success.code())
            }
            "--help" | "-h" => {
                usage::write_usage(out, self.ctx)?;
                Ok(ErrorCode::Success.code())
            }
            "list" => {
                let terse = request.verbosity() == Verbosity::Quiet;
                usage::write_list(out, self.ctx, terse)?;
                Ok(ErrorCode::Success.code())
            }
            "help" => self.help(&request.args),
            plugin => self.run_plugin(plugin, &request.args),
        }
    }

    /// `help <cmd>`: run the plugin as `<plugin> <cmd> --help`.
    ///
    /// Global flags were already applied, so they never name the target.
    fn help(&self, args: &[String]) -> Result<i32> {
        let target = args
            .iter()
            .find(|arg| !is_global_flag(arg))
            .ok_or_else(|| DevError::InvalidUsage("dev help <command>".to_string()))?;

        let path = self.resolve(target)?;
        let help_args = [target.clone(), "--help".to_string()];
        self.runner.spawn(&path, &help_args)
    }

    fn run_plugin(&self, name: &str, args: &[String]) -> Result<i32> {
        let path = self.resolve(name)?;
        info!(command = %name, path = %path.display(), "Running plugin");
        self.runner.spawn(&path, args)
    }

    fn resolve(&self, name: &str) -> Result<std::path::PathBuf> {
        let registry = self.ctx.registry();
        registry
            .resolve(name)
            .ok_or_else(|| DevError::CommandNotFound {
                command: name.to_string(),
                searched: registry.dirs().to_vec(),
            })
    }

    fn report<E: Write>(&self, error: &DevError, err: &mut E) -> std::io::Result<()> {
        match error {
            DevError::CommandNotFound { command, searched } => {
                writeln!(err, "dev: command '{}' not found", command)?;
                for dir in searched {
                    writeln!(err, "  looked in: {}", dir.display())?;
                }
            }
            DevError::InvalidUsage(usage) => writeln!(err, "usage: {}", usage)?,
            other => writeln!(err, "dev: {}", other)?,
        }
        Ok(())
    }
}
