//! CLI surface: argument capture for the `dev` binary and the text it prints.

pub mod usage;

use clap::Parser;

use crate::dispatcher::Request;

/// Command-line arguments as seen by the binary.
///
/// Help and version flags are disabled here because `--help`/`-h` and
/// `--version`/`-v` are dispatcher built-ins that an alias may also target.
/// Everything from the first positional argument on is captured verbatim.
/// `-V`/`-q` may be repeated. A leading `--` is consumed by clap, so
/// `dev -- build` runs `build`.
#[derive(Parser, Debug)]
#[command(name = "dev")]
#[command(about = "Lightweight CLI dispatcher", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Print diagnostic output
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Print terse output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Command followed by the arguments forwarded to it
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Convert into a dispatcher request.
    ///
    /// Global flags given before the command were consumed by clap; the
    /// request scan picks up any that appear later.
    pub fn into_request(self) -> Request {
        let mut request = Request::parse(self.args);
        request.verbose |= self.verbose;
        request.quiet |= self.quiet;
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Request {
        Cli::try_parse_from(argv).unwrap().into_request()
    }

    #[test]
    fn test_leading_global_flags() {
        let req = parse(&["dev", "-V", "build", "--release"]);
        assert!(req.verbose);
        assert_eq!(req.command.as_deref(), Some("build"));
        assert_eq!(req.args, vec!["--release"]);
    }

    #[test]
    fn test_builtin_flags_reach_dispatcher() {
        assert_eq!(parse(&["dev", "--version"]).command.as_deref(), Some("--version"));
        assert_eq!(parse(&["dev", "-h"]).command.as_deref(), Some("-h"));
        assert_eq!(parse(&["dev", "-v"]).command.as_deref(), Some("-v"));
    }

    #[test]
    fn test_trailing_args_are_verbatim() {
        let req = parse(&["dev", "run", "-x", "--flag=1", "positional"]);
        assert_eq!(req.command.as_deref(), Some("run"));
        assert_eq!(req.args, vec!["-x", "--flag=1", "positional"]);
    }

    #[test]
    fn test_no_arguments() {
        let req = parse(&["dev", "--quiet"]);
        assert!(req.quiet);
        assert!(req.command.is_none());
    }

    #[test]
    fn test_repeated_global_flags() {
        let req = parse(&["dev", "-q", "-q", "list"]);
        assert!(req.quiet);
        assert_eq!(req.command.as_deref(), Some("list"));
        assert!(req.args.is_empty());

        let req = parse(&["dev", "-V", "--verbose", "list"]);
        assert!(req.verbose);
        assert_eq!(req.command.as_deref(), Some("list"));
    }

    #[test]
    fn test_leading_double_dash_is_consumed() {
        let req = parse(&["dev", "--", "build", "x"]);
        assert_eq!(req.command.as_deref(), Some("build"));
        assert_eq!(req.args, vec!["x"]);
    }
}
