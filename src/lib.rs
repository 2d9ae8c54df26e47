//! dev - lightweight CLI dispatcher
//!
//! `dev <command> [args...]` runs the executable named `<command>` from the
//! first plugin directory that has one, forwarding the remaining arguments
//! and returning its exit code.

pub mod alias;
pub mod cli;
pub mod config;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod plugins;
pub mod runner;

pub use context::{AppContext, Locations};
pub use dispatcher::{Dispatcher, Request};
pub use error::{DevError, ErrorCode, Result};
pub use runner::{ProcessRunner, SystemRunner};
