//! Error types for dev
//!
//! This module defines the error type used throughout the dispatcher and the
//! exit code taxonomy every failure is mapped to. Uses `thiserror` for
//! ergonomic error handling with automatic `Display` and `Error` trait
//! implementations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Stable exit codes returned to the calling shell.
///
/// Any value not listed here is passed through verbatim from a spawned
/// plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    General = 1,
    InvalidUsage = 2,
    PermissionDenied = 126,
    CommandNotFound = 127,
}

impl ErrorCode {
    /// Numeric process exit code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// The primary error type for dispatcher operations.
#[derive(Error, Debug)]
pub enum DevError {
    /// No search directory contains a plugin with this name.
    #[error("command '{command}' not found")]
    CommandNotFound {
        command: String,
        searched: Vec<PathBuf>,
    },

    /// The command line was malformed (e.g. `help` without a target).
    #[error("usage: {0}")]
    InvalidUsage(String),

    /// The plugin file exists but the child process could not be created.
    #[error("failed to execute {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DevError {
    /// Map this error onto the exit code taxonomy.
    pub fn exit_code(&self) -> i32 {
        let code = match self {
            DevError::CommandNotFound { .. } => ErrorCode::CommandNotFound,
            DevError::InvalidUsage(_) => ErrorCode::InvalidUsage,
            DevError::Spawn { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                ErrorCode::PermissionDenied
            }
            DevError::Spawn { .. } | DevError::Io(_) => ErrorCode::General,
        };
        code.code()
    }
}

/// A specialized `Result` type for dispatcher operations.
pub type Result<T> = std::result::Result<T, DevError>;
