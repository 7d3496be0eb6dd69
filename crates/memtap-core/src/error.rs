use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::system::MemorySystem;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open logger output {}: {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a system could not be unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnwrapFailure {
    /// The system was not produced by any file logger.
    NotWrapped,
    /// The system was produced by a different file logger instance.
    ForeignLogger,
}

impl fmt::Display for UnwrapFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotWrapped => f.write_str("system was not wrapped by a file logger"),
            Self::ForeignLogger => f.write_str("system was wrapped by another file logger"),
        }
    }
}

/// Failed unwrap. Owns the system that was passed in so the caller gets it back intact.
#[derive(Error, Debug)]
#[error("cannot unwrap memory system: {reason}")]
pub struct UnwrapError {
    reason: UnwrapFailure,
    system: Box<dyn MemorySystem>,
}

impl UnwrapError {
    pub(crate) fn new(reason: UnwrapFailure, system: Box<dyn MemorySystem>) -> Self {
        Self { reason, system }
    }

    pub fn reason(&self) -> UnwrapFailure {
        self.reason
    }

    /// Hands back the system that could not be unwrapped.
    pub fn into_system(self) -> Box<dyn MemorySystem> {
        self.system
    }
}
