//! Error types
//!
//! Annotating a string never fails; these cover the file and command line
//! front-end around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum AnnotationError {
    /// Reading or writing a document failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Incompatible command line options
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Invalid environment configuration
    #[error(transparent)]
    Env(#[from] EnvError),
}

impl AnnotationError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AnnotationError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
