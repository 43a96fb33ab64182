//! Error handling for rosgen.
//! Defines the error type and result alias used throughout the crate.

use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Pipeline stage a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Layout,
    /// Rendering of the executor at the given position.
    Executor(usize),
    BuildDescriptor,
    PackageManifest,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validate => write!(f, "application"),
            Stage::Layout => write!(f, "layout"),
            Stage::Executor(index) => write!(f, "executor {index}"),
            Stage::BuildDescriptor => write!(f, "CMakeLists"),
            Stage::PackageManifest => write!(f, "package xml"),
        }
    }
}

/// Custom error types for rosgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Rejected arguments or model data
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    /// Represents errors that occur while loading an application description
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Cannot make {role} directory ({path}): {source}.")]
    LayoutError {
        role: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unable to create output file ({path}): {source}.")]
    OutputCreateError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write output file ({path}): {source}.")]
    OutputWriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unable to read template ({path}): {source}.")]
    TemplateReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unable to parse template ({path}): {message}.")]
    TemplateParseError { path: String, message: String },

    #[error("Error executing template ({path}): {message}.")]
    TemplateExecutionError { path: String, message: String },

    /// Wraps a failure with the pipeline stage it aborted
    #[error("Unable to generate {stage}: {source}")]
    StageError {
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn at(stage: Stage) -> impl FnOnce(Error) -> Error {
        move |source| Error::StageError { stage, source: Box::new(source) }
    }

    /// Returns the innermost error, unwrapping stage context.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::StageError { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Returns the stage a wrapped error failed in.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::StageError { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub(crate) fn display_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().display().to_string()
}

/// Convenience type alias for Results with rosgen's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
