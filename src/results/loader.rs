//! Results file loading
//!
//! This module provides `ResultsLoader` - a utility for loading results text
//! from files or strings and running the line parser on it. This is used by
//! both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use parse_results::results::ResultsLoader;
//!
//! // From file
//! let params = ResultsLoader::from_path("results.txt").unwrap().params();
//!
//! // From string
//! let params = ResultsLoader::from_string("name:widget\n").params();
//! assert_eq!(params["name"], "widget");
//! ```

use crate::results::parser::{parse_lines, parse_lines_reporting, Params};
use std::fs;
use std::path::Path;

/// Error that can occur when loading a results file
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Results loader with parsing shortcuts
///
/// The whole file is read to completion up front; the handle is closed before
/// any parsing happens, on the error path included.
#[derive(Debug)]
pub struct ResultsLoader {
    source: String,
}

impl ResultsLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(ResultsLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        ResultsLoader {
            source: source.into(),
        }
    }

    /// Parse the source into a parameter mapping, skipping malformed lines
    /// silently
    pub fn params(&self) -> Params {
        parse_lines(self.source.lines())
    }

    /// Parse the source, invoking `on_skip` with each malformed line
    pub fn params_reporting<F: FnMut(&str)>(&self, on_skip: F) -> Params {
        parse_lines_reporting(self.source.lines(), on_skip)
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
