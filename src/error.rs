#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

/// An enum to represent failures of the judge itself, as opposed to a
/// rejected submission.
#[derive(thiserror::Error, Debug)]
pub enum JudgeError {
    /// A file the judge needs could not be opened or read.
    #[error("Could not read {}", path.display())]
    Setup {
        /// the file that could not be read
        path:   PathBuf,
        /// the underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl JudgeError {
    /// Returns the path of the file involved in this error.
    pub fn path(&self) -> &std::path::Path {
        match self {
            JudgeError::Setup { path, .. } => path.as_path(),
        }
    }
}
