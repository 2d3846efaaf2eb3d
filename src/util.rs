#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use crate::JudgeError;

/// Reads a whole input source into a string.
///
/// Invalid UTF-8 is replaced rather than rejected, only the numbers in the
/// file matter.
pub fn read_source(path: &Path) -> Result<String, JudgeError> {
    let bytes = std::fs::read(path).map_err(|source| JudgeError::Setup {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
