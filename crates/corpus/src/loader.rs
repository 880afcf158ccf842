//! Line-oriented corpus loading.

use crate::error::{CorpusError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a candidate corpus from a text file, one candidate per line.
///
/// File order is preserved; nothing is filtered or trimmed, so a sorted
/// word list stays sorted and blank lines stay addressable.
///
/// # Arguments
/// * `path` - Path to the corpus file
///
/// # Returns
/// All lines of the file, in order
///
/// # Errors
/// [`CorpusError::NotFound`] if the file does not exist, [`CorpusError::Io`]
/// on any read failure.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CorpusError::NotFound(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(lines)
}
