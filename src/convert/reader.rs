//! Source reading and record splitting.

use std::fs;
use std::path::Path;

use crate::error::PropgenError;

/// Reads the source file and splits every line into fields by the literal
/// delimiter.
///
/// No quoting or escaping: a delimiter inside a field always splits. The
/// delimiter is matched as a plain string, so characters like `|` or `.`
/// need no escaping.
pub fn read_records(path: &Path, delimiter: &str) -> Result<Vec<Vec<String>>, PropgenError> {
    let contents = fs::read_to_string(path).map_err(|source| PropgenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(|line| line.split(delimiter).map(|f| f.to_string()).collect())
        .collect())
}
