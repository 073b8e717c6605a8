//! Properties serialization.
//!
//! Writes the collected key/value mapping as a flat properties file: one
//! `key=value` pair per line, keys in sorted order, no comments or header.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PropgenError;

/// Serializes `entries` to `path`, replacing any existing file.
///
/// The writer is flushed before the handle is dropped, so a successful
/// return means the file is complete on disk.
pub fn write_properties(
    path: &Path,
    entries: &BTreeMap<String, String>,
) -> Result<(), PropgenError> {
    let write_err = |source| PropgenError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    for (key, value) in entries {
        writeln!(writer, "{}={}", key, value).map_err(write_err)?;
    }

    writer.flush().map_err(write_err)?;
    Ok(())
}
