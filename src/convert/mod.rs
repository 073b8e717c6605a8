//! Conversion driver: CSV records in, properties file out.
//!
//! A single synchronous pass: read and split the source, collect key/value
//! pairs, serialize them to the destination. Malformed rows are skipped
//! with a diagnostic; I/O failures abort the conversion.

pub mod properties;
pub mod reader;

use std::collections::BTreeMap;

use crate::config::Config;
use crate::diag::DiagnosticSink;
use crate::error::Result;

/// What a conversion run produced.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    /// Unique keys written to the destination.
    pub entries: usize,
    /// Source rows skipped as malformed.
    pub skipped: usize,
}

/// Runs the end-to-end conversion described by `config`.
///
/// Rows with fewer than two fields are reported through `diag` and
/// skipped. Field 0 is the key, field 1 the value; any further fields are
/// ignored. Later rows overwrite earlier ones with the same key, matching
/// the unique-key semantics of the properties format.
pub fn run(config: &Config, diag: &mut dyn DiagnosticSink) -> Result<Summary> {
    let records = reader::read_records(&config.source, &config.delimiter)?;

    let mut entries: BTreeMap<String, String> = BTreeMap::new();
    let mut skipped = 0;

    for mut record in records {
        if record.len() < 2 {
            diag.warn(&format!("Skipping malformed line: {:?}", record));
            skipped += 1;
            continue;
        }
        let value = record.swap_remove(1);
        let key = record.swap_remove(0);
        entries.insert(key, value);
    }

    properties::write_properties(&config.output, &entries)?;

    Ok(Summary {
        entries: entries.len(),
        skipped,
    })
}
