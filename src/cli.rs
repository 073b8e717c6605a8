//! The command-line surface of propgen.
//!
//! Three flags, each with short and uppercase aliases and a built-in
//! default, so the tool runs with no arguments at all. Tokens outside this
//! table are ignored by the resolver.

use crate::resolver::FlagSpec;

/// Path to the source delimited file: `--csv <PATH>`
pub const CSV_FLAG: &str = "--csv";

/// Field separator, matched literally: `--delimiter <SEP>`
pub const DELIMITER_FLAG: &str = "--delimiter";

/// Destination path for the properties file: `--output <PATH>`
pub const OUTPUT_FLAG: &str = "--output";

const DEFAULT_CSV: &str = "input.csv";
const DEFAULT_DELIMITER: &str = ",";
const DEFAULT_OUTPUT: &str = "output.properties";

/// Builds the flag specification for the converter.
pub fn flag_spec() -> FlagSpec {
    FlagSpec::new()
        .flag(CSV_FLAG, &["-c", "-C", "--CSV"], Some(DEFAULT_CSV))
        .flag(
            DELIMITER_FLAG,
            &["-d", "-D", "--DELIMITER"],
            Some(DEFAULT_DELIMITER),
        )
        .flag(OUTPUT_FLAG, &["-o", "-O", "--OUTPUT"], Some(DEFAULT_OUTPUT))
}
