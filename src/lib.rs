//! propgen converts a delimited text file into a flat `key=value`
//! properties file.
//!
//! The interesting part lives in [`resolver`]: command-line tokens are
//! resolved against a declared flag specification with alias normalization
//! and default fallback. The conversion itself ([`convert`]) is a single
//! pass over the source file.

pub mod cli;
pub mod config;
pub mod convert;
pub mod diag;
pub mod error;
pub mod logging;
pub mod resolver;
