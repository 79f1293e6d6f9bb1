//! # parse-results
//!
//! A parser for `key:value` results files.
//!
//! A results file is a newline-delimited text file where each meaningful line
//! has the form `key:value` with exactly one colon. Parsing folds the lines
//! into a parameter mapping (last value wins per key); lines that do not
//! split into exactly two parts are skipped.
//!
//! The reusable core lives in [`results::parser`]; [`results::loader`] adds
//! file and string loading on top of it. The `parse-results` binary is a thin
//! CLI over the loader.

pub mod results;
