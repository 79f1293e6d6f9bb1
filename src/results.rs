//! Results file parsing
//!
//! File Layout
//!
//! The module splits along the parse/load seam:
//!
//! src/results
//!   ├── parser    The line parser: pure functions over line iterators
//!   └── loader    `ResultsLoader`: file/string loading in front of the parser
//!
//! The parser has no I/O and no failure modes of its own; everything that can
//! actually fail (reading the file) is confined to the loader.

pub mod loader;
pub mod parser;

pub use loader::{LoaderError, ResultsLoader};
pub use parser::{parse_line, parse_lines, parse_lines_reporting, Params};
