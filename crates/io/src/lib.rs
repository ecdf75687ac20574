//! # caeli-io
//!
//! CSV input and output for the caeli drought-index CLI.
//!
//! The index engine itself never touches files; this crate parses monthly
//! observation CSVs (detecting calendar gaps and materialising them as
//! explicit missing rows) and writes index series back out with empty
//! cells for undefined values.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{MonthlyInput, read_monthly_csv};
pub use writer::write_monthly_csv;
