//! Labeled training records for the rule-set classifiers.
//!
//! This crate owns everything the genetic algorithms consume as input:
//!
//! - [`Record`]: a fixed-length condition vector plus a binary output label,
//!   with the [`BinaryRecord`] (`bool` conditions) and [`FloatRecord`]
//!   (`f32` conditions) aliases
//! - [`parse`]: the line-oriented text formats the records are stored in
//! - [`Partition`]: the training / evaluation split used by the float engine
//!
//! # Text formats
//!
//! ```text
//! 01101 1          binary: condition bits, a space, the label
//! 0.12 0.9 0.44 0  float:  condition values, then the label
//! ```
//!
//! # Examples
//!
//! ```
//! use rulega_data::{Partition, parse};
//!
//! let records = parse::parse_float_records("0.1 0.2 1\n0.3 0.4 0\n0.5 0.6 1\n").unwrap();
//! let partition = Partition::split(&records, 2);
//! assert_eq!(partition.training().len(), 2);
//! assert_eq!(partition.evaluation().len(), 1);
//! ```

pub use self::{
    parse::ParseError,
    partition::Partition,
    record::{BinaryRecord, FloatRecord, Record},
};

pub mod parse;
mod partition;
mod record;
