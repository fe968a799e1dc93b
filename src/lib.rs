//! # survey-tables-rs
//!
//! Fixed-width survey file ingestion into typed record tables.
//!
//! Survey datasets like the NSFG ship as fixed-width flat files, often
//! gzip-compressed: one record per line, each variable living at a
//! documented byte range. This library decodes such files into in-memory
//! tables of typed records, driven by a per-dataset field specification.
//!
//! Decoding is tolerant by design: a field that is blank, truncated, or
//! unparseable becomes the `Na` marker instead of failing the record.
//! An optional recode hook runs once per record after decoding, for
//! derived variables and unit corrections.
//!
//! ## Example
//!
//! ```
//! use survey_tables_rs::{Cast, Field, FieldSpec, RecordTable, Value};
//!
//! // Layout: caseid at bytes 1-12, outcome at byte 13.
//! let spec = FieldSpec::new(vec![
//!     Field::new("caseid", 1, 12, Cast::ToInt),
//!     Field::new("outcome", 13, 13, Cast::ToInt),
//! ]);
//!
//! let mut table = RecordTable::new("pregnancy", spec);
//! let first = table.spec().decode("       123451");
//! let second = table.spec().decode("       67890 ");
//! table.push(first);
//! table.push(second);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[0].get("caseid"), Some(&Value::Int(12345)));
//! assert_eq!(table[1].get("outcome"), Some(&Value::Na));
//! ```

pub mod error;
pub mod field;
pub mod nsfg;
pub mod record;
pub mod source;
pub mod table;
pub mod value;

pub use error::LoadError;
pub use field::{Cast, Field, FieldSpec};
pub use record::Record;
pub use source::load_lines;
pub use table::{Recode, RecordTable};
pub use value::Value;
