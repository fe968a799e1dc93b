//! Record tables: ordered collections of decoded records.
//!
//! A `RecordTable` binds a field spec and an optional recode hook to a
//! growing vector of records. Loading is cumulative — call
//! `load_from_file` once per extract and the records accumulate in file
//! order. There are no remove, update, or search operations; a table
//! only ever grows.

use std::ops::Index;
use std::path::Path;

use crate::error::LoadError;
use crate::field::FieldSpec;
use crate::record::Record;
use crate::source;

/// Post-decode transform, run once per record before it is stored.
///
/// Recode logic must treat `Value::Na` as a legitimate input for any
/// field it reads and propagate Na into derived fields rather than
/// doing arithmetic on it. A panic inside the hook aborts the load.
pub type Recode = Box<dyn Fn(Record) -> Record>;

/// An ordered collection of records sharing one fixed-width layout.
pub struct RecordTable {
    shape: String,
    spec: FieldSpec,
    recode: Option<Recode>,
    records: Vec<Record>,
}

impl RecordTable {
    /// Creates an empty table for the given record shape and layout.
    pub fn new(shape: &str, spec: FieldSpec) -> Self {
        Self {
            shape: shape.to_string(),
            spec,
            recode: None,
            records: Vec::new(),
        }
    }

    /// Attaches a recode hook, consuming and returning the table.
    pub fn with_recode(mut self, recode: Recode) -> Self {
        self.recode = Some(recode);
        self
    }

    /// The record shape name this table was created with.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// The field layout this table decodes with.
    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Appends one pre-built record.
    ///
    /// The record's shape is not checked against the table's spec;
    /// keeping mixed-shape records out is the caller's job.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Loads every line of `path` as one record each, in file order.
    ///
    /// Lines are decoded with the table's spec and passed through the
    /// recode hook if one is attached. Returns the number of records
    /// appended. I/O and gzip failures surface before the first append,
    /// so an `Err` leaves the table unchanged.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, LoadError> {
        let lines = source::load_lines(path.as_ref())?;
        let count = lines.len();
        for line in &lines {
            let decoded = self.spec.decode(line);
            let record = match &self.recode {
                Some(recode) => recode(decoded),
                None => decoded,
            };
            self.records.push(record);
        }
        Ok(count)
    }

    /// The record at `index`, or `None` out of bounds.
    ///
    /// Indexing is 0-based; there is no from-the-end negative indexing.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates stored records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl Extend<Record> for RecordTable {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, records: T) {
        self.records.extend(records);
    }
}

impl Index<usize> for RecordTable {
    type Output = Record;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}
