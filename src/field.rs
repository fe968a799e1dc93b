//! Field specifications and the fixed-width record decoder.
//!
//! A `FieldSpec` maps named, typed byte ranges over a fixed-width line.
//! Offsets are 1-indexed and inclusive, matching how survey codebooks
//! document their layouts (e.g. "CASEID 1-12").
//!
//! Decoding is deliberately tolerant: a line too short for a field, a
//! slice that is not valid UTF-8, or a substring the cast cannot parse
//! all yield `Value::Na` for that field and decoding moves on. Malformed
//! rows are routine in survey extracts and must not halt ingestion.

use crate::record::Record;
use crate::value::Value;

/// How a raw substring becomes a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cast {
    /// Trim and parse as a signed integer.
    ToInt,
    /// Trim and parse as a float.
    ToFloat,
    /// Keep the exact substring, padding included.
    ToString,
}

impl Cast {
    /// Applies the cast, mapping any parse failure to `Na`.
    ///
    /// Numeric casts trim first because fixed-width numeric columns are
    /// space padded; `ToString` preserves the substring byte for byte.
    fn apply(self, raw: &str) -> Value {
        match self {
            Cast::ToInt => match raw.trim().parse::<i64>() {
                Ok(i) => Value::Int(i),
                Err(_) => Value::Na,
            },
            Cast::ToFloat => match raw.trim().parse::<f64>() {
                Ok(f) => Value::Float(f),
                Err(_) => Value::Na,
            },
            Cast::ToString => {
                if raw.is_empty() {
                    Value::Na
                } else {
                    Value::Str(raw.to_string())
                }
            }
        }
    }
}

/// One named byte range in a fixed-width layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    start: usize,
    stop: usize,
    cast: Cast,
}

impl Field {
    /// Creates a field covering 1-indexed inclusive bytes `start..=stop`.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= start <= stop`; an inverted or zero-based
    /// range is a bug in the layout definition, not a data condition.
    pub fn new(name: &str, start: usize, stop: usize, cast: Cast) -> Self {
        assert!(
            start >= 1 && start <= stop,
            "field '{name}': invalid byte range {start}-{stop} (1-indexed, start <= stop)"
        );
        Self {
            name: name.to_string(),
            start,
            stop,
            cast,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extracts and casts this field from a line.
    ///
    /// A range the line cannot fully satisfy maps to `Na` wholesale;
    /// there is no partial extraction from short lines.
    fn decode(&self, line: &str) -> Value {
        let bytes = line.as_bytes();
        if self.stop > bytes.len() {
            return Value::Na;
        }
        match std::str::from_utf8(&bytes[self.start - 1..self.stop]) {
            Ok(raw) => self.cast.apply(raw),
            Err(_) => Value::Na,
        }
    }
}

/// Ordered layout of a fixed-width record, set once per table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    fields: Vec<Field>,
}

impl FieldSpec {
    /// Creates a spec from fields in layout order.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Number of fields in the layout.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Decodes one line into a record, field by field in spec order.
    ///
    /// Never fails: each field independently degrades to `Na` on any
    /// extraction or cast problem.
    pub fn decode(&self, line: &str) -> Record {
        let mut record = Record::new();
        for field in &self.fields {
            record.set(&field.name, field.decode(line));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caseid_spec() -> FieldSpec {
        FieldSpec::new(vec![Field::new("caseid", 1, 12, Cast::ToInt)])
    }

    #[test]
    fn test_decode_padded_int() {
        let record = caseid_spec().decode("     12345  ");
        assert_eq!(record.get("caseid"), Some(&Value::Int(12345)));
    }

    #[test]
    fn test_decode_field_count_and_order() {
        let spec = FieldSpec::new(vec![
            Field::new("a", 1, 2, Cast::ToInt),
            Field::new("b", 3, 4, Cast::ToString),
            Field::new("c", 5, 8, Cast::ToFloat),
        ]);
        let record = spec.decode("12xy1.25");
        assert_eq!(record.len(), spec.len());
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(record.get("b"), Some(&Value::Str("xy".to_string())));
        assert_eq!(record.get("c"), Some(&Value::Float(1.25)));
    }

    #[test]
    fn test_short_line_is_na() {
        let spec = FieldSpec::new(vec![Field::new("birthwgt_lb", 57, 58, Cast::ToInt)]);
        let record = spec.decode("too short");
        assert_eq!(record.get("birthwgt_lb"), Some(&Value::Na));
    }

    #[test]
    fn test_partially_covered_range_is_na() {
        // Line ends inside the field's range; no partial extraction.
        let spec = FieldSpec::new(vec![Field::new("x", 3, 6, Cast::ToInt)]);
        let record = spec.decode("1234");
        assert_eq!(record.get("x"), Some(&Value::Na));
    }

    #[test]
    fn test_unparseable_substring_is_na() {
        let spec = FieldSpec::new(vec![
            Field::new("n", 1, 4, Cast::ToInt),
            Field::new("f", 5, 8, Cast::ToFloat),
        ]);
        let record = spec.decode("abcdefgh");
        assert_eq!(record.get("n"), Some(&Value::Na));
        assert_eq!(record.get("f"), Some(&Value::Na));
    }

    #[test]
    fn test_blank_numeric_column_is_na() {
        let spec = FieldSpec::new(vec![Field::new("nbrnaliv", 22, 22, Cast::ToInt)]);
        let record = spec.decode(&" ".repeat(30));
        assert_eq!(record.get("nbrnaliv"), Some(&Value::Na));
    }

    #[test]
    fn test_bad_field_does_not_abort_record() {
        let spec = FieldSpec::new(vec![
            Field::new("bad", 1, 4, Cast::ToInt),
            Field::new("good", 5, 6, Cast::ToInt),
        ]);
        let record = spec.decode("xxxx42");
        assert_eq!(record.get("bad"), Some(&Value::Na));
        assert_eq!(record.get("good"), Some(&Value::Int(42)));
    }

    #[test]
    fn test_to_string_keeps_padding() {
        let spec = FieldSpec::new(vec![Field::new("name", 1, 8, Cast::ToString)]);
        let record = spec.decode("SMITH   JOHN");
        assert_eq!(record.get("name"), Some(&Value::Str("SMITH   ".to_string())));
    }

    #[test]
    fn test_single_byte_field() {
        let spec = FieldSpec::new(vec![Field::new("outcome", 3, 3, Cast::ToInt)]);
        let record = spec.decode("xx4xx");
        assert_eq!(record.get("outcome"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_non_utf8_slice_is_na() {
        let spec = FieldSpec::new(vec![Field::new("x", 1, 1, Cast::ToString)]);
        // Slice boundary falls inside a multi-byte character.
        let record = spec.decode("é1");
        assert_eq!(record.get("x"), Some(&Value::Na));
    }

    #[test]
    #[should_panic(expected = "invalid byte range")]
    fn test_inverted_range_panics() {
        Field::new("x", 5, 3, Cast::ToInt);
    }

    #[test]
    #[should_panic(expected = "invalid byte range")]
    fn test_zero_start_panics() {
        Field::new("x", 0, 3, Cast::ToInt);
    }
}
