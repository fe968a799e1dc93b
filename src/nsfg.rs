//! 2002 National Survey of Family Growth (NSFG) dataset definitions.
//!
//! Canned layouts for the Cycle 6 respondent and pregnancy files, with
//! the standard pregnancy recode. Byte offsets follow the NSFG
//! codebook. These are configuration, not core behavior: any caller can
//! build tables over its own layouts with `FieldSpec` directly.

use crate::field::{Cast, Field, FieldSpec};
use crate::record::Record;
use crate::table::{Recode, RecordTable};
use crate::value::Value;

/// Layout of the 2002 respondent file (`2002FemResp.dat`).
pub fn respondent_spec() -> FieldSpec {
    FieldSpec::new(vec![Field::new("caseid", 1, 12, Cast::ToInt)])
}

/// Layout of the 2002 pregnancy file (`2002FemPreg.dat`).
pub fn pregnancy_spec() -> FieldSpec {
    FieldSpec::new(vec![
        Field::new("caseid", 1, 12, Cast::ToInt),
        Field::new("nbrnaliv", 22, 22, Cast::ToInt),
        Field::new("babysex", 56, 56, Cast::ToInt),
        Field::new("birthwgt_lb", 57, 58, Cast::ToInt),
        Field::new("birthwgt_oz", 59, 60, Cast::ToInt),
        Field::new("prglength", 275, 276, Cast::ToInt),
        Field::new("outcome", 277, 277, Cast::ToInt),
        Field::new("birthord", 278, 279, Cast::ToInt),
        Field::new("agepreg", 284, 287, Cast::ToInt),
        Field::new("finalwgt", 423, 440, Cast::ToFloat),
    ])
}

/// Standard pregnancy recode.
///
/// Converts `agepreg` from centiyears to years, and derives
/// `totalwgt_oz` from the pound/ounce pair when both are present and
/// plausible (under 20 lb, at most 16 oz). Any Na input propagates to
/// the derived field.
pub fn pregnancy_recode() -> Recode {
    Box::new(|mut record: Record| {
        if let Some(agepreg) = record.value("agepreg").as_int() {
            record.set("agepreg", Value::Float(agepreg as f64 / 100.0));
        }

        let lb = record.value("birthwgt_lb").as_int();
        let oz = record.value("birthwgt_oz").as_int();
        let total = match (lb, oz) {
            (Some(lb), Some(oz)) if lb < 20 && oz <= 16 => Value::Int(lb * 16 + oz),
            _ => Value::Na,
        };
        record.set("totalwgt_oz", total);

        record
    })
}

/// An empty table ready to load respondent files.
pub fn respondents() -> RecordTable {
    RecordTable::new("respondent", respondent_spec())
}

/// An empty table ready to load pregnancy files, recode attached.
pub fn pregnancies() -> RecordTable {
    RecordTable::new("pregnancy", pregnancy_spec()).with_recode(pregnancy_recode())
}
