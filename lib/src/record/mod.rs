//! Parsers that turn content text into records.
//!
//! Two conventions exist for key/value content:
//!
//!   * **pipe mode** ([`pipe`]): `key|value` lines, with continuation lines
//!     appended to the most recent key.
//!   * **heading mode** ([`heading`]): a header line followed by body lines,
//!     where "header" is decided by an ordered list of rules.
//!
//! Positional tables (education, certifications, courses) are handled by
//! [`table`]; engagement files, which pick a mode per file and carry a
//! derived period, by [`engagement`].

pub mod pipe;
pub mod heading;
pub mod table;
mod canonical;
mod engagement;

pub use canonical::*;
pub use engagement::*;
pub use table::{Row, CourseGroup};

use indexmap::IndexMap;

/// An ordered mapping of field keys to field values.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// its original position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn get_index(&self, i: usize) -> Option<(&str, &str)> {
        self.fields.get_index(i).map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        iter.into_iter().for_each(|(k, v)| record.insert(k, v));
        record
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn reinsertion_keeps_position() {
        let mut record: Record = [("Naam", "Jan"), ("Woonplaats", "Utrecht")].into_iter().collect();
        record.insert("Naam", "Jan de Vries");
        record.insert("periode", "2019 – 2021");

        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(pairs, [
            ("Naam", "Jan de Vries"),
            ("Woonplaats", "Utrecht"),
            ("periode", "2019 – 2021"),
        ]);
    }
}
