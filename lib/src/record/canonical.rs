use crate::record::Record;
use crate::util::normalize_key;

/// A logical engagement field with a fixed list of accepted raw-key
/// spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Canonical {
    Periode,
    Organisatie,
    Functie,
    Werkzaamheden,
    Prestaties,
    Trefwoorden,
}

impl Canonical {
    /// Every canonical field, in extraction priority order.
    pub const ALL: [Canonical; 6] = [
        Canonical::Periode,
        Canonical::Organisatie,
        Canonical::Functie,
        Canonical::Werkzaamheden,
        Canonical::Prestaties,
        Canonical::Trefwoorden,
    ];

    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Canonical::Periode => &["periode", "period"],
            Canonical::Organisatie => &[
                "organisatie", "organisatie_naam", "organization", "organization_name",
                "employer",
            ],
            Canonical::Functie => &[
                "functie", "functie_naam", "functienaam", "job", "jobtitle", "job_title",
            ],
            Canonical::Werkzaamheden => &[
                "werkzaamheden", "work", "workdetails", "textblockwork", "text_block_work",
                "work_description",
            ],
            Canonical::Prestaties => &[
                "belangrijksteprestaties", "prestaties", "achievements", "achievements_text",
                "text_block_achievements", "achievements_list",
            ],
            Canonical::Trefwoorden => &[
                "trefwoorden", "keywords", "text_block_keywords", "keywords_list",
            ],
        }
    }

    /// The display label used for this field's detail row.
    pub fn label(self) -> &'static str {
        match self {
            Canonical::Periode => "Periode",
            Canonical::Organisatie => "Organisatie",
            Canonical::Functie => "Functie",
            Canonical::Werkzaamheden => "Werkzaamheden",
            Canonical::Prestaties => "Belangrijkste prestaties",
            Canonical::Trefwoorden => "Trefwoorden",
        }
    }

    /// Returns `true` if `key`, once normalized, is one of this field's
    /// synonyms.
    pub fn matches(self, key: &str) -> bool {
        let key = normalize_key(key);
        self.synonyms().iter().any(|s| normalize_key(s) == key)
    }
}

/// Returns the value of the first key in `record` that matches `canonical`.
pub fn extract<'r>(record: &'r Record, canonical: Canonical) -> Option<&'r str> {
    record.iter()
        .find(|(key, _)| canonical.matches(key))
        .map(|(_, value)| value)
}

/// Extracts canonical fields from one record, never handing out the same key
/// twice, and then yields whatever was left.
#[derive(Debug)]
pub struct Fields<'r> {
    record: &'r Record,
    consumed: Vec<bool>,
}

impl<'r> Fields<'r> {
    pub fn new(record: &'r Record) -> Self {
        Fields { record, consumed: vec![false; record.len()] }
    }

    /// The value of the first unconsumed key matching `canonical`, which is
    /// then marked consumed.
    pub fn extract(&mut self, canonical: Canonical) -> Option<&'r str> {
        let i = (0..self.record.len())
            .filter(|&i| !self.consumed[i])
            .find(|&i| self.record.get_index(i).map_or(false, |(k, _)| canonical.matches(k)))?;

        self.consumed[i] = true;
        self.record.get_index(i).map(|(_, value)| value)
    }

    /// The unconsumed keys and values, in record order.
    pub fn remaining(&self) -> impl Iterator<Item = (&'r str, &'r str)> + '_ {
        let record = self.record;
        (0..record.len())
            .filter(|&i| !self.consumed[i])
            .filter_map(move |i| record.get_index(i))
    }
}
