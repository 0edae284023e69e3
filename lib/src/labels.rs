//! Display labels for raw field keys.
//!
//! A [`LabelMap`] is built once per generation from a loosely structured
//! data model document (by default `specs/functional_dm.md`) and handed to
//! the renderers. Three forms are recognized in the document, in this
//! order:
//!
//!   1. `` `key` (Label) ``: maps `key` to `Label`, and `Label` to itself.
//!   2. `` `key` `` with no parenthetical: maps `key` to its preferred casing
//!      or its capitalized self, unless already mapped.
//!   3. `key (Label)` at the start of a line, without backticks: maps `key` to
//!      its preferred casing or the capitalized label, unless already mapped.
//!      `Label` always maps to itself.

use indexmap::IndexMap;

use crate::util::{capitalize, static_regex};

/// Labels that win over whatever the document says, keyed by lowercase key.
const PREFERRED_CASING: &[(&str, &str)] = &[
    ("linkedin", "LinkedIn"),
    ("github", "GitHub"),
    ("website", "Website"),
    ("name", "Naam"),
    ("usual_name", "Roepnaam"),
    ("place_of_residence", "Woonplaats"),
    ("date_of_birth", "Geboortedatum"),
    ("available", "Beschikbaar"),
    ("job_title", "Functie"),
    ("telefoon", "Telefoon"),
    ("beschikbaar per", "Beschikbaar per"),
];

fn preferred_casing(key: &str) -> Option<&'static str> {
    PREFERRED_CASING.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, label)| *label)
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: IndexMap<String, String>,
}

impl LabelMap {
    /// A map with no document entries: every key resolves through the
    /// preferred casing table or capitalization.
    pub fn empty() -> Self {
        LabelMap::default()
    }

    /// Builds the map from the text of a data model document.
    pub fn from_document(text: &str) -> Self {
        let labeled = static_regex!(r"`([^`]+)`\s*\(([^)]+)\)");
        let backticked = static_regex!(r"`([^`]+)`");
        let bare = static_regex!(r"(?m)^([A-Za-z0-9_]+)\s*\(([^)]+)\)");

        let mut labels: IndexMap<String, String> = IndexMap::new();

        for m in labeled.captures_iter(text) {
            let (key, label) = (m[1].trim(), m[2].trim());
            let label = preferred_casing(key).unwrap_or(label);
            labels.insert(key.to_string(), label.to_string());
            labels.insert(label.to_string(), label.to_string());
        }

        for m in backticked.captures_iter(text) {
            let rest = &text[m.get(0).map_or(0, |m| m.end())..];
            if rest.trim_start().starts_with('(') {
                continue;
            }

            let key = m[1].trim();
            if !labels.contains_key(key) {
                let label = preferred_casing(key).map_or_else(|| capitalize(key), String::from);
                labels.insert(key.to_string(), label);
            }
        }

        for m in bare.captures_iter(text) {
            let (key, label) = (m[1].trim(), m[2].trim());
            if !labels.contains_key(key) {
                let value = preferred_casing(key).map_or_else(|| capitalize(label), String::from);
                labels.insert(key.to_string(), value);
            }

            labels.insert(label.to_string(), label.to_string());
        }

        tracing::debug!("label map built with {} entries", labels.len());
        LabelMap { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The display label for `key`.
    ///
    /// Tries an exact match, then a case-insensitive match in document order,
    /// then the preferred casing table, and finally capitalizes the trimmed
    /// key.
    ///
    /// ```
    /// use vitae::labels::LabelMap;
    ///
    /// let labels = LabelMap::from_document("`usual_name` (Roepnaam)");
    /// assert_eq!(labels.resolve("usual_name"), "Roepnaam");
    /// assert_eq!(labels.resolve("USUAL_NAME"), "Roepnaam");
    /// assert_eq!(labels.resolve("linkedin"), "LinkedIn");
    /// assert_eq!(labels.resolve("woonplaats"), "Woonplaats");
    /// ```
    pub fn resolve(&self, key: &str) -> String {
        if key.is_empty() {
            return String::new();
        }

        if let Some(label) = self.labels.get(key) {
            return label.clone();
        }

        let lowered = key.to_lowercase();
        let insensitive = self.labels.iter().find(|(k, _)| k.to_lowercase() == lowered);
        if let Some((_, label)) = insensitive {
            return label.clone();
        }

        match preferred_casing(&lowered) {
            Some(label) => label.to_string(),
            None => capitalize(key.trim()),
        }
    }
}
