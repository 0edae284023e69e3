use crate::html::escape;
use crate::labels::LabelMap;
use crate::record::{pipe::strip_key, Record};
use crate::render::{text_block, Image};

/// Personal keys shown first, in this order, when present.
const ORDERED_KEYS: &[&str] = &[
    "Naam", "Roepnaam", "Woonplaats", "Geboortedatum", "Telefoon", "Beschikbaar per", "Functie",
];

/// The personal data table with the profile photo to its right.
pub fn personal(record: &Record, photo: Option<&Image>, labels: &LabelMap) -> String {
    if record.is_empty() && photo.is_none() {
        return String::new();
    }

    let row = |key: &str, value: &str| format!(
        "<tr><td class='label'>{}</td><td class='value'>{}</td></tr>",
        escape(&labels.resolve(key)),
        text_block(value)
    );

    let ordered = ORDERED_KEYS.iter()
        .filter_map(|&key| record.get(key).map(|value| row(key, value)));

    let remaining = record.iter()
        .filter(|(key, _)| !ORDERED_KEYS.contains(key))
        .map(|(key, value)| row(strip_key(key), value));

    let rows: String = ordered.chain(remaining).collect();
    let photo = photo.map(|image| {
        format!("<img src=\"{}\" alt=\"Foto\" class=\"profile-photo\">", image.data_uri())
    });

    format!(
        "<div class=\"personal-block\"><div class=\"personal-table-wrap\">\
         <table class='personal-table'>{rows}</table></div>{}</div>",
        photo.unwrap_or_default()
    )
}

#[cfg(test)]
mod personal_tests {
    use super::*;
    use crate::record::pipe;

    #[test]
    fn ordered_keys_come_first() {
        let record = pipe::parse("Hobby|Zeilen\nWoonplaats|Utrecht\nNaam|Jan de Vries");
        let html = personal(&record, None, &LabelMap::empty());

        let naam = html.find("Jan de Vries").unwrap();
        let woonplaats = html.find("Utrecht").unwrap();
        let hobby = html.find("Zeilen").unwrap();
        assert!(naam < woonplaats && woonplaats < hobby);
        assert!(html.contains("<td class='label'>Naam</td>"));
        assert!(html.contains("<td class='label'>Hobby</td>"));
        assert!(!html.contains("profile-photo"));
    }

    #[test]
    fn single_row() {
        let record = pipe::parse("Naam|Jan de Vries");
        assert_eq!(
            personal(&record, None, &LabelMap::empty()),
            "<div class=\"personal-block\"><div class=\"personal-table-wrap\">\
             <table class='personal-table'><tr><td class='label'>Naam</td><td class='value'>\
             <div class='tekstblok'><p>Jan de Vries</p></div></td></tr></table></div></div>"
        );
    }

    #[test]
    fn labels_are_resolved() {
        let labels = LabelMap::from_document("`date_of_birth` (Geboortedatum)");
        let record = pipe::parse("date_of_birth|1 januari 1980");
        assert!(personal(&record, None, &labels).contains(">Geboortedatum<"));
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(personal(&Record::new(), None, &LabelMap::empty()), "");
    }
}
