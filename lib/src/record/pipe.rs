//! `key|value` records.

use crate::record::Record;
use crate::util::is_attribute_header;

/// Parses `text` as `key|value` lines.
///
/// A line is split at its first `|`. Any later line without a `|` continues
/// the most recent key's value, joined with a newline; bullets and wrapped
/// prose both land here. Blank lines are skipped without ending the field.
/// Lines before the first key, and keys that are empty once stripped, are
/// dropped.
pub fn parse(text: &str) -> Record {
    parse_lines(text.lines())
}

/// Like [`parse()`] but first drops table header lines such as
/// `` `key`|`value` ``. Used for personal, contact, and configuration files.
pub fn parse_skipping_headers(text: &str) -> Record {
    parse_lines(text.lines().filter(|line| !is_attribute_header(line)))
}

/// Strips surrounding whitespace, backticks, and quotes from a raw key.
pub fn strip_key(key: &str) -> &str {
    key.trim_matches(|c: char| c.is_whitespace() || matches!(c, '`' | '\'' | '"'))
}

fn parse_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Record {
    fn flush(record: &mut Record, current: Option<(&str, Vec<&str>)>) {
        if let Some((key, lines)) = current {
            record.insert(key, lines.join("\n").trim());
        }
    }

    let mut record = Record::new();
    let mut current: Option<(&str, Vec<&str>)> = None;
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.split_once('|') {
            Some((key, value)) => {
                flush(&mut record, current.take());
                let key = strip_key(key);
                if !key.is_empty() {
                    let value = value.trim();
                    let lines = if value.is_empty() { vec![] } else { vec![value] };
                    current = Some((key, lines));
                }
            }
            None => if let Some((_, lines)) = current.as_mut() {
                lines.push(line.trim_end());
            }
        }
    }

    flush(&mut record, current);
    record
}

#[cfg(test)]
mod pipe_tests {
    use super::*;

    #[test]
    fn keys_and_values() {
        let record = parse("Naam|Jan de Vries\n`Woonplaats`| Utrecht \n'Functie'|Architect|Lead");
        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(pairs, [
            ("Naam", "Jan de Vries"),
            ("Woonplaats", "Utrecht"),
            ("Functie", "Architect|Lead"),
        ]);
    }

    #[test]
    fn continuation_lines_and_blanks() {
        let text = "\
stray text before any key
werkzaamheden|Led the platform team.

• Led migration
• Reduced latency
trefwoorden|Rust, Kafka";

        let record = parse(text);
        assert_eq!(record.len(), 2);
        assert_eq!(
            record.get("werkzaamheden"),
            Some("Led the platform team.\n• Led migration\n• Reduced latency")
        );
        assert_eq!(record.get("trefwoorden"), Some("Rust, Kafka"));
    }

    #[test]
    fn value_may_start_on_the_next_line() {
        let record = parse("prestaties|\n  • Shipped v2\n  • Cut costs");
        assert_eq!(record.get("prestaties"), Some("• Shipped v2\n  • Cut costs"));
    }

    #[test]
    fn empty_keys_are_dropped_with_their_continuations() {
        let record = parse("|orphan\ncontinued\nNaam|Jan");
        assert_eq!(record.iter().collect::<Vec<_>>(), [("Naam", "Jan")]);
    }

    #[test]
    fn header_lines_are_skipped_on_request() {
        let text = "`key`|`value`\nlinkedin|https://linkedin.com/in/jan";
        assert_eq!(parse(text).len(), 2);

        let record = parse_skipping_headers(text);
        assert_eq!(record.iter().collect::<Vec<_>>(), [("linkedin", "https://linkedin.com/in/jan")]);
    }
}
