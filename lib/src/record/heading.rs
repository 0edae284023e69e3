//! Heading-block records: a header line followed by its body.
//!
//! Whether a line is a header is decided by [`HEADER_RULES`], evaluated in
//! order. The first rule with an opinion wins; a line no rule claims is body.
//!
//! ```text
//! WERKZAAMHEDEN
//! Led the platform team.
//! • Led migration
//!
//! `trefwoorden`
//! Rust, Kafka
//! ```

use crate::record::Record;
use crate::util::is_bullet;

/// Key for body text that appears before the first header.
pub const DEFAULT_KEY: &str = "TEKST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Body,
}

pub struct HeaderRule {
    pub name: &'static str,
    pub decide: fn(&str) -> Option<LineKind>,
}

/// Header detection rules in priority order.
pub const HEADER_RULES: &[HeaderRule] = &[
    HeaderRule { name: "blank", decide: blank },
    HeaderRule { name: "bullet", decide: bullet },
    HeaderRule { name: "backticks", decide: backticks },
    HeaderRule { name: "trailing colon", decide: trailing_colon },
    HeaderRule { name: "uppercase", decide: uppercase },
];

fn blank(line: &str) -> Option<LineKind> {
    line.trim().is_empty().then_some(LineKind::Body)
}

fn bullet(line: &str) -> Option<LineKind> {
    is_bullet(line).then_some(LineKind::Body)
}

fn backticks(line: &str) -> Option<LineKind> {
    let line = line.trim();
    (line.len() >= 2 && line.starts_with('`') && line.ends_with('`')).then_some(LineKind::Header)
}

fn trailing_colon(line: &str) -> Option<LineKind> {
    line.trim_end().ends_with(':').then_some(LineKind::Header)
}

fn uppercase(line: &str) -> Option<LineKind> {
    let mut letters = line.chars().filter(|c| c.is_alphabetic()).peekable();
    let header = letters.peek().is_some() && letters.all(|c| !c.is_lowercase());
    header.then_some(LineKind::Header)
}

/// Classifies `line` using [`HEADER_RULES`].
pub fn classify(line: &str) -> LineKind {
    HEADER_RULES.iter()
        .find_map(|rule| (rule.decide)(line))
        .unwrap_or(LineKind::Body)
}

/// The key a header line introduces: the line without backticks or a
/// trailing colon.
pub fn header_key(line: &str) -> &str {
    line.trim()
        .trim_end_matches(':')
        .trim()
        .trim_matches('`')
        .trim()
}

/// Parses `text` as heading blocks. Body lines keep their blank lines so
/// that paragraphs survive formatting.
pub fn parse(text: &str) -> Record {
    fn flush(record: &mut Record, key: &str, body: &mut Vec<&str>) {
        let value = body.join("\n");
        let value = value.trim();
        if key != DEFAULT_KEY || !value.is_empty() {
            record.insert(key, value);
        }

        body.clear();
    }

    let mut record = Record::new();
    let mut key = DEFAULT_KEY;
    let mut body: Vec<&str> = vec![];
    for line in text.lines() {
        match classify(line) {
            LineKind::Header => {
                flush(&mut record, key, &mut body);
                key = header_key(line);
            }
            LineKind::Body => body.push(line.trim_end()),
        }
    }

    flush(&mut record, key, &mut body);
    record
}
