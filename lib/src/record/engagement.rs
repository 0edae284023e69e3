use crate::record::{heading, pipe, Canonical, Record};
use crate::record::heading::LineKind;
use crate::util::{has_pipe, static_regex};

const FILE_PREFIX: &str = "opdracht_";
const FILE_SUFFIX: &str = ".txt";

/// One work engagement, parsed from its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engagement {
    pub file_name: String,
    /// The last four-digit number in the file name, or `0`.
    pub year: u32,
    pub record: Record,
}

impl Engagement {
    /// Parses `text`, read from a file called `file_name`.
    ///
    /// The format is chosen by [`is_piped()`]. When no key is a period
    /// synonym, a `periode` field is derived from the file name.
    pub fn parse(file_name: &str, text: &str) -> Engagement {
        let mut record = match is_piped(text) {
            true => pipe::parse(text),
            false => heading::parse(text),
        };

        if !record.keys().any(|k| Canonical::Periode.matches(k)) {
            record.insert("periode", derive_period(file_name));
        }

        Engagement {
            file_name: file_name.to_string(),
            year: sort_year(file_name),
            record,
        }
    }
}

/// Whether `text` is in pipe mode. A file that opens with a heading is in
/// heading mode even when a body line contains `|`; otherwise any `|` line
/// selects pipe mode.
pub fn is_piped(text: &str) -> bool {
    let Some(first) = text.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };

    if has_pipe(first) {
        return true;
    }

    heading::classify(first) != LineKind::Header && text.lines().any(has_pipe)
}

/// `opdracht_2019_2021.txt` → `2019 – 2021`.
pub fn derive_period(file_name: &str) -> String {
    let name = file_name.strip_prefix(FILE_PREFIX).unwrap_or(file_name);
    let name = name.strip_suffix(FILE_SUFFIX).unwrap_or(name);
    name.replace('_', " – ")
}

/// The last four-digit number in `file_name`, or `0`. Longer digit runs
/// are read four digits at a time.
pub fn sort_year(file_name: &str) -> u32 {
    static_regex!(r"\d{4}").find_iter(file_name)
        .last()
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Sorts most recent first: by year, then by file name, both descending.
pub fn sort_engagements(engagements: &mut [Engagement]) {
    engagements.sort_by(|a, b| {
        b.year.cmp(&a.year).then_with(|| b.file_name.cmp(&a.file_name))
    });
}
