mod macros;

pub use macros::*;

/// Normalizes a record key for synonym matching: transliterates to ASCII,
/// lowercases, and drops everything that isn't an ASCII alphanumeric.
///
/// ```
/// use vitae::util::normalize_key;
///
/// assert_eq!(normalize_key("Functie"), "functie");
/// assert_eq!(normalize_key("`functie_naam`"), "functienaam");
/// assert_eq!(normalize_key("Belangrijkste Prestaties"), "belangrijksteprestaties");
/// ```
pub fn normalize_key(key: &str) -> String {
    let mut output = String::with_capacity(key.len());
    for ch in key.chars() {
        for b in deunicode::deunicode_char(ch).unwrap_or("").bytes() {
            if b.is_ascii_alphanumeric() {
                output.push(b.to_ascii_lowercase() as char);
            }
        }
    }

    output
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(string: &str) -> String {
    let mut chars = string.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Returns `true` if `line`, ignoring leading whitespace, starts with a
/// bullet marker: `•`, `·`, or a `-`/`*` followed by whitespace.
pub fn is_bullet(line: &str) -> bool {
    let line = line.trim_start();
    if line.starts_with('•') || line.starts_with('·') {
        return true;
    }

    let mut chars = line.chars();
    matches!(chars.next(), Some('-' | '*')) && chars.next().map_or(false, char::is_whitespace)
}

/// Strips a leading bullet marker (see [`is_bullet()`]) and surrounding
/// whitespace from `line`.
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    if !is_bullet(line) {
        return line;
    }

    line.trim_start_matches(|c: char| matches!(c, '•' | '·' | '-' | '*')).trim()
}

/// Returns `true` if `line` contains a `|`.
#[inline]
pub fn has_pipe(line: &str) -> bool {
    memchr::memchr(b'|', line.as_bytes()).is_some()
}

/// Returns `true` if `line` is the column header of a delimited table: every
/// `|`-separated cell is wrapped in backticks, or the line starts with the
/// word `attribute`.
pub fn is_attribute_header(line: &str) -> bool {
    let line = line.trim();
    if line.get(..9).map_or(false, |s| s.eq_ignore_ascii_case("attribute")) {
        return true;
    }

    has_pipe(line) && line.split('|')
        .map(str::trim)
        .all(|cell| cell.len() >= 2 && cell.starts_with('`') && cell.ends_with('`'))
}
