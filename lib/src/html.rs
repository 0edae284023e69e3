//! Free text to HTML: paragraphs, bullet lists, and links.

use std::borrow::Cow;

use pulldown_cmark_escape::escape_html;

use crate::util::{is_bullet, strip_bullet, static_regex};

const LINK: &str = r"https?://[^\s<>]+|www\.[^\s<>]+|[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Characters that end a sentence rather than a link.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Escapes text for HTML element content and double-quoted attributes.
///
/// ```
/// use vitae::html::escape;
///
/// assert_eq!(escape("R&D <team>"), "R&amp;D &lt;team&gt;");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(string: &str) -> Cow<'_, str> {
    if !string.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(string);
    }

    let mut output = String::with_capacity(string.len() + 16);
    let _ = escape_html(&mut output, string);
    Cow::Owned(output)
}

fn push_link(output: &mut String, link: &str) {
    let is_email = !link.starts_with("http") && link.contains('@');
    if is_email {
        let link = escape(link);
        output.push_str(&format!("<a href=\"mailto:{link}\">{link}</a>"));
        return;
    }

    let href = match link.starts_with("http") {
        true => escape(link),
        false => Cow::Owned(format!("http://{}", escape(link))),
    };

    output.push_str(&format!(
        "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(link)
    ));
}

/// Escapes `text` and turns URLs and e-mail addresses into links.
///
/// `http(s)://` links point to themselves, `www.` links get an `http://`
/// prefix, and addresses become `mailto:` links. Trailing sentence
/// punctuation stays outside the link.
pub fn linkify(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for m in static_regex!(LINK).find_iter(text) {
        let link = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        if link.is_empty() {
            continue;
        }

        output.push_str(&escape(&text[last..m.start()]));
        push_link(&mut output, link);
        last = m.start() + link.len();
    }

    output.push_str(&escape(&text[last..]));
    output
}

/// Formats a field value as HTML.
///
/// Bullet lines (`•`, `·`, or `-`/`*` followed by a space) become list
/// items, grouped into one `<ul>` per run. Other lines are gathered into
/// paragraphs, which end at blank lines and before lists. Every text segment
/// is passed through [`linkify()`].
///
/// ```
/// use vitae::html::format_value;
///
/// let html = format_value("• Led migration\n• Reduced latency");
/// assert_eq!(html, "<ul><li>Led migration</li><li>Reduced latency</li></ul>");
///
/// let html = format_value("contact@example.com");
/// assert_eq!(html, "<p><a href=\"mailto:contact@example.com\">contact@example.com</a></p>");
/// ```
pub fn format_value(value: &str) -> String {
    fn flush(output: &mut String, paragraph: &mut Vec<&str>) {
        if !paragraph.is_empty() {
            output.push_str(&format!("<p>{}</p>", linkify(&paragraph.join(" "))));
            paragraph.clear();
        }
    }

    let mut output = String::new();
    let mut paragraph: Vec<&str> = vec![];
    let mut in_list = false;
    for line in value.lines().map(str::trim) {
        if is_bullet(line) {
            flush(&mut output, &mut paragraph);
            if !in_list {
                output.push_str("<ul>");
                in_list = true;
            }

            output.push_str(&format!("<li>{}</li>", linkify(strip_bullet(line))));
            continue;
        }

        if in_list {
            output.push_str("</ul>");
            in_list = false;
        }

        match line.is_empty() {
            true => flush(&mut output, &mut paragraph),
            false => paragraph.push(line),
        }
    }

    flush(&mut output, &mut paragraph);
    if in_list {
        output.push_str("</ul>");
    }

    output
}
