use rustc_hash::FxHashSet;

use crate::html::escape;
use crate::record::Record;
use crate::render::Image;

/// A kind of contact link the sidebar knows how to present.
struct ContactKind {
    kind: &'static str,
    keys: &'static [&'static str],
    prefix: &'static str,
    /// Link text. `None` shows the value itself.
    label: Option<&'static str>,
}

const KNOWN: &[ContactKind] = &[
    ContactKind {
        kind: "linkedin",
        keys: &["linkedin-url", "linkedin"],
        prefix: "https://",
        label: Some("LinkedIn"),
    },
    ContactKind {
        kind: "website",
        keys: &["website-url", "website"],
        prefix: "https://",
        label: Some("Website"),
    },
    ContactKind {
        kind: "github",
        keys: &["github-url", "github"],
        prefix: "https://",
        label: Some("GitHub"),
    },
    ContactKind {
        kind: "phone",
        keys: &["phone-nr", "telefoon", "telephone"],
        prefix: "tel:",
        label: None,
    },
    ContactKind {
        kind: "email",
        keys: &["e-mail", "email"],
        prefix: "mailto:",
        label: None,
    },
];

const SCHEMES: &[&str] = &["http://", "https://", "tel:", "mailto:"];

/// `linkedin_url`, `'LinkedIn_URL'` → `linkedin-url`.
fn contact_key(key: &str) -> String {
    key.trim_matches(|c: char| c == '\'' || c == '"').to_lowercase().replace('_', "-")
}

/// The contact sidebar: an optional logo and one link per contact entry.
/// Each known kind of link is shown at most once.
pub fn contact(record: &Record, logo: Option<&Image>) -> String {
    let mut links = vec![];
    let mut rendered = FxHashSet::default();
    for (key, value) in record.iter().filter(|(_, v)| !v.is_empty()) {
        let key = contact_key(key);
        let known = KNOWN.iter().find(|k| k.keys.contains(&&*key));
        let (kind, prefix, label) = match known {
            Some(k) => (k.kind.to_string(), k.prefix, k.label.unwrap_or(value)),
            None => (key, "", value),
        };

        if !rendered.insert(kind.clone()) {
            continue;
        }

        let href = match SCHEMES.iter().any(|s| value.starts_with(s)) {
            true => value.to_string(),
            false => format!("{prefix}{value}"),
        };

        links.push(format!(
            "<a href=\"{}\" class=\"contact-link\" data-type=\"{}\" title=\"{}\">\
             <span class=\"contact-text\">{}</span></a>",
            escape(&href), escape(&kind), escape(value), escape(label)
        ));
    }

    if links.is_empty() && logo.is_none() {
        return String::new();
    }

    let mut lines = vec!["<aside class=\"urls-sidebar\">".to_string()];
    if let Some(logo) = logo {
        lines.push(format!(
            "<div class=\"sidebar-logo\"><img src=\"{}\" alt=\"Logo\" class=\"sidebar-logo-img\"/></div>",
            logo.data_uri()
        ));
    }

    lines.extend(links);
    lines.push("</aside>".into());
    lines.join("\n")
}
