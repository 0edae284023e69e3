use minijinja::Environment;

use crate::error::Result;
use crate::templating::{Engine, Page};

/// Name of the page shell template. The `.html` suffix turns on escaping.
pub const PAGE_TEMPLATE: &str = "page.html";

const BUILTIN_PAGE: &str = include_str!("page.html");

#[derive(Debug)]
pub struct MiniJinjaEngine {
    env: Result<Environment<'static>>,
    /// A user-provided page shell, replacing the built-in one.
    page: Option<String>,
}

fn try_init() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_filter("date", ext::date);
    env.add_template(PAGE_TEMPLATE, BUILTIN_PAGE)?;
    Ok(env)
}

impl MiniJinjaEngine {
    pub fn new(page: Option<String>) -> Self {
        MiniJinjaEngine { env: try_init(), page }
    }
}

impl Engine for MiniJinjaEngine {
    fn render(&self, page: &Page) -> Result<String> {
        let env = self.env.as_ref().map_err(|e| e.clone())?;
        let string = match &self.page {
            Some(source) => env.render_named_str(PAGE_TEMPLATE, source, page)?,
            None => env.get_template(PAGE_TEMPLATE)?.render(page)?,
        };

        Ok(string)
    }
}

mod ext {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
    use minijinja::{Error, ErrorKind, Value};

    /// `{{ value|date("%Y%m%d") }}`: formats a date or date-time string.
    pub fn date(value: Value, fmt: &str) -> Result<Value, Error> {
        let kind = value.kind();
        let string = value.as_str()
            .ok_or_else(|| Error::new(
                ErrorKind::InvalidOperation,
                format!("`date` must be applied to a string, found {kind}")
            ))?;

        let datetime = string.parse::<NaiveDateTime>().map(|dt| dt.format(fmt))
            .or_else(|_| string.parse::<NaiveDate>().map(|d| d.format(fmt)))
            .or_else(|_| string.parse::<DateTime<FixedOffset>>().map(|dt| dt.format(fmt)))
            .map_err(|e| Error::new(
                ErrorKind::InvalidOperation,
                format!("failed to parse {string}: {e}")
            ))?;

        Ok(datetime.to_string().into())
    }
}

#[cfg(test)]
mod minijinja_tests {
    use super::*;
    use crate::templating::Section;

    fn page() -> Page {
        Page {
            lang: "nl".into(),
            title: "CV".into(),
            stylesheet: "static/style.css".into(),
            sidebar: String::new(),
            sections: vec![
                Section { name: "personal".into(), title: Some("PERSOONLIJK".into()), body: "<p>a</p>".into() },
                Section { name: "intro".into(), title: None, body: "<p>b &amp; c</p>".into() },
            ],
            generated: "2026-10-15T09:30:05".into(),
        }
    }

    #[test]
    fn builtin_shell() {
        let html = MiniJinjaEngine::new(None).render(&page()).unwrap();
        assert!(html.starts_with("<!doctype html><html lang='nl'>"));
        assert!(html.contains("<link rel='stylesheet' href=\"static/style.css?v=20261015\">"));
        assert!(html.contains(
            "<section class='block'><div class='block-title'>PERSOONLIJK</div><p>a</p></section>\n\
             <div class='block-sep'></div>\n\
             <section class='block'><p>b &amp; c</p></section>\n</div>"
        ));
        assert!(html.contains("<div class='generated'>15 October 2026 09:30:05</div>"));
        assert!(html.contains("aria-expanded"));
        assert!(!html.contains("urls-sidebar"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn user_shell_is_escaped() {
        let engine = MiniJinjaEngine::new(Some("<h1>{{ title }}</h1>{{ generated|date('%Y') }}".into()));
        let mut page = page();
        page.title = "<CV>".into();
        assert_eq!(engine.render(&page).unwrap(), "<h1>&lt;CV&gt;</h1>2026");
    }

    #[test]
    fn template_errors_surface() {
        let engine = MiniJinjaEngine::new(Some("{{ generated|date('%Y') ".into()));
        assert!(engine.render(&page()).is_err());

        let mut page = page();
        page.generated = "yesterday".into();
        assert!(MiniJinjaEngine::new(None).render(&page).is_err());
    }
}
