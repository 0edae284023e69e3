use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::source::{Format, Toml};

/// The settings file looked for in the site root.
pub const CONFIG_FILE: &str = "site.toml";

/// Site settings. Every field has a default; paths are relative to the site
/// root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The content directory.
    pub content: PathBuf,
    /// The generated HTML file.
    pub output: PathBuf,
    /// The stylesheet linked from the page, as written into the `href`.
    pub stylesheet: String,
    /// The document display labels are read from.
    pub labels: PathBuf,
    /// A page template replacing the built-in one.
    pub template: Option<PathBuf>,
    pub lang: String,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            content: "content".into(),
            output: "cv.html".into(),
            stylesheet: "static/style.css".into(),
            labels: "specs/functional_dm.md".into(),
            template: None,
            lang: "nl".into(),
            title: "CV".into(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`.
    pub fn read(path: &Path) -> Result<Settings> {
        Toml::read(path)
    }

    /// Reads `site.toml` from `root` if it exists; otherwise returns the
    /// defaults.
    pub fn discover(root: &Path) -> Result<Settings> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!("no {CONFIG_FILE} in {}, using defaults", root.display());
            return Ok(Settings::default());
        }

        Settings::read(&path)
    }
}
