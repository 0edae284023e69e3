pub mod minijinja;

use std::fmt::Debug;

use serde::Serialize;

use crate::error::Result;

/// Everything the page shell is rendered from. Fragments are already HTML.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    pub lang: String,
    pub title: String,
    /// The stylesheet `href`, already escaped.
    pub stylesheet: String,
    /// The contact sidebar. Empty when there is none.
    pub sidebar: String,
    pub sections: Vec<Section>,
    /// Local generation time as `%Y-%m-%dT%H:%M:%S`.
    pub generated: String,
}

/// One rendered block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Section {
    pub name: String,
    /// Uppercased display title, if the block has one.
    pub title: Option<String>,
    pub body: String,
}

pub trait Engine: Debug {
    fn render(&self, page: &Page) -> Result<String>;
}
