//! The block configuration: which sections the page has, in which order,
//! and under which titles.
//!
//! Read from `blocks.txt` in the content directory, one `name|title` or
//! `name` per line. Without the file, [`DEFAULT_BLOCKS`] is used.

use crate::util::is_attribute_header;

/// The configuration file, relative to the content directory.
pub const BLOCKS_FILE: &str = "blocks.txt";

pub const DEFAULT_BLOCKS: &[(&str, &str)] = &[
    ("personal", "PERSOONLIJK"),
    ("education", "OPLEIDINGEN"),
    ("certifications", "CERTIFICERINGEN"),
    ("courses", "CURSUSSEN"),
    ("courses_short", "OVERIGE CURSUSSEN"),
    ("engagements", "WERKERVARING"),
];

/// One configured block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub title: String,
}

impl Block {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, title: T) -> Block {
        Block { name: name.into(), title: title.into() }
    }

    pub fn kind(&self) -> BlockKind {
        BlockKind::from_name(&self.name)
    }
}

/// What renders a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Rendered in the sidebar, never in the main flow.
    Contact,
    Personal,
    PersonalText,
    Education,
    Certifications,
    Courses,
    ShortCourses,
    Engagements,
    /// Anything else: a free text file looked up by block name.
    Static,
}

impl BlockKind {
    /// Every kind with a renderer, and the block names that select it.
    pub const ALIASES: &'static [(BlockKind, &'static [&'static str])] = &[
        (BlockKind::Contact, &["urls", "urls_sidebar", "urls-contact", "contact"]),
        (BlockKind::Personal, &["personal", "persoonlijk", "personal-data"]),
        (BlockKind::PersonalText, &["personal-text", "persoonlijke-tekst"]),
        (BlockKind::Education, &["education", "educations", "opleidingen"]),
        (BlockKind::Certifications, &["certifications", "certificeringen"]),
        (BlockKind::Courses, &["courses", "cursussen"]),
        (BlockKind::ShortCourses, &[
            "courses_short", "courses-short", "overige_cursussen", "coursesshort",
        ]),
        (BlockKind::Engagements, &["engagements", "werkervaring", "opdrachten"]),
    ];

    /// Matches `name`, trimmed and lowercased and without a `.txt` suffix,
    /// against [`BlockKind::ALIASES`].
    ///
    /// ```
    /// use vitae::blocks::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_name(" Werkervaring "), BlockKind::Engagements);
    /// assert_eq!(BlockKind::from_name("urls-contact.txt"), BlockKind::Contact);
    /// assert_eq!(BlockKind::from_name("hobbies"), BlockKind::Static);
    /// ```
    pub fn from_name(name: &str) -> BlockKind {
        let name = name.trim().to_lowercase();
        let name = name.strip_suffix(".txt").unwrap_or(&name);
        BlockKind::ALIASES.iter()
            .find(|(_, names)| names.contains(&name))
            .map_or(BlockKind::Static, |(kind, _)| *kind)
    }
}

/// Parses a block configuration. Blank lines, `#` comments, and column
/// header lines are skipped.
pub fn parse(text: &str) -> Vec<Block> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(|line| !is_attribute_header(line))
        .map(|line| match line.split_once('|') {
            Some((name, title)) => Block::new(name.trim(), title.trim()),
            None => Block::new(line, ""),
        })
        .collect()
}

pub fn defaults() -> Vec<Block> {
    DEFAULT_BLOCKS.iter().map(|(name, title)| Block::new(*name, *title)).collect()
}

/// The blocks to render: `configured` when present, else the defaults. A
/// configuration without a personal block gets one first when there is
/// personal data to show.
pub fn resolve(configured: Option<Vec<Block>>, has_personal: bool) -> Vec<Block> {
    let mut blocks = match configured {
        Some(blocks) if !blocks.is_empty() => blocks,
        _ => return defaults(),
    };

    if has_personal && !blocks.iter().any(|b| b.kind() == BlockKind::Personal) {
        tracing::debug!("block configuration has no personal block, inserting one");
        blocks.insert(0, Block::new("personal", "Persoonlijk"));
    }

    blocks
}

#[cfg(test)]
mod block_tests {
    use super::*;

    #[test]
    fn parsing() {
        let text = "\
`name`|`title`
# comment

personal|Persoonlijk
hobbies
 engagements | Werkervaring ";

        assert_eq!(parse(text), [
            Block::new("personal", "Persoonlijk"),
            Block::new("hobbies", ""),
            Block::new("engagements", "Werkervaring"),
        ]);
    }

    #[test]
    fn aliases() {
        assert_eq!(BlockKind::from_name("PERSONAL-DATA"), BlockKind::Personal);
        assert_eq!(BlockKind::from_name("persoonlijke-tekst"), BlockKind::PersonalText);
        assert_eq!(BlockKind::from_name("coursesshort"), BlockKind::ShortCourses);
        assert_eq!(BlockKind::from_name("opleidingen.txt"), BlockKind::Education);
        assert_eq!(BlockKind::from_name("certificeringen"), BlockKind::Certifications);
        assert_eq!(BlockKind::from_name("cursussen"), BlockKind::Courses);
        assert_eq!(BlockKind::from_name("urls"), BlockKind::Contact);
        assert_eq!(BlockKind::from_name("blocks/intro"), BlockKind::Static);
    }

    #[test]
    fn defaults_and_personal_insertion() {
        assert_eq!(resolve(None, true), defaults());
        assert_eq!(resolve(Some(vec![]), false), defaults());
        assert_eq!(defaults()[4], Block::new("courses_short", "OVERIGE CURSUSSEN"));

        let configured = vec![Block::new("engagements", "Werkervaring")];
        let blocks = resolve(Some(configured.clone()), true);
        assert_eq!(blocks[0], Block::new("personal", "Persoonlijk"));
        assert_eq!(blocks.len(), 2);

        assert_eq!(resolve(Some(configured.clone()), false), configured);

        let configured = vec![Block::new("Persoonlijk", "Over mij")];
        assert_eq!(resolve(Some(configured.clone()), true), configured);
    }
}
