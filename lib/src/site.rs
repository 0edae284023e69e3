//! Discovery, loading, and assembly of the résumé page.
//!
//! A [`Site`] is a snapshot of a site root: its file tree, its settings, and
//! where the content lives. [`Site::load()`] reads and parses every content
//! file into [`Content`], and [`Site::render()`] turns that into the page.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::blocks::{self, Block, BlockKind, BLOCKS_FILE};
use crate::config::Settings;
use crate::error::{Chainable, Result};
use crate::fstree::{Entry, EntryId, FsTree};
use crate::html::escape;
use crate::labels::LabelMap;
use crate::record::{pipe, table, CourseGroup, Engagement, Record, Row, sort_engagements};
use crate::render::{self, text_block, Image, ImageKind};
use crate::source::{Sink, Source};
use crate::templating::{Engine, Page, Section};
use crate::templating::minijinja::MiniJinjaEngine;
use crate::util::time;

pub const PERSONAL_FILE: &str = "personal-data.txt";
/// Alternative to [`PERSONAL_FILE`]: a directory holding `personal.txt`.
pub const PERSONAL_DIR: &str = "personal-data";
pub const CONTACT_FILE: &str = "urls-contact.txt";
pub const EDUCATION_FILE: &str = "educations.txt";
pub const CERTIFICATIONS_FILE: &str = "certifications.txt";
pub const COURSES_FILE: &str = "courses.txt";
pub const SHORT_COURSES_FILE: &str = "courses-short.txt";
pub const ENGAGEMENTS_DIR: &str = "engagements";
pub const BLOCKS_DIR: &str = "blocks";
/// The static block holding the personal introduction.
pub const PERSONAL_TEXT: &str = "personal-text";

#[derive(Debug)]
pub struct Site {
    pub root: PathBuf,
    pub tree: FsTree,
    pub settings: Settings,
    pub content_root: EntryId,
    personal: EntryId,
}

/// Everything read from the content directory.
#[derive(Debug, Default)]
pub struct Content {
    pub personal: Record,
    pub contact: Record,
    pub educations: Vec<Row>,
    pub certifications: Vec<Row>,
    pub courses: Vec<CourseGroup>,
    pub short_courses: Vec<CourseGroup>,
    /// Most recent first.
    pub engagements: Vec<Engagement>,
    /// The configured blocks, if there is a configuration.
    pub blocks: Option<Vec<Block>>,
    pub labels: LabelMap,
    pub logo: Option<Image>,
    pub profile: Option<Image>,
}

/// How a block's body is produced.
#[derive(Debug)]
enum Resolution<'t> {
    Renderer(BlockKind),
    Static(&'t Entry),
    Empty,
}

/// How many levels below the site root the snapshot has to reach: content
/// files sit up to two levels below the content directory, as in
/// `engagements/*.txt` and `pictures/*.png`.
fn walk_depth(content: &Path) -> usize {
    let levels = content.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();

    levels + 2
}

#[track_caller]
fn dircheck(tree: &FsTree, path: &Path) -> Result<EntryId> {
    match tree.get(None, path) {
        Some(e) if e.file_type.is_dir() => Ok(e.id),
        Some(e) => err! {
            "content path must point to a directory",
            "path is not a directory" => e.path.display(),
        },
        None => err! {
            "content directory does not exist",
            "expected directory" => tree.root().path.join(path).display(),
        },
    }
}

impl Site {
    /// Snapshots `root`. Fails if the content directory or the personal data
    /// file is missing.
    pub fn discover<P: AsRef<Path>>(root: P, settings: Settings) -> Result<Site> {
        let root = root.as_ref();
        let tree = time!("discovery" => FsTree::build(root, walk_depth(&settings.content))?);
        tracing::debug!("discovered {} entries in {}", tree.len(), root.display());

        let content_root = dircheck(&tree, &settings.content)?;
        let personal = tree.get_file(content_root, PERSONAL_FILE)
            .or_else(|| tree.get_file(content_root, Path::new(PERSONAL_DIR).join("personal.txt")))
            .map(|e| e.id);

        let Some(personal) = personal else {
            return err! {
                "personal data file is missing",
                "expected file" => tree[content_root].path.join(PERSONAL_FILE).display(),
            };
        };

        Ok(Site { root: root.to_path_buf(), tree, settings, content_root, personal })
    }

    /// Reads `name` from the content directory, if it exists.
    fn read_optional(&self, name: &str) -> Result<Option<Arc<str>>> {
        match self.tree.get_file(self.content_root, name) {
            Some(entry) => Ok(Some(entry.read_text()?)),
            None => {
                tracing::debug!("optional content file {name} is absent");
                Ok(None)
            }
        }
    }

    fn read_with<T: Default>(&self, name: &str, parse: fn(&str) -> T) -> Result<T> {
        Ok(self.read_optional(name)?.map(|text| parse(&text)).unwrap_or_default())
    }

    fn read_image(&self, kind: ImageKind) -> Option<Image> {
        let entry = kind.find(&self.tree, &self.settings.content)?;
        match Image::read(entry) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("skipping unreadable {kind:?} image:\n{e}");
                None
            }
        }
    }

    fn read_labels(&self) -> Result<LabelMap> {
        let path = self.root.join(&self.settings.labels);
        if !path.is_file() {
            tracing::debug!("no label document at {}", path.display());
            return Ok(LabelMap::empty());
        }

        let text = path.as_path().read_text()?;
        Ok(LabelMap::from_document(&text))
    }

    fn read_engagements(&self) -> Result<Vec<Engagement>> {
        let Some(dir) = self.tree.get_dir(self.content_root, ENGAGEMENTS_DIR) else {
            tracing::debug!("no {ENGAGEMENTS_DIR} directory");
            return Ok(vec![]);
        };

        let mut engagements = self.tree.files_in(dir.id)
            .filter(|e| e.file_ext().as_deref() == Some("txt"))
            .map(|e| -> Result<Engagement> { Ok(Engagement::parse(&e.file_name, &e.read_text()?)) })
            .collect::<Result<Vec<_>>>()?;

        sort_engagements(&mut engagements);
        Ok(engagements)
    }

    /// Reads and parses all content. Missing optional files yield empty
    /// content; unreadable files are errors.
    pub fn load(&self) -> Result<Content> {
        let personal = self.tree[self.personal].read_text()?;
        let content = Content {
            personal: pipe::parse_skipping_headers(&personal),
            contact: self.read_with(CONTACT_FILE, pipe::parse_skipping_headers)?,
            educations: self.read_with(EDUCATION_FILE, table::parse_educations)?,
            certifications: self.read_with(CERTIFICATIONS_FILE, table::parse_certifications)?,
            courses: self.read_with(COURSES_FILE, table::parse_courses)?,
            short_courses: self.read_with(SHORT_COURSES_FILE, table::parse_short_courses)?,
            engagements: self.read_engagements()?,
            blocks: self.read_optional(BLOCKS_FILE)?.map(|text| blocks::parse(&text)),
            labels: self.read_labels()?,
            logo: self.read_image(ImageKind::Logo),
            profile: self.read_image(ImageKind::Profile),
        };

        tracing::info!(
            "loaded {} personal fields, {} engagements, {} educations",
            content.personal.len(), content.engagements.len(), content.educations.len()
        );

        Ok(content)
    }

    /// Finds the free text for a static block named `name`.
    fn find_static(&self, name: &str) -> Option<&Entry> {
        let blocks = Path::new(BLOCKS_DIR);
        let txt = format!("{name}.txt");
        let candidates = [blocks.join(name), blocks.join(&txt), name.into(), txt.as_str().into()];
        candidates.iter().find_map(|path: &PathBuf| self.tree.get_file(self.content_root, path))
    }

    fn resolve(&self, block: &Block) -> Resolution<'_> {
        let static_block = |name: &str| match self.find_static(name) {
            Some(entry) => Resolution::Static(entry),
            None => Resolution::Empty,
        };

        match block.kind() {
            BlockKind::PersonalText => static_block(PERSONAL_TEXT),
            BlockKind::Static => static_block(block.name.trim()),
            kind => Resolution::Renderer(kind),
        }
    }

    fn render_body(&self, content: &Content, kind: BlockKind) -> String {
        let labels = &content.labels;
        match kind {
            BlockKind::Personal => {
                render::personal(&content.personal, content.profile.as_ref(), labels)
            }
            BlockKind::Education => render::educations(&content.educations),
            BlockKind::Certifications => render::certifications(&content.certifications),
            BlockKind::Courses => render::courses(&content.courses),
            BlockKind::ShortCourses => render::courses(&content.short_courses),
            BlockKind::Engagements => render::engagements(&content.engagements, labels),
            BlockKind::Contact | BlockKind::PersonalText | BlockKind::Static => String::new(),
        }
    }

    /// Renders the configured blocks, in order. The contact block is skipped:
    /// it only ever appears in the sidebar.
    pub fn sections(&self, content: &Content) -> Result<Vec<Section>> {
        let blocks = blocks::resolve(content.blocks.clone(), !content.personal.is_empty());
        let mut sections = Vec::with_capacity(blocks.len());
        for block in &blocks {
            if block.kind() == BlockKind::Contact {
                tracing::debug!("block {:?} is rendered in the sidebar", block.name);
                continue;
            }

            let resolution = self.resolve(block);
            tracing::debug!("block {:?} resolved to {resolution:?}", block.name);
            let body = match resolution {
                Resolution::Renderer(kind) => self.render_body(content, kind),
                Resolution::Static(entry) => {
                    let text = entry.read_text()?;
                    match text.trim() {
                        "" => String::new(),
                        text => text_block(text),
                    }
                }
                Resolution::Empty => String::new(),
            };

            let title = block.title.trim();
            sections.push(Section {
                name: block.name.clone(),
                title: (!title.is_empty()).then(|| title.to_uppercase()),
                body,
            });
        }

        Ok(sections)
    }

    fn engine(&self) -> Result<MiniJinjaEngine> {
        let template = match &self.settings.template {
            Some(path) => {
                let path = self.root.join(path);
                let text = path.as_path().read_text()
                    .chain_with(|| error!("failed to read page template"))?;

                Some(text.to_string())
            }
            None => None,
        };

        Ok(MiniJinjaEngine::new(template))
    }

    /// Renders the complete page, stamped with `now`. Unchanged content and
    /// the same `now` always give the same output.
    pub fn render(&self, now: NaiveDateTime) -> Result<String> {
        let content = self.load()?;
        let page = Page {
            lang: self.settings.lang.clone(),
            title: self.settings.title.clone(),
            stylesheet: escape(&self.settings.stylesheet).into_owned(),
            sidebar: render::contact(&content.contact, content.logo.as_ref()),
            sections: self.sections(&content)?,
            generated: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        };

        time!("rendering" => self.engine()?.render(&page))
            .chain_with(|| error!("failed to render page", "template" => self.template_name()))
    }

    fn template_name(&self) -> String {
        match &self.settings.template {
            Some(path) => path.display().to_string(),
            None => "built-in".into(),
        }
    }

    /// The file the page is written to.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.settings.output)
    }

    /// Renders the page and writes it to [`Site::output_path()`], returning
    /// that path.
    pub fn generate(&self, now: NaiveDateTime) -> Result<PathBuf> {
        let html = self.render(now)?;
        let output = self.output_path();
        output.write_str(&html)?;
        tracing::info!("wrote {} bytes to {}", html.len(), output.display());
        Ok(output)
    }
}
