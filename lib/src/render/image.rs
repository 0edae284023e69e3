use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;
use crate::fstree::{Entry, FsTree};
use crate::source::Source;

/// Directories, relative to the site root, scanned when no candidate exists.
const IMAGE_DIRS: &[&str] = &["pictures", "logos", "logo", "images", "static/images"];

const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Logo,
    Profile,
}

impl ImageKind {
    /// Candidate file names inside `<content>/pictures`, in priority order.
    fn candidates(self) -> &'static [&'static str] {
        match self {
            ImageKind::Logo => &["logo-header.png", "logo-header.jpg", "logo.png", "logo.jpg"],
            ImageKind::Profile => &[
                "profile-photo.jpg", "profile-photo.png", "profile.jpg", "profile.png",
            ],
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            ImageKind::Logo => &["logo"],
            ImageKind::Profile => &["profile", "foto", "portrait"],
        }
    }

    /// Finds the image for `self` in `tree`. `content` is the content
    /// directory, relative to the tree root.
    pub fn find<'t>(self, tree: &'t FsTree, content: &Path) -> Option<&'t Entry> {
        let pictures = content.join("pictures");
        let candidate = self.candidates().iter()
            .find_map(|name| tree.get_file(None, pictures.join(name)));

        if candidate.is_some() {
            return candidate;
        }

        IMAGE_DIRS.iter()
            .filter_map(|dir| tree.get_dir(None, dir))
            .flat_map(|dir| tree.files_in(dir.id))
            .filter(|e| e.file_ext().map_or(false, |ext| IMAGE_EXTS.contains(&&*ext)))
            .find(|e| {
                let name = e.file_name.to_lowercase();
                self.keywords().iter().any(|k| name.contains(k))
            })
    }
}

/// An image read into memory, ready to be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub path: Arc<Path>,
    pub mime: &'static str,
    bytes: Vec<u8>,
}

/// The MIME type for an image extension. Unknown extensions are assumed to
/// be JPEG.
pub fn mime_type(ext: Option<&str>) -> &'static str {
    match ext {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

impl Image {
    pub fn read(entry: &Entry) -> Result<Image> {
        Ok(Image {
            path: entry.path.clone(),
            mime: mime_type(entry.file_ext().as_deref()),
            bytes: entry.read_bytes()?,
        })
    }

    /// `data:<mime>;base64,<data>`
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

#[cfg(test)]
mod image_tests {
    use std::fs;
    use super::*;

    #[test]
    fn candidates_win_over_scanning() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content/pictures")).unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("content/pictures/logo.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("content/pictures/logo-header.png"), b"png").unwrap();
        fs::write(dir.path().join("images/company-logo.png"), b"png").unwrap();

        let tree = FsTree::build(dir.path(), 3).unwrap();
        let logo = ImageKind::Logo.find(&tree, Path::new("content")).unwrap();
        assert_eq!(logo.file_name, "logo-header.png");
        assert!(ImageKind::Profile.find(&tree, Path::new("content")).is_none());
    }

    #[test]
    fn directories_are_scanned_by_keyword() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("static/images")).unwrap();
        fs::write(dir.path().join("static/images/banner.png"), b"x").unwrap();
        fs::write(dir.path().join("static/images/foto-jan.txt"), b"x").unwrap();
        fs::write(dir.path().join("static/images/Foto-Jan.WEBP"), b"x").unwrap();

        let tree = FsTree::build(dir.path(), 3).unwrap();
        let photo = ImageKind::Profile.find(&tree, Path::new("content")).unwrap();
        assert_eq!(photo.file_name, "Foto-Jan.WEBP");
        assert!(ImageKind::Logo.find(&tree, Path::new("content")).is_none());
    }

    #[test]
    fn data_uris() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content/pictures")).unwrap();
        fs::write(dir.path().join("content/pictures/profile.png"), b"hello").unwrap();

        let tree = FsTree::build(dir.path(), 3).unwrap();
        let entry = ImageKind::Profile.find(&tree, Path::new("content")).unwrap();
        let image = Image::read(entry).unwrap();
        assert_eq!(image.data_uri(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(mime_type(Some("bmp")), "image/jpeg");
        assert_eq!(mime_type(None), "image/jpeg");
    }
}
