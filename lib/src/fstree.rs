use std::sync::Arc;
use std::path::Path;
use std::{fs, fmt};

use rustc_hash::FxHashMap;

use crate::error::Result;

/// Directory names never descended into. Hidden entries are skipped too.
const PRUNED: &[&str] = &["target", "node_modules"];

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

/// A snapshot of the site root taken once, before anything is rendered.
#[derive(Debug)]
pub struct FsTree {
    entries: Vec<Entry>,
    map: FxHashMap<Arc<Path>, EntryId>,
}

#[derive(Debug)]
pub struct Entry {
    pub id: EntryId,
    pub path: Arc<Path>,
    pub file_name: String,
    pub file_type: fs::FileType,
    pub children: Vec<EntryId>,
}

impl FsTree {
    /// Snapshots `root`, descending at most `max_depth` levels below it.
    pub fn build<P: AsRef<Path>>(root: P, max_depth: usize) -> Result<Self> {
        let root = root.as_ref();
        let walker = jwalk::WalkDir::new(root)
            .sort(true)
            .skip_hidden(false)
            .follow_links(true)
            .max_depth(max_depth)
            .process_read_dir(|depth, _, _, entries| {
                // The root itself is passed with no depth and is always kept.
                if depth.is_none() {
                    return;
                }

                entries.retain(|e| e.as_ref().map_or(true, |e| {
                    let name = e.file_name.to_str().unwrap_or_default();
                    !name.starts_with('.') && !(e.file_type.is_dir() && PRUNED.contains(&name))
                }))
            });

        let mut tree = FsTree { entries: vec![], map: FxHashMap::default() };
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            tree.insert(entry);
        }

        match tree.entries.first() {
            Some(root) if root.file_type.is_dir() => Ok(tree),
            _ => err! {
                "site root must be an existing directory",
                "search root" => root.display(),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn root(&self) -> &Entry {
        &self[self.root_id()]
    }

    pub fn root_id(&self) -> EntryId {
        EntryId(0)
    }

    /// Looks up `path` relative to `root`, or to the tree root when `root` is
    /// `None`.
    #[inline]
    pub fn get<R, P>(&self, root: R, path: P) -> Option<&Entry>
        where R: Into<Option<EntryId>>, P: AsRef<Path>
    {
        self.get_id(root, path).map(|id| &self[id])
    }

    pub fn get_id<R, P>(&self, root: R, path: P) -> Option<EntryId>
        where R: Into<Option<EntryId>>, P: AsRef<Path>
    {
        let root = root.into().unwrap_or(self.root_id());
        let full_path = self[root].path.join(path.as_ref());
        self.map.get(&*full_path).cloned()
    }

    /// Like [`FsTree::get()`] but only returns regular files.
    pub fn get_file<R, P>(&self, root: R, path: P) -> Option<&Entry>
        where R: Into<Option<EntryId>>, P: AsRef<Path>
    {
        self.get(root, path).filter(|e| e.file_type.is_file())
    }

    /// Like [`FsTree::get()`] but only returns directories.
    pub fn get_dir<R, P>(&self, root: R, path: P) -> Option<&Entry>
        where R: Into<Option<EntryId>>, P: AsRef<Path>
    {
        self.get(root, path).filter(|e| e.file_type.is_dir())
    }

    /// The files directly inside `dir`, in file name order.
    pub fn files_in(&self, dir: EntryId) -> impl Iterator<Item = &Entry> + '_ {
        self[dir].children.iter()
            .map(move |&id| &self[id])
            .filter(|e| e.file_type.is_file())
    }

    fn insert(&mut self, entry: jwalk::DirEntry<((), ())>) {
        let parent = self.map.get(&entry.parent_path).cloned();
        let entry = Entry {
            id: EntryId(self.entries.len()),
            path: Arc::from(entry.path().into_boxed_path()),
            file_type: entry.file_type,
            file_name: entry.file_name.to_string_lossy().into_owned(),
            children: vec![],
        };

        self.map.insert(entry.path.clone(), entry.id);
        if let Some(parent) = parent {
            self.entries[parent.0].children.push(entry.id);
        }

        self.entries.push(entry);
    }
}

impl Entry {
    /// File name without the extension.
    pub fn file_stem(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((left, _)) if !left.is_empty() => left,
            _ => &self.file_name,
        }
    }

    /// The lowercased extension, if any.
    pub fn file_ext(&self) -> Option<String> {
        match self.file_name.rsplit_once('.') {
            Some((left, ext)) if !left.is_empty() => Some(ext.to_ascii_lowercase()),
            _ => None,
        }
    }
}

impl std::ops::Index<EntryId> for FsTree {
    type Output = Entry;

    fn index(&self, index: EntryId) -> &Self::Output {
        &self.entries[index.0]
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
