//! Content collections loaded from disk or from the documents compiled into the binary.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDate};

use crate::{ContentError, Note, Project, WritingPost};

const DOCUMENT_SUFFIX: &str = ".md";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Collection a document belongs to.
pub enum ContentKind {
    /// `writing/`
    Writing,
    /// `notes/`
    Notes,
    /// `projects/`
    Projects,
}

impl ContentKind {
    /// Every collection, in load order.
    pub const ALL: [Self; 3] = [Self::Writing, Self::Notes, Self::Projects];

    /// Directory name under the content root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Writing => "writing",
            Self::Notes => "notes",
            Self::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One in-memory document awaiting parsing.
pub struct ContentSource<'a> {
    /// Target collection.
    pub kind: ContentKind,
    /// Slug, the file stem without `.md`.
    pub slug: &'a str,
    /// Raw document text.
    pub text: &'a str,
}

macro_rules! bundled {
    ($kind:ident, $slug:literal) => {
        ContentSource {
            kind: ContentKind::$kind,
            slug: $slug,
            text: include_str!(concat!("../content/", $slug, ".md")),
        }
    };
}

const BUNDLED_SOURCES: [ContentSource<'static>; 6] = [
    bundled!(Writing, "writing/building-a-desktop-in-the-browser"),
    bundled!(Writing, "writing/notes-on-shipping-small"),
    bundled!(Notes, "notes/favorite-tools"),
    bundled!(Notes, "notes/reading-list"),
    bundled!(Projects, "projects/memo-board"),
    bundled!(Projects, "projects/retro-desktop"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Parsed writing posts, notes, and projects.
///
/// Writing and notes are kept newest first; projects keep source order.
pub struct ContentLibrary {
    writing: Vec<WritingPost>,
    notes: Vec<Note>,
    projects: Vec<Project>,
}

impl ContentLibrary {
    /// Parses the documents compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if a bundled document has malformed frontmatter.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_sources(&BUNDLED_SOURCES)
    }

    /// Parses in-memory documents. Slugs may carry a `<collection>/` prefix, which is dropped.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] raised while parsing.
    pub fn from_sources(sources: &[ContentSource<'_>]) -> Result<Self, ContentError> {
        let mut library = Self::default();
        for source in sources {
            let slug = source
                .slug
                .rsplit_once('/')
                .map_or(source.slug, |(_, stem)| stem);
            library.insert(source.kind, slug, source.text)?;
        }
        library.sort();
        Ok(library)
    }

    /// Loads `writing/`, `notes/`, and `projects/` under `root`.
    ///
    /// Only `*.md` files directly inside each directory are read. A missing directory yields an
    /// empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] for unreadable files or malformed frontmatter.
    pub fn from_dir(root: &Path) -> Result<Self, ContentError> {
        let mut library = Self::default();
        for kind in ContentKind::ALL {
            for path in collect_documents(&root.join(kind.dir_name()))? {
                let Some(slug) = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_suffix(DOCUMENT_SUFFIX))
                else {
                    continue;
                };
                let text = fs::read_to_string(&path).map_err(|source| ContentError::Io {
                    path: path.clone(),
                    source,
                })?;
                library.insert(kind, slug, &text)?;
            }
        }
        library.sort();
        Ok(library)
    }

    /// Writing posts, newest first.
    pub fn writing(&self) -> &[WritingPost] {
        &self.writing
    }

    /// Notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Projects in source order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a writing post by slug.
    pub fn writing_by_slug(&self, slug: &str) -> Option<&WritingPost> {
        self.writing.iter().find(|post| post.slug == slug)
    }

    /// Looks up a note by slug.
    pub fn note_by_slug(&self, slug: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.slug == slug)
    }

    /// Looks up a project by slug.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.slug == slug)
    }

    /// Distinct writing tags, sorted.
    pub fn writing_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .writing
            .iter()
            .flat_map(|post| post.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    /// Writing posts carrying `tag`, newest first. `None` returns every post.
    pub fn writing_tagged(&self, tag: Option<&str>) -> Vec<&WritingPost> {
        self.writing
            .iter()
            .filter(|post| tag.map_or(true, |tag| post.tags.iter().any(|t| t == tag)))
            .collect()
    }

    /// Writing posts a project lists as related, in the project's order. Unknown slugs are
    /// skipped.
    pub fn related_writing(&self, project: &Project) -> Vec<&WritingPost> {
        project
            .related_posts
            .iter()
            .filter_map(|slug| self.writing_by_slug(slug))
            .collect()
    }

    fn insert(&mut self, kind: ContentKind, slug: &str, text: &str) -> Result<(), ContentError> {
        match kind {
            ContentKind::Writing => self.writing.push(WritingPost::parse(slug, text)?),
            ContentKind::Notes => self.notes.push(Note::parse(slug, text)?),
            ContentKind::Projects => self.projects.push(Project::parse(slug, text)?),
        }
        Ok(())
    }

    fn sort(&mut self) {
        self.writing
            .sort_by(|a, b| newest_first(&a.date, &b.date).then_with(|| a.slug.cmp(&b.slug)));
        self.notes
            .sort_by(|a, b| newest_first(&a.date, &b.date).then_with(|| a.slug.cmp(&b.slug)));
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
pub(crate) fn parse_content_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

// Undated or unparseable entries sink to the end.
fn newest_first(a: &str, b: &str) -> Ordering {
    match (parse_content_date(a), parse_content_date(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let io_err = |source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_document = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(DOCUMENT_SUFFIX));
        if path.is_file() && is_document {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
