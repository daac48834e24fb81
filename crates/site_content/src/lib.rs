//! Portfolio content: frontmatter documents parsed into typed writing posts, notes, and projects.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod frontmatter;
mod library;
mod records;

use std::path::PathBuf;

use thiserror::Error;

pub use frontmatter::{split_frontmatter, Document};
pub use library::{ContentKind, ContentLibrary, ContentSource};
pub use records::{
    EmbedType, EmbedVersion, Note, NoteCategory, NoteLang, Project, ProjectCategory,
    ProjectStatus, ProjectTimeline, WritingPost,
};

/// Length of the excerpt derived from a writing post body, in characters.
pub const EXCERPT_CHARS: usize = 150;

#[derive(Debug, Error)]
/// Failures while reading or parsing content documents.
pub enum ContentError {
    /// A collection directory or document could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The frontmatter opened with `---` but never closed.
    #[error("unterminated frontmatter in `{slug}`")]
    UnterminatedFrontmatter {
        /// Slug of the offending document.
        slug: String,
    },
    /// The frontmatter YAML did not match the record shape.
    #[error("invalid frontmatter in `{slug}`: {source}")]
    InvalidFrontmatter {
        /// Slug of the offending document.
        slug: String,
        /// YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}
