//! Typed records built from frontmatter documents.

use serde::Deserialize;

use crate::{
    frontmatter::{parse_header, split_frontmatter},
    ContentError, EXCERPT_CHARS,
};

const DEFAULT_WRITING_CATEGORY: &str = "blog";
const DEFAULT_EMBED_HEIGHT: &str = "500px";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Long-form post under `writing/`.
pub struct WritingPost {
    /// File stem.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Publication date as written in the header, usually `YYYY-MM-DD`.
    pub date: String,
    /// Free-form category, `blog` unless set.
    pub category: String,
    /// One-line summary.
    pub description: String,
    /// Listing blurb; derived from the body when the header has none.
    pub excerpt: String,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Markdown body.
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Section a note is filed under.
pub enum NoteCategory {
    /// Opinions and musings.
    Thoughts,
    /// Personal development.
    Growth,
    /// Reviews of books, tools, media.
    Reviews,
    /// Collected references.
    #[default]
    Inspiration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Language a note is written in.
pub enum NoteLang {
    /// English.
    #[default]
    En,
    /// Chinese.
    Zh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Short note under `notes/`.
pub struct Note {
    /// File stem.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Date as written in the header.
    pub date: String,
    /// Filing section.
    pub category: NoteCategory,
    /// Topic tags.
    pub tags: Vec<String>,
    /// Optional image URL.
    pub image: Option<String>,
    /// Optional video URL.
    pub video: Option<String>,
    /// Body language.
    pub lang: NoteLang,
    /// Markdown body.
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Lifecycle of a project.
pub enum ProjectStatus {
    /// Maintained.
    #[default]
    Active,
    /// Under construction.
    InProgress,
    /// No longer maintained.
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Grouping on the projects page.
pub enum ProjectCategory {
    /// Client or employer work.
    Work,
    /// Utilities.
    #[default]
    Tools,
    /// Experiments and prototypes.
    Experiments,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How a project's live demo is embedded on its page.
pub enum EmbedType {
    /// Served from this site.
    Local,
    /// Framed from another origin.
    External,
    /// No embed.
    #[default]
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Milestone on a project timeline.
pub struct ProjectTimeline {
    /// Date label.
    pub date: String,
    /// Milestone title.
    pub title: String,
    /// Optional detail.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Alternate demo build that can be embedded instead of the default.
pub struct EmbedVersion {
    /// Version identifier.
    pub version: String,
    /// Selector label.
    pub label: String,
    /// Embed URL.
    pub url: String,
    /// Optional detail.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Project case study under `projects/`.
pub struct Project {
    /// File stem.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Problem statement.
    pub problem: String,
    /// How the project solves it.
    pub solution: String,
    /// Feature bullet points.
    pub features: Vec<String>,
    /// Technologies used.
    pub tech: Vec<String>,
    /// Live demo link.
    pub demo_url: Option<String>,
    /// Source link.
    pub github_url: Option<String>,
    /// Lifecycle.
    pub status: ProjectStatus,
    /// Page grouping.
    pub category: ProjectCategory,
    /// Card image.
    pub cover_image: Option<String>,
    /// Demo embedding mode.
    pub embed_type: EmbedType,
    /// Demo embed URL.
    pub embed_url: Option<String>,
    /// CSS height of the embed frame.
    pub embed_height: String,
    /// Alternate demo builds.
    pub embed_versions: Vec<EmbedVersion>,
    /// Milestones, oldest first as written.
    pub timeline: Vec<ProjectTimeline>,
    /// Creation date label.
    pub created_at: Option<String>,
    /// Last update label.
    pub updated_at: Option<String>,
    /// Slugs of related writing posts.
    pub related_posts: Vec<String>,
    /// Markdown body.
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WritingHeader {
    title: Option<String>,
    date: String,
    category: Option<String>,
    description: String,
    excerpt: Option<String>,
    tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NoteHeader {
    title: Option<String>,
    date: String,
    category: NoteCategory,
    tags: Vec<String>,
    image: Option<String>,
    video: Option<String>,
    lang: NoteLang,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectHeader {
    title: Option<String>,
    description: String,
    problem: String,
    solution: String,
    features: Vec<String>,
    tech: Vec<String>,
    demo_url: Option<String>,
    github_url: Option<String>,
    status: ProjectStatus,
    category: ProjectCategory,
    cover_image: Option<String>,
    embed_type: EmbedType,
    embed_url: Option<String>,
    embed_height: Option<String>,
    embed_versions: Vec<EmbedVersion>,
    timeline: Vec<ProjectTimeline>,
    created_at: Option<String>,
    updated_at: Option<String>,
    related_posts: Vec<String>,
}

// Headerless documents are titled by their slug; a header without a title keeps it blank.
fn resolve_title(slug: &str, has_header: bool, title: Option<String>) -> String {
    match title {
        Some(title) => title,
        None if has_header => String::new(),
        None => slug.to_string(),
    }
}

/// First [`EXCERPT_CHARS`] characters of `body` followed by `...`.
pub(crate) fn derive_excerpt(body: &str) -> String {
    let head: String = body.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}

impl WritingPost {
    /// Parses a writing document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] for unterminated or malformed frontmatter.
    pub fn parse(slug: &str, text: &str) -> Result<Self, ContentError> {
        let doc = split_frontmatter(slug, text)?;
        let header: WritingHeader = parse_header(slug, doc.frontmatter.as_deref())?;
        Ok(Self {
            slug: slug.to_string(),
            title: resolve_title(slug, doc.frontmatter.is_some(), header.title),
            date: header.date,
            category: header
                .category
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| DEFAULT_WRITING_CATEGORY.to_string()),
            description: header.description,
            excerpt: header
                .excerpt
                .filter(|excerpt| !excerpt.is_empty())
                .unwrap_or_else(|| derive_excerpt(doc.body)),
            tags: header.tags,
            content: doc.body.to_string(),
        })
    }
}

impl Note {
    /// Parses a note document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] for unterminated or malformed frontmatter, including unknown
    /// categories or languages.
    pub fn parse(slug: &str, text: &str) -> Result<Self, ContentError> {
        let doc = split_frontmatter(slug, text)?;
        let header: NoteHeader = parse_header(slug, doc.frontmatter.as_deref())?;
        Ok(Self {
            slug: slug.to_string(),
            title: resolve_title(slug, doc.frontmatter.is_some(), header.title),
            date: header.date,
            category: header.category,
            tags: header.tags,
            image: header.image,
            video: header.video,
            lang: header.lang,
            content: doc.body.to_string(),
        })
    }
}

impl Project {
    /// Parses a project document. Header keys use camelCase (`demoUrl`, `embedType`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] for unterminated or malformed frontmatter.
    pub fn parse(slug: &str, text: &str) -> Result<Self, ContentError> {
        let doc = split_frontmatter(slug, text)?;
        let header: ProjectHeader = parse_header(slug, doc.frontmatter.as_deref())?;
        Ok(Self {
            slug: slug.to_string(),
            title: resolve_title(slug, doc.frontmatter.is_some(), header.title),
            description: header.description,
            problem: header.problem,
            solution: header.solution,
            features: header.features,
            tech: header.tech,
            demo_url: header.demo_url,
            github_url: header.github_url,
            status: header.status,
            category: header.category,
            cover_image: header.cover_image,
            embed_type: header.embed_type,
            embed_url: header.embed_url,
            embed_height: header
                .embed_height
                .unwrap_or_else(|| DEFAULT_EMBED_HEIGHT.to_string()),
            embed_versions: header.embed_versions,
            timeline: header.timeline,
            created_at: header.created_at,
            updated_at: header.updated_at,
            related_posts: header.related_posts,
            content: doc.body.to_string(),
        })
    }

    /// Whether the project page should show a live demo frame.
    pub fn has_embed(&self) -> bool {
        self.embed_type != EmbedType::Disabled && self.embed_url.is_some()
    }
}
