use std::{
    fs,
    path::{Path, PathBuf},
    process,
    time::{SystemTime, UNIX_EPOCH},
};

use pretty_assertions::assert_eq;
use site_content::{ContentError, ContentLibrary, NoteCategory, ProjectStatus};

fn temp_dir(prefix: &str) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("{prefix}_{}_{}", process::id(), now));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, text).expect("write document");
}

#[test]
fn loads_each_collection_and_ignores_other_files() {
    let root = temp_dir("site_content_load");
    write(&root, "writing/first.md", "---\ntitle: First\ndate: 2024-01-10\n---\nHello");
    write(&root, "writing/second.md", "---\ntitle: Second\ndate: 2024-05-02\n---\nAgain");
    write(&root, "writing/draft.txt", "not content");
    write(&root, "writing/nested/deep.md", "---\ntitle: Deep\n---\n");
    write(&root, "notes/idea.md", "---\ntitle: Idea\ncategory: thoughts\n---\n");
    write(&root, "projects/tool.md", "---\ntitle: Tool\nstatus: archived\n---\n");

    let library = ContentLibrary::from_dir(&root).expect("load library");

    let titles: Vec<_> = library.writing().iter().map(|post| post.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
    assert_eq!(
        library.note_by_slug("idea").map(|note| note.category),
        Some(NoteCategory::Thoughts)
    );
    assert_eq!(
        library.project_by_slug("tool").map(|project| project.status),
        Some(ProjectStatus::Archived)
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn missing_collections_load_empty() {
    let root = temp_dir("site_content_empty");
    write(&root, "notes/only.md", "Body without a header");

    let library = ContentLibrary::from_dir(&root).expect("load library");

    assert!(library.writing().is_empty());
    assert!(library.projects().is_empty());
    assert_eq!(library.notes()[0].title, "only");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn malformed_frontmatter_names_the_document() {
    let root = temp_dir("site_content_bad");
    write(&root, "projects/broken.md", "---\nstatus: [unterminated\n---\n");

    let err = ContentLibrary::from_dir(&root).expect_err("malformed header");
    assert!(matches!(err, ContentError::InvalidFrontmatter { ref slug, .. } if slug == "broken"));

    let _ = fs::remove_dir_all(root);
}
