//! Standalone content routes rendered from the bundled library.

use leptos::*;
use leptos_meta::Title;
use leptos_router::{use_params_map, use_query_map, A};
use site_content::{EmbedType, Note, NoteCategory, NoteLang, Project, ProjectStatus, WritingPost};
use system_ui::{Card, EmptyState};

use crate::{markdown::render_markdown, web_app::use_site_content};

fn slug_param() -> impl Fn() -> String + Copy {
    let params = use_params_map();
    move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_default()
    }
}

fn note_category_label(category: NoteCategory) -> &'static str {
    match category {
        NoteCategory::Thoughts => "Thoughts",
        NoteCategory::Growth => "Growth",
        NoteCategory::Reviews => "Reviews",
        NoteCategory::Inspiration => "Inspiration",
    }
}

fn project_status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "Active",
        ProjectStatus::InProgress => "In progress",
        ProjectStatus::Archived => "Archived",
    }
}

#[component]
fn ContentBody(#[prop(into)] body: String) -> impl IntoView {
    let html = render_markdown(&body);
    view! { <div class="content-body" inner_html=html></div> }
}

#[component]
fn TagList(tags: Vec<String>) -> impl IntoView {
    (!tags.is_empty()).then(|| {
        view! {
            <ul class="tag-list">
                {tags
                    .into_iter()
                    .map(|tag| view! { <li>{tag}</li> })
                    .collect_view()}
            </ul>
        }
    })
}

#[component]
fn MissingContent(kind: &'static str, back_href: &'static str) -> impl IntoView {
    view! {
        <section class="canonical-content not-found">
            <Title text="Not found" />
            <EmptyState title=format!("{kind} not found") />
            <A href=back_href>"Back"</A>
        </section>
    }
}

#[component]
pub(crate) fn WritingIndex() -> impl IntoView {
    let library = use_site_content();
    let query = use_query_map();
    let active_tag = move || query.with(|map| map.get("tag").cloned());
    let tags: Vec<String> = library.writing_tags().into_iter().map(str::to_string).collect();

    let posts = {
        let library = library.clone();
        move || {
            let tag = active_tag();
            let posts: Vec<WritingPost> = library
                .writing_tagged(tag.as_deref())
                .into_iter()
                .cloned()
                .collect();
            if posts.is_empty() {
                return view! { <EmptyState title="No posts found." /> }.into_view();
            }
            posts
                .into_iter()
                .map(|post| {
                    view! {
                        <A href=format!("/writing/{}", post.slug) class="post-link">
                            <article>
                                <time>{post.date}</time>
                                <h2>{post.title}</h2>
                                <TagList tags=post.tags />
                            </article>
                        </A>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <section class="canonical-content writing-index">
            <Title text="Blog" />
            <h1>"Blog."</h1>
            <p>"Ideas on GEO, AI, and product building."</p>
            <nav class="tag-filter" aria-label="Filter by tag">
                <A href="/writing">"All"</A>
                {tags
                    .into_iter()
                    .map(|tag| view! { <A href=format!("/writing?tag={tag}")>{tag.clone()}</A> })
                    .collect_view()}
            </nav>
            {posts}
        </section>
    }
}

#[component]
pub(crate) fn WritingPage() -> impl IntoView {
    let library = use_site_content();
    let slug = slug_param();

    move || match library.writing_by_slug(&slug()).cloned() {
        None => view! { <MissingContent kind="Post" back_href="/writing" /> }.into_view(),
        Some(post) => view! {
            <article class="canonical-content writing-post">
                <Title text=post.title.clone() />
                <header>
                    <time>{post.date}</time>
                    <span data-ui-slot="category">{post.category}</span>
                    <h1>{post.title}</h1>
                    <p>{post.description}</p>
                    <TagList tags=post.tags />
                </header>
                <ContentBody body=post.content />
                <A href="/writing">"All posts"</A>
            </article>
        }
        .into_view(),
    }
}

#[component]
pub(crate) fn NotesIndex() -> impl IntoView {
    let notes: Vec<Note> = use_site_content().notes().to_vec();
    let listing = if notes.is_empty() {
        view! { <EmptyState title="No notes yet." /> }.into_view()
    } else {
        notes
            .into_iter()
            .map(|note| {
                view! {
                    <Card ui_slot="note">
                        <A href=format!("/notes/{}", note.slug)>
                            <h2>{note.title}</h2>
                        </A>
                        <p data-ui-slot="meta">
                            {note.date} " · " {note_category_label(note.category)}
                        </p>
                        {note.image.map(|src| view! { <img src=src alt="" loading="lazy" /> })}
                    </Card>
                }
            })
            .collect_view()
    };

    view! {
        <section class="canonical-content notes-index">
            <Title text="Notes" />
            <h1>"Notes."</h1>
            {listing}
        </section>
    }
}

#[component]
pub(crate) fn NotePage() -> impl IntoView {
    let library = use_site_content();
    let slug = slug_param();

    move || match library.note_by_slug(&slug()).cloned() {
        None => view! { <MissingContent kind="Note" back_href="/notes" /> }.into_view(),
        Some(note) => {
            let lang = match note.lang {
                NoteLang::En => "en",
                NoteLang::Zh => "zh",
            };
            view! {
                <article class="canonical-content note" lang=lang>
                    <Title text=note.title.clone() />
                    <header>
                        <time>{note.date}</time>
                        <span data-ui-slot="category">{note_category_label(note.category)}</span>
                        <h1>{note.title}</h1>
                        <TagList tags=note.tags />
                    </header>
                    {note.image.map(|src| view! { <img src=src alt="" /> })}
                    {note.video.map(|src| view! { <video src=src controls=true></video> })}
                    <ContentBody body=note.content />
                    <A href="/notes">"All notes"</A>
                </article>
            }
            .into_view()
        }
    }
}

#[component]
pub(crate) fn ProjectsIndex() -> impl IntoView {
    let projects: Vec<Project> = use_site_content().projects().to_vec();
    let listing = if projects.is_empty() {
        view! { <EmptyState title="No projects yet." /> }.into_view()
    } else {
        projects
            .into_iter()
            .map(|project| {
                view! {
                    <Card ui_slot="project">
                        {project
                            .cover_image
                            .map(|src| view! { <img src=src alt="" loading="lazy" /> })}
                        <A href=format!("/projects/{}", project.slug)>
                            <h2>{project.title}</h2>
                        </A>
                        <p>{project.description}</p>
                        <span data-ui-slot="status">{project_status_label(project.status)}</span>
                        <TagList tags=project.tech />
                    </Card>
                }
            })
            .collect_view()
    };

    view! {
        <section class="canonical-content projects-index">
            <Title text="Projects" />
            <h1>"Projects."</h1>
            {listing}
        </section>
    }
}

#[component]
pub(crate) fn ProjectPage() -> impl IntoView {
    let library = use_site_content();
    let slug = slug_param();

    move || {
        let Some(project) = library.project_by_slug(&slug()).cloned() else {
            return view! { <MissingContent kind="Project" back_href="/projects" /> }.into_view();
        };
        let related: Vec<WritingPost> = library
            .related_writing(&project)
            .into_iter()
            .cloned()
            .collect();
        let embed = project.has_embed().then(|| {
            let src = project.embed_url.clone().unwrap_or_default();
            let style = format!("height:{};", project.embed_height);
            let sandboxed = project.embed_type == EmbedType::External;
            view! {
                <iframe
                    class="project-embed"
                    src=src
                    style=style
                    title=format!("{} demo", project.title)
                    sandbox=sandboxed.then_some("allow-scripts allow-same-origin")
                ></iframe>
            }
        });

        view! {
            <article class="canonical-content project">
                <Title text=project.title.clone() />
                <header>
                    <span data-ui-slot="status">{project_status_label(project.status)}</span>
                    <h1>{project.title.clone()}</h1>
                    <p>{project.description}</p>
                    <nav>
                        {project.demo_url.map(|href| view! { <a href=href target="_blank">"Live demo"</a> })}
                        {project.github_url.map(|href| view! { <a href=href target="_blank">"Source"</a> })}
                    </nav>
                </header>
                {embed}
                <section data-ui-slot="problem">
                    <h2>"Problem"</h2>
                    <p>{project.problem}</p>
                </section>
                <section data-ui-slot="solution">
                    <h2>"Solution"</h2>
                    <p>{project.solution}</p>
                </section>
                <TagList tags=project.features />
                <TagList tags=project.tech />
                {(!project.timeline.is_empty()).then(|| view! {
                    <ol class="project-timeline">
                        {project
                            .timeline
                            .into_iter()
                            .map(|entry| view! {
                                <li>
                                    <time>{entry.date}</time>
                                    <strong>{entry.title}</strong>
                                    {entry.description.map(|text| view! { <p>{text}</p> })}
                                </li>
                            })
                            .collect_view()}
                    </ol>
                })}
                <ContentBody body=project.content />
                {(!related.is_empty()).then(|| view! {
                    <aside data-ui-slot="related">
                        <h2>"Related writing"</h2>
                        {related
                            .into_iter()
                            .map(|post| view! { <A href=format!("/writing/{}", post.slug)>{post.title}</A> })
                            .collect_view()}
                    </aside>
                })}
                <A href="/projects">"All projects"</A>
            </article>
        }
        .into_view()
    }
}

#[component]
pub(crate) fn AboutPage() -> impl IntoView {
    view! {
        <section class="canonical-content about">
            <Title text="About" />
            <h1>"About Joey"</h1>
            <p>"Problem-solving architect who builds products and writes about ideas."</p>
            <p>
                "I'm Joey, a product architect. I build products, write about ideas, and help brands
                get discovered by AI search engines."
            </p>
            <p>"My philosophy is simple: " <strong>"I find problems. I build solutions."</strong></p>
            <nav>
                <A href="/projects">"Projects"</A>
                <A href="/writing">"Writing"</A>
                <A href="/">"Open the desktop"</A>
            </nav>
        </section>
    }
}

#[component]
pub(crate) fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="canonical-content not-found">
            <Title text="Not found" />
            <EmptyState title="Page not found" detail="The page you are looking for does not exist." />
            <A href="/">"Back to the desktop"</A>
        </section>
    }
}
