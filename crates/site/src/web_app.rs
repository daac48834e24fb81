use std::rc::Rc;

use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use site_content::ContentLibrary;

use crate::pages::{
    AboutPage, NotFoundPage, NotePage, NotesIndex, ProjectPage, ProjectsIndex, WritingIndex,
    WritingPage,
};

const SITE_NAME: &str = "Joeyconnects.os";

#[derive(Clone)]
pub(crate) struct SiteContent(pub(crate) Rc<ContentLibrary>);

pub(crate) fn use_site_content() -> Rc<ContentLibrary> {
    use_context::<SiteContent>()
        .map(|content| content.0)
        .unwrap_or_default()
}

fn load_site_content() -> ContentLibrary {
    ContentLibrary::bundled().unwrap_or_else(|err| {
        logging::warn!("bundled content failed to load: {err}");
        ContentLibrary::default()
    })
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteContent(Rc::new(load_site_content())));

    view! {
        <Title formatter=|page: String| {
            if page.is_empty() { SITE_NAME.to_string() } else { format!("{page} | {SITE_NAME}") }
        } />
        <Meta name="description" content="A retro desktop portfolio: projects, writing, and notes." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/writing" view=WritingIndex />
                    <Route path="/writing/:slug" view=WritingPage />
                    <Route path="/notes" view=NotesIndex />
                    <Route path="/notes/:slug" view=NotePage />
                    <Route path="/projects" view=ProjectsIndex />
                    <Route path="/projects/:slug" view=ProjectPage />
                    <Route path="/about" view=AboutPage />
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
