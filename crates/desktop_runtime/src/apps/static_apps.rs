//! Presentational apps with no runtime state of their own.

use leptos::*;
use site_content::ContentLibrary;
use system_ui::{Card, EmptyState};

pub(super) fn welcome_view() -> View {
    view! {
        <div class="app app-welcome">
            <header data-ui-slot="hero">
                <h1>"Joey" <span data-ui-slot="accent">"connects"</span> ".os"</h1>
                <p>"v2.0.4 // PERSONAL_BUILD"</p>
            </header>
            <Card ui_slot="about">
                <h2>"About Me"</h2>
                <p>"Joey is building products while trying to understand the world in parallel."</p>
                <p>
                    "This website functions as an ongoing lab: a place to structure ideas, turn "
                    "structures into tools, and let those tools shape how life is lived."
                </p>
            </Card>
            <Card ui_slot="current">
                <h2>"Current Doing"</h2>
                <ul>
                    <li>"Project Management Mac App (coming soon)"</li>
                    <li>"AI Notes App (in development)"</li>
                    <li>"Conceptual Project on Death (exploring)"</li>
                </ul>
            </Card>
        </div>
    }
    .into_view()
}

struct ProductEntry {
    title: &'static str,
    description: &'static str,
    category: &'static str,
}

const PRODUCT_OS_ENTRIES: [ProductEntry; 5] = [
    ProductEntry {
        title: "GEO Intelligence",
        description: "AI-powered social listening and geographic analysis for enterprise clients.",
        category: "work",
    },
    ProductEntry {
        title: "Social Listening",
        description: "Real-time monitoring and sentiment analysis across social channels.",
        category: "work",
    },
    ProductEntry {
        title: "Eval",
        description: "Evaluation and benchmarking platform for production AI models.",
        category: "work",
    },
    ProductEntry {
        title: "mith",
        description: "Native macOS app for visual project planning.",
        category: "solo",
    },
    ProductEntry {
        title: "AI Notes",
        description: "Note-taking with automatic linking and semantic search.",
        category: "solo",
    },
];

pub(super) fn product_os_view() -> View {
    view! {
        <div class="app app-product-os">
            <h2>"Product OS"</h2>
            <div data-ui-slot="grid">
                {PRODUCT_OS_ENTRIES
                    .iter()
                    .map(|entry| {
                        view! {
                            <Card ui_slot=entry.category>
                                <h3>{entry.title}</h3>
                                <p>{entry.description}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn write_view() -> View {
    let posts = match ContentLibrary::bundled() {
        Ok(library) => library.writing().to_vec(),
        Err(err) => {
            logging::warn!("bundled writing failed to load: {err}");
            Vec::new()
        }
    };
    if posts.is_empty() {
        return view! { <EmptyState title="No posts found" /> }.into_view();
    }

    view! {
        <div class="app app-write">
            <h2>"Blog Posts"</h2>
            {posts
                .into_iter()
                .map(|post| {
                    view! {
                        <Card ui_slot="post">
                            <h3>
                                <a href=format!("/writing/{}", post.slug) target="_blank">
                                    {post.title}
                                </a>
                            </h3>
                            <p data-ui-slot="meta">{post.date} " · " {post.category}</p>
                            <p>{post.excerpt}</p>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

pub(super) fn videos_view() -> View {
    view! {
        <div class="app app-videos">
            {(1..=3)
                .map(|i| {
                    view! {
                        <div data-ui-slot="clip">
                            <span>{format!("demo_clip_0{i}.mp4")}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

pub(super) fn comics_view() -> View {
    view! {
        <div class="app app-comics">
            <Card ui_slot="panel">
                <p>"Why did the developer go broke? Because he used up all his cache."</p>
            </Card>
            <Card ui_slot="panel">
                <p>"*Debugging Face*"</p>
            </Card>
        </div>
    }
    .into_view()
}

pub(super) fn travel_view() -> View {
    let destinations = [
        ("Tokyo, JP", "Visited"),
        ("Berlin, DE", "Planned"),
        ("Reykjavik, IS", "Wishlist"),
    ];
    view! {
        <div class="app app-travel">
            <h2>"Destinations"</h2>
            {destinations
                .into_iter()
                .map(|(place, status)| {
                    view! {
                        <div data-ui-slot="destination">
                            <span>{place}</span>
                            <span data-ui-slot="status">{status}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

pub(super) fn learn_view() -> View {
    let topics = [
        ("React Patterns", "Advanced composition and hooks."),
        ("System Design", "Scalability, availability, and reliability."),
        ("AI Engineering", "Prompt engineering and RAG pipelines."),
    ];
    view! {
        <div class="app app-learn">
            <h1>"Knowledge Base"</h1>
            {topics
                .into_iter()
                .map(|(title, detail)| {
                    view! {
                        <div data-ui-slot="topic">
                            <h3>{title}</h3>
                            <p>{detail}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub actual_days: u32,
    pub claims: u32,
}

pub const STORE_PRODUCTS: [StoreProduct; 3] = [
    StoreProduct {
        title: "Focus Timer",
        description: "A tiny menu-bar timer built over a long weekend.",
        actual_days: 3,
        claims: 1,
    },
    StoreProduct {
        title: "Reading Queue",
        description: "Save-for-later list with weekly digests.",
        actual_days: 12,
        claims: 2,
    },
    StoreProduct {
        title: "Habit Grid",
        description: "Year-at-a-glance habit tracker.",
        actual_days: 7,
        claims: 0,
    },
];

/// Ten points per build day, ten percent off when more than one person built it.
pub fn calculate_store_price(actual_days: u32, claims: u32) -> u32 {
    let base = f64::from(actual_days * 10);
    let discount = if claims > 1 { 0.9 } else { 1.0 };
    (base * discount).round() as u32
}

pub(super) fn store_view() -> View {
    view! {
        <div class="app app-store">
            <h2>"Store"</h2>
            {STORE_PRODUCTS
                .iter()
                .map(|product| {
                    let price = calculate_store_price(product.actual_days, product.claims);
                    view! {
                        <Card ui_slot="product">
                            <h3>{product.title}</h3>
                            <p>{product.description}</p>
                            <p data-ui-slot="price">{format!("{price} pts")}</p>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
