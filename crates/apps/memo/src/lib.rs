//! Memo board desktop app: short hashtagged notes listed newest first.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod memo;
mod store;

use std::rc::Rc;

use chrono::Utc;
use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::{Button, ButtonVariant, EmptyState, TextArea};

pub use memo::{extract_hashtags, format_relative, Memo};
pub use store::{MemoStore, MemoStoreError, MemoStoreFuture, MemoryMemoStore};

const DEFAULT_INPUT_ID: &str = "memo-input";

fn refresh(store: StoredValue<Rc<dyn MemoStore>>, memos: RwSignal<Vec<Memo>>, loading: RwSignal<bool>) {
    let store = store.get_value();
    spawn_local(async move {
        match store.list_memos().await {
            Ok(list) => memos.set(list),
            Err(err) => logging::warn!("loading memos failed: {err}"),
        }
        loading.set(false);
    });
}

#[component]
fn MemoCard(memo: Memo, on_delete: Callback<String>) -> impl IntoView {
    let Memo {
        id,
        content,
        hashtags,
        created_at,
    } = memo;
    let when = format_relative(created_at, Utc::now());
    let tags = (!hashtags.is_empty()).then(|| {
        view! {
            <div data-ui-slot="hashtags">
                {hashtags
                    .into_iter()
                    .map(|tag| view! { <span data-ui-slot="hashtag">{format!("#{tag}")}</span> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <article class="memo-card" data-ui-slot="memo">
            <header>
                <time>{when}</time>
                <Button
                    variant=ButtonVariant::Danger
                    ui_slot="memo-delete"
                    on_click=Callback::new(move |_| on_delete.call(id.clone()))
                >
                    "Delete"
                </Button>
            </header>
            {tags}
            <p data-ui-slot="content">{content}</p>
        </article>
    }
}

#[component]
/// Memo board window contents.
pub fn MemoApp(
    /// DOM id for the compose box so the shell can focus it.
    #[prop(optional, into)]
    input_id: Option<String>,
    /// Backing store; defaults to an in-memory store scoped to this window.
    #[prop(optional)]
    store: Option<Rc<dyn MemoStore>>,
) -> impl IntoView {
    let store = store_value(store.unwrap_or_else(|| Rc::new(MemoryMemoStore::default())));
    let memos = create_rw_signal(Vec::<Memo>::new());
    let loading = create_rw_signal(true);
    let input = create_rw_signal(String::new());

    refresh(store, memos, loading);

    let post = move || {
        let content = input.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        let backend = store.get_value();
        spawn_local(async move {
            match backend.insert_memo(&content, Utc::now()).await {
                Ok(_) => {
                    input.set(String::new());
                    refresh(store, memos, loading);
                }
                Err(err) => logging::warn!("posting memo failed: {err}"),
            }
        });
    };

    let delete = Callback::new(move |id: String| {
        let backend = store.get_value();
        spawn_local(async move {
            match backend.delete_memo(&id).await {
                Ok(()) => refresh(store, memos, loading),
                Err(err) => logging::warn!("deleting memo failed: {err}"),
            }
        });
    });

    view! {
        <div class="app app-memo">
            <h2>"Memos"</h2>
            <div data-ui-slot="compose">
                <TextArea
                    id=input_id.unwrap_or_else(|| DEFAULT_INPUT_ID.to_string())
                    aria_label="New memo"
                    placeholder="Write something... Use #hashtags to categorize"
                    value=input
                    on_input=Callback::new(move |ev| input.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" && (ev.meta_key() || ev.ctrl_key()) {
                            ev.prevent_default();
                            post();
                        }
                    })
                />
                <div data-ui-slot="compose-footer">
                    <span>{move || format!("{} characters", input.with(|text| text.chars().count()))}</span>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| post())
                    >
                        "Post (⌘+Enter)"
                    </Button>
                </div>
            </div>
            <div data-ui-slot="memo-list">
                {move || {
                    if loading.get() {
                        view! { <EmptyState title="Loading..." /> }.into_view()
                    } else if memos.with(Vec::is_empty) {
                        view! { <EmptyState title="No memos yet. Write something!" /> }.into_view()
                    } else {
                        view! {
                            <For
                                each=move || memos.get()
                                key=|memo| memo.id.clone()
                                let:memo
                            >
                                <MemoCard memo on_delete=delete />
                            </For>
                        }
                            .into_view()
                    }
                }}
            </div>
        </div>
    }
}
