//! Terminal desktop app: a tiny command interpreter with a scrolling transcript.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod session;

use leptos::ev::KeyboardEvent;
use leptos::html::Div;
use leptos::*;
use system_ui::{TerminalLine, TerminalPrompt, TerminalSurface};
use wasm_bindgen::JsCast;

pub use session::{
    CommandError, LineTone, TerminalCommand, TerminalSession, TranscriptLine, MAX_COMMAND_LENGTH,
    MAX_TRANSCRIPT_LINES,
};

const DEFAULT_INPUT_ID: &str = "terminal-input";

#[component]
/// Terminal app window contents.
pub fn TerminalApp(
    /// DOM id for the command input so the shell can focus it.
    #[prop(optional, into)]
    input_id: Option<String>,
) -> impl IntoView {
    let input_id = input_id.unwrap_or_else(|| DEFAULT_INPUT_ID.to_string());
    let session = create_rw_signal(TerminalSession::new());
    let input = create_rw_signal(String::new());
    let bottom = create_node_ref::<Div>();

    create_effect(move |_| {
        session.with(|_| ());
        if let Some(bottom) = bottom.get() {
            bottom.scroll_into_view();
        }
    });

    let submit = move || {
        let line = input.get_untracked();
        session.update(|session| session.submit(&line, chrono::Local::now()));
        input.set(String::new());
    };

    let on_keydown = move |ev: KeyboardEvent| match ev.key().as_str() {
        "Enter" => submit(),
        "ArrowUp" => {
            ev.prevent_default();
            if let Some(recalled) = session.try_update(|session| session.recall_previous()).flatten() {
                input.set(recalled);
            }
        }
        "ArrowDown" => {
            ev.prevent_default();
            if let Some(recalled) = session.try_update(|session| session.recall_next()).flatten() {
                input.set(recalled);
            }
        }
        _ => {}
    };

    let focus_id = input_id.clone();
    let focus_input = Callback::new(move |_| {
        if let Some(element) = document().get_element_by_id(&focus_id) {
            if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        }
    });

    let indexed_lines = move || {
        session.with(|session| {
            session
                .lines()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <TerminalSurface on_click=focus_input>
            <For each=indexed_lines key=|(idx, line)| (*idx, line.text.clone()) let:entry>
                <TerminalLine text=entry.1.text tone=entry.1.tone.token() />
            </For>
            <TerminalPrompt prompt="$">
                <input
                    id=input_id
                    class="terminal-input"
                    type="text"
                    aria-label="Terminal command"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    autocomplete="off"
                    spellcheck="false"
                />
            </TerminalPrompt>
            <div node_ref=bottom></div>
        </TerminalSurface>
    }
}
