//! Browser queries and DOM side effects used by the runtime effect executor.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{AppId, Viewport};

/// DOM id an app gives its primary text field so the shell can focus it on open.
pub fn window_primary_input_dom_id(app_id: AppId) -> String {
    format!("window-primary-input-{}", app_id.slug())
}

#[cfg(target_arch = "wasm32")]
fn focus_element_by_id(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(element) = element {
        let _ = element.focus();
    }
}

/// Moves keyboard focus into a window's primary input, if it renders one.
pub(crate) fn focus_window_input(app_id: AppId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let id = window_primary_input_dom_id(app_id);
        // A freshly opened window mounts its body after this runs; look the input up next task.
        let callback = Closure::once_into_js(move || focus_element_by_id(&id));
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = app_id;
}

#[cfg(target_arch = "wasm32")]
fn css_pixels(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> Option<i32> {
    value.ok()?.as_f64().map(|px| px.round() as i32)
}

/// Current browser viewport, or the default desktop size outside the browser.
pub(crate) fn browser_viewport() -> Viewport {
    let fallback = Viewport::default();
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return Viewport {
                width: css_pixels(window.inner_width()).unwrap_or(fallback.width),
                height: css_pixels(window.inner_height()).unwrap_or(fallback.height),
            };
        }
    }
    fallback
}
