//! Small DOM utilities shared by the components.
//!
//! - **Feedback**: blocking `alert`/`confirm` prompts and a transient toast.
//! - **Page state**: body scroll lock while the modal is open, redirects.
//! - **Startup**: running the mount code once the document is parsed.
//! - **Delegation**: resolving a click target to the control it belongs to.
//!
//! All of them degrade to a logged no-op when the window or document is not
//! available.

use gloo_console::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Shows a blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Asks for a yes/no confirmation. Anything but an explicit "OK" is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Displays a temporary notification at the bottom of the screen, removed
/// after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    html_toast.set_class_name("toast");
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            html_toast.remove();
        });
    }
}

/// Prevents the page behind an overlay from scrolling, or releases it.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        warn!("scroll lock: <body> not found");
        return;
    };
    let value = if locked { "hidden" } else { "" };
    body.style().set_property("overflow", value).ok();
}

/// Navigates the current tab to `page`.
pub fn redirect(page: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(page).is_err() {
            warn!(format!("could not navigate to {}", page));
        }
    }
}

/// Runs `start` once the HTML document has been parsed.
pub fn on_document_ready(start: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document available, nothing to mount");
        return;
    };
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(start);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .is_err()
        {
            warn!("could not wait for DOMContentLoaded");
        }
    } else {
        start();
    }
}

/// Finds the element matching `selector` among the event target and its
/// ancestors, the way a delegated listener identifies which child was hit.
pub fn closest(target: Option<web_sys::EventTarget>, selector: &str) -> Option<Element> {
    target?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}
