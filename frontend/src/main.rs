use gloo_console::warn;
use web_sys::Element;

use crate::app::App;
use crate::components::auth_link::AuthLink;
use crate::components::login::LoginComponent;
use crate::config::{AUTH_NAV_ROOT, LOGIN_ROOT, PORTFOLIO_ROOT};

mod api;
mod app;
mod components;
mod config;
mod helpers;
mod session;

fn main() {
    helpers::on_document_ready(mount);
}

/// Mounts every component whose host element exists on the current page.
fn mount() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        warn!("no document to mount into");
        return;
    };
    let root = |id: &str| -> Option<Element> { document.get_element_by_id(id) };

    let mut mounted = 0;
    if let Some(element) = root(AUTH_NAV_ROOT) {
        yew::Renderer::<AuthLink>::with_root(element).render();
        mounted += 1;
    }
    if let Some(element) = root(PORTFOLIO_ROOT) {
        yew::Renderer::<App>::with_root(element).render();
        mounted += 1;
    }
    if let Some(element) = root(LOGIN_ROOT) {
        yew::Renderer::<LoginComponent>::with_root(element).render();
        mounted += 1;
    }
    if mounted == 0 {
        warn!(format!(
            "none of #{}, #{}, #{} found on this page",
            AUTH_NAV_ROOT, PORTFOLIO_ROOT, LOGIN_ROOT
        ));
    }
}
