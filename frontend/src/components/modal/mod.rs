//! Admin modal: project list with delete controls and the add-project form.
//!
//! Responsibilities
//! - Drive the `common::modal::ModalState` machine from the `open` prop, the
//!   delegated navigation clicks and the Escape key.
//! - Lock page scroll while visible.
//! - Keep its own copy of the project list and notify the page after every
//!   create/delete so the public gallery can refresh.
//!
//! The component is mounted once per page and only hidden when closed, so
//! reopening does not rebuild it.

use gloo_console::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

mod form;
mod gallery;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ModalProps;
pub use state::ModalComponent;

use crate::helpers::set_scroll_lock;

impl Component for ModalComponent {
    type Message = Msg;
    type Properties = ModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::LoadWorks);
        if ctx.props().open {
            ctx.link().send_message(Msg::Open);
        }
        ModalComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        match (old_props.open, ctx.props().open) {
            (false, true) => ctx.link().send_message(Msg::Open),
            (true, false) => ctx.link().send_message(Msg::Close),
            _ => {}
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.escape_listener.is_none() {
            self.escape_listener = listen_for_escape(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(listener) = self.escape_listener.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
        if self.state.is_visible() {
            set_scroll_lock(false);
        }
    }
}

/// Registers the document-level `keydown` handler closing the modal on
/// Escape. The returned closure must be kept alive for as long as the
/// handler is registered.
fn listen_for_escape(ctx: &Context<ModalComponent>) -> Option<Closure<dyn FnMut(KeyboardEvent)>> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("modal: no document, Escape will not close the modal");
        return None;
    };
    let link = ctx.link().clone();
    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            link.send_message(Msg::Close);
        }
    });
    if document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .is_err()
    {
        warn!("modal: could not register the Escape handler");
        return None;
    }
    Some(listener)
}
