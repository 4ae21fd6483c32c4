use common::modal::{ModalState, ModalWorks};
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

pub struct ModalComponent {
    /// Visibility and active screen.
    pub state: ModalState,

    /// Projects listed on the gallery screen and their in-flight deletes.
    pub works: ModalWorks,

    /// `false` until the first list fetch resolved.
    pub works_loaded: bool,

    /// Set when the last fetch of the list failed.
    pub works_error: bool,

    /// Set when the list became empty through a deletion, which changes the
    /// empty-state wording.
    pub emptied: bool,

    /// Whether the "Valider" footer button is enabled, as reported by the form.
    pub submit_ready: bool,

    /// The add-project `<form>`; the footer button submits it through this.
    pub form_ref: NodeRef,

    /// The overlay element, used to tell overlay clicks from content clicks.
    pub wrapper_ref: NodeRef,

    /// Document `keydown` handler, kept alive while registered.
    pub escape_listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl ModalComponent {
    pub fn new() -> Self {
        Self {
            state: ModalState::default(),
            works: ModalWorks::default(),
            works_loaded: false,
            works_error: false,
            emptied: false,
            submit_ready: false,
            form_ref: NodeRef::default(),
            wrapper_ref: NodeRef::default(),
            escape_listener: None,
        }
    }
}
