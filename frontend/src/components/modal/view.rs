//! View rendering for the admin modal.
//!
//! Everything that depends on the active screen is read from
//! `ModalState::layout`. Navigation uses a single delegated click handler on
//! the overlay that maps the clicked control to a `NavAction`.

use common::modal::NavAction;
use web_sys::{EventTarget, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::form::ProjectForm;
use super::gallery::modal_gallery;
use super::messages::Msg;
use super::state::ModalComponent;
use crate::helpers::closest;

/// Controls handled by the delegated navigation listener.
const NAV_CONTROLS: [(&str, NavAction); 3] = [
    ("#modal-close-btn", NavAction::Close),
    ("#add-project-btn", NavAction::ShowForm),
    ("#modal-undo-btn", NavAction::ShowGallery),
];

pub fn view(component: &ModalComponent, ctx: &Context<ModalComponent>) -> Html {
    let link = ctx.link();
    let layout = component.state.layout();

    let onclick = {
        let wrapper_ref = component.wrapper_ref.clone();
        link.batch_callback(move |e: MouseEvent| {
            resolve_navigation(&e, &wrapper_ref).map(Msg::Navigate)
        })
    };

    html! {
        <div
            id="modal-wrapper"
            class="modal"
            ref={component.wrapper_ref.clone()}
            style={display(layout.visible, "flex")}
            aria-hidden={(!layout.visible).to_string()}
            {onclick}
        >
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <div id="modal-header">
                    <div id="modal-nav">
                        <button id="modal-undo-btn" type="button" style={display(layout.back_visible, "block")}>
                            <img src="./assets/icons/arrow-left.png" alt="retour" />
                        </button>
                        <button id="modal-close-btn" type="button">
                            <img src="./assets/icons/x-cross.png" alt="fermer" />
                        </button>
                    </div>
                    <h3 id="modal-title">{ layout.title }</h3>
                </div>

                <div id="modal-body">
                    { modal_gallery(component, link, layout.gallery_visible) }
                    <div class="modal-addproject" id="modal-addproject" style={display(layout.form_visible, "block")}>
                        if layout.form_visible {
                            <ProjectForm
                                form_ref={component.form_ref.clone()}
                                on_ready_change={link.callback(Msg::SubmitReady)}
                                submitting={component.works.is_creating()}
                                on_submit={link.callback(Msg::CreateProject)}
                            />
                        }
                    </div>
                </div>

                { build_footer(component, link, layout.add_visible, layout.submit_visible) }
            </div>
        </div>
    }
}

fn build_footer(
    component: &ModalComponent,
    link: &Scope<ModalComponent>,
    add_visible: bool,
    submit_visible: bool,
) -> Html {
    let ready = component.submit_ready && !component.works.is_creating();
    html! {
        <div id="modal-footer">
            <span class="separator"></span>
            <button id="add-project-btn" type="button" style={display(add_visible, "block")}>
                { "Ajouter une photo" }
            </button>
            <button
                id="submit-project-btn"
                type="button"
                class={if ready { "btn-active" } else { "btn-disabled" }}
                style={display(submit_visible, "block")}
                disabled={!ready}
                onclick={link.callback(|_: MouseEvent| Msg::TriggerSubmit)}
            >
                { "Valider" }
            </button>
        </div>
    }
}

/// Maps a click anywhere in the modal to a navigation request: a click on
/// the overlay itself closes, a click inside one of `NAV_CONTROLS` triggers
/// its action, anything else is ignored.
fn resolve_navigation(event: &MouseEvent, wrapper_ref: &NodeRef) -> Option<NavAction> {
    let target = event.target()?;
    if let Some(wrapper) = wrapper_ref.get() {
        if target == EventTarget::from(wrapper) {
            return Some(NavAction::Close);
        }
    }
    NAV_CONTROLS
        .iter()
        .find(|(selector, _)| closest(Some(target.clone()), selector).is_some())
        .map(|(_, action)| *action)
}

pub(super) fn display(visible: bool, shown_as: &str) -> String {
    format!("display:{}", if visible { shown_as } else { "none" })
}
