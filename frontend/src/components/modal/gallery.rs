//! Gallery screen of the modal: one card per project with a delete button.
//!
//! Clicks are handled by one listener on the list container, which resolves
//! the clicked delete button to its card's `data-id`. Cards added later are
//! covered without attaching anything to them.

use common::model::work::Work;
use web_sys::MouseEvent;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ModalComponent;
use super::view::display;
use crate::helpers::closest;

const EMPTY: &str = "Aucun projet à afficher.";
const EMPTIED: &str = "La galerie est maintenant vide.";
const LOAD_FAILED: &str = "Impossible de charger la galerie. Veuillez réessayer.";

pub fn modal_gallery(component: &ModalComponent, link: &Scope<ModalComponent>, visible: bool) -> Html {
    let onclick = link.batch_callback(|e: MouseEvent| delete_target(&e).map(Msg::DeleteRequested));

    let content = if component.works_error {
        html! { <p class="error-message">{ LOAD_FAILED }</p> }
    } else if !component.works_loaded {
        html! {}
    } else if component.works.is_empty() {
        let message = if component.emptied { EMPTIED } else { EMPTY };
        html! { <p class="empty-gallery-message">{ message }</p> }
    } else {
        component
            .works
            .works()
            .iter()
            .map(|work| project_card(work, component.works.is_pending(work.id)))
            .collect::<Html>()
    };

    html! {
        <div class="modal-gallery" id="modal-gallery" style={display(visible, "grid")} {onclick}>
            { content }
        </div>
    }
}

fn project_card(work: &Work, deleting: bool) -> Html {
    html! {
        <div class="modal-card" key={work.id} data-id={work.id.to_string()}>
            <img src={work.image_url.clone()} alt={work.title.clone()} />
            <button
                type="button"
                class="delete-project-btn"
                aria-label="Supprimer le projet"
                disabled={deleting}
            >
                <img src="./assets/icons/trash.png" alt="Icône de corbeille" />
            </button>
        </div>
    }
}

/// Project id of the card whose delete button was clicked, if any.
fn delete_target(event: &MouseEvent) -> Option<u32> {
    let button = closest(event.target(), ".delete-project-btn")?;
    let card = button.closest(".modal-card").ok().flatten()?;
    card.get_attribute("data-id")?.parse().ok()
}
