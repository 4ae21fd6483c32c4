//! Update function for the admin modal.
//!
//! State transitions come from `common::modal`; this module carries out
//! their side effects (scroll lock, owner notification, network calls) and
//! the delete flow of the gallery screen.

use common::modal::Transition;
use gloo_console::{log, warn};
use web_sys::HtmlFormElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ModalComponent;
use crate::api::{self, log_failure};
use crate::helpers::{alert, confirm, set_scroll_lock, show_toast};

const CONFIRM_DELETE: &str = "Êtes-vous sûr de vouloir supprimer ce projet ?";
const DELETE_FAILED: &str = "La suppression a échoué. Veuillez réessayer.";
const PROJECT_ADDED: &str = "Projet ajouté.";
const ADD_FAILED: &str = "Une erreur est survenue lors de l'ajout du projet. Veuillez réessayer.";

pub fn update(component: &mut ModalComponent, ctx: &Context<ModalComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Open => {
            component.state.open();
            component.submit_ready = false;
            set_scroll_lock(true);
            true
        }
        Msg::Close => {
            let transition = component.state.close();
            apply_transition(component, ctx, transition)
        }
        Msg::Navigate(action) => {
            let transition = component.state.apply(action);
            apply_transition(component, ctx, transition)
        }
        Msg::LoadWorks => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::WorksLoaded(api::works::list().await));
            });
            false
        }
        Msg::WorksLoaded(Ok(works)) => {
            component.works.replace(works);
            component.works_loaded = true;
            component.works_error = false;
            component.emptied = false;
            true
        }
        Msg::WorksLoaded(Err(err)) => {
            log_failure("loading the modal project list", &err);
            component.works_loaded = true;
            component.works_error = true;
            true
        }
        Msg::DeleteRequested(id) => {
            if !confirm(CONFIRM_DELETE) {
                return false;
            }
            if !component.works.begin_delete(id) {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::works::delete(id).await;
                link.send_message(Msg::DeleteFinished { id, result });
            });
            true
        }
        Msg::DeleteFinished { id, result: Ok(()) } => {
            component.works.complete_delete(id);
            component.emptied = component.works.is_empty();
            ctx.props().on_projects_changed.emit(());
            true
        }
        Msg::DeleteFinished { id, result: Err(err) } => {
            log_failure(&format!("deleting project {}", id), &err);
            alert(DELETE_FAILED);
            component.works.abort_delete(id);
            true
        }
        Msg::SubmitReady(ready) => {
            if component.submit_ready == ready {
                return false;
            }
            component.submit_ready = ready;
            true
        }
        Msg::TriggerSubmit => {
            match component.form_ref.cast::<HtmlFormElement>() {
                Some(form) => {
                    if form.request_submit().is_err() {
                        warn!("modal: requestSubmit was rejected by the browser");
                    }
                }
                None => warn!("modal: add-project form not found, nothing to submit"),
            }
            false
        }
        Msg::CreateProject(payload) => {
            if !component.works.begin_create() {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::CreateFinished(api::works::create(payload).await));
            });
            true
        }
        Msg::CreateFinished(Ok(work)) => {
            component.works.finish_create();
            show_toast(PROJECT_ADDED);
            log!(format!("project {} added", work.id));
            ctx.link().send_message(Msg::LoadWorks);
            ctx.props().on_projects_changed.emit(());
            let transition = component.state.project_created();
            apply_transition(component, ctx, transition)
        }
        Msg::CreateFinished(Err(err)) => {
            component.works.finish_create();
            log_failure("adding project", &err);
            alert(ADD_FAILED);
            true
        }
    }
}

fn apply_transition(
    component: &mut ModalComponent,
    ctx: &Context<ModalComponent>,
    transition: Transition,
) -> bool {
    match transition {
        Transition::Closed => {
            set_scroll_lock(false);
            ctx.props().on_close.emit(());
        }
        Transition::FormEntered | Transition::None => {}
    }
    // The form reports its readiness again when it is rebuilt.
    component.submit_ready = false;
    true
}
