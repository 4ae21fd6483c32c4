use common::validation::validate_image;
use gloo_file::ObjectUrl;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CategoryOptions, ProjectForm, SelectedImage};
use crate::api::{self, log_failure};
use crate::helpers::alert;

const INCOMPLETE: &str = "Veuillez remplir tous les champs requis.";
const ADD_FAILED: &str = "Une erreur est survenue lors de l'ajout du projet. Veuillez réessayer.";

pub fn update(component: &mut ProjectForm, ctx: &Context<ProjectForm>, msg: Msg) -> bool {
    match msg {
        Msg::CategoriesLoaded(Ok(categories)) => {
            component.categories = CategoryOptions::Loaded(categories);
            true
        }
        Msg::CategoriesLoaded(Err(err)) => {
            log_failure("loading the form categories", &err);
            component.categories = CategoryOptions::Failed;
            true
        }
        Msg::TitleChanged(title) => {
            component.title = title;
            true
        }
        Msg::CategoryChanged(category) => {
            component.category = category;
            true
        }
        Msg::ImageSelected(None) => {
            component.clear_image();
            true
        }
        Msg::ImageSelected(Some(file)) => {
            match validate_image(&file.type_(), file.size() as u64) {
                Ok(()) => {
                    let preview = ObjectUrl::from(gloo_file::File::from(file.clone()));
                    component.image = Some(SelectedImage { file, preview });
                }
                Err(rejection) => {
                    alert(&rejection.to_string());
                    component.clear_image();
                }
            }
            true
        }
        Msg::Submit => {
            let props = ctx.props();
            if props.submitting {
                return false;
            }
            let draft = component.draft();
            let Some(image) = component.image.as_ref().filter(|_| draft.is_complete()) else {
                alert(INCOMPLETE);
                return false;
            };
            match api::works::multipart(draft.trimmed_title(), &draft.category, &image.file) {
                Ok(payload) => props.on_submit.emit(payload),
                Err(err) => {
                    log_failure("building the add-project payload", &err);
                    alert(ADD_FAILED);
                }
            }
            false
        }
    }
}
