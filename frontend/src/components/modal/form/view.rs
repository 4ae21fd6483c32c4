use common::validation::ACCEPTED_IMAGE_TYPES;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CategoryOptions, ProjectForm};

pub fn view(component: &ProjectForm, ctx: &Context<ProjectForm>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form
            id="add-project-form"
            class="modal-form"
            novalidate={true}
            ref={ctx.props().form_ref.clone()}
            {onsubmit}
        >
            { build_image_picker(component, link) }

            <button type="submit" id="internal-submit" hidden={true}></button>

            <div class="form-group">
                <label for="title">{ "Titre" }</label>
                <input
                    type="text"
                    id="title"
                    name="title"
                    value={component.title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::TitleChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            </div>

            <div class="form-group">
                <label for="category">{ "Catégorie" }</label>
                <select
                    id="category"
                    name="category"
                    onchange={link.callback(|e: Event| {
                        Msg::CategoryChanged(e.target_unchecked_into::<HtmlSelectElement>().value())
                    })}
                >
                    { build_category_options(component) }
                </select>
            </div>
        </form>
    }
}

/// Upload area: the preview once an image was accepted, otherwise the
/// "add a photo" placeholder. The label keeps the hidden file input
/// reachable in both cases.
fn build_image_picker(component: &ProjectForm, link: &Scope<ProjectForm>) -> Html {
    let has_image = component.image.is_some();
    html! {
        <div class={classes!("form-group", "image-upload", has_image.then_some("has-image"))}>
            <label for="image" class="image-upload-label">
                if let Some(image) = &component.image {
                    <img id="image-preview" src={image.preview.to_string()} alt="Aperçu de l'image" />
                } else {
                    <span class="upload-icon">{ "+" }</span>
                    <span class="upload-btn-text">{ "Ajouter une photo" }</span>
                    <p class="upload-info">{ "jpg, png : 4Mo max" }</p>
                }
            </label>
            <input
                type="file"
                id="image"
                name="image"
                accept={ACCEPTED_IMAGE_TYPES.join(", ")}
                hidden={true}
                ref={component.file_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input = e.target_unchecked_into::<HtmlInputElement>();
                    Msg::ImageSelected(input.files().and_then(|files| files.get(0)))
                })}
            />
        </div>
    }
}

fn build_category_options(component: &ProjectForm) -> Html {
    match &component.categories {
        CategoryOptions::Loading => html! {
            <option value="" disabled={true} selected={true}>{ "Chargement…" }</option>
        },
        CategoryOptions::Failed => html! {
            <option value="" disabled={true} selected={true}>{ "Erreur : catégories indisponibles" }</option>
        },
        CategoryOptions::Loaded(categories) => {
            let options = categories
                .iter()
                .map(|category| {
                    let value = category.id.to_string();
                    let selected = component.category == value;
                    html! {
                        <option key={category.id} {value} {selected}>{ category.name.clone() }</option>
                    }
                })
                .collect::<Html>();
            html! {
                <>
                    <option value="" disabled={true} selected={component.category.is_empty()}>
                        { "-- Choisir une catégorie --" }
                    </option>
                    { options }
                </>
            }
        }
    }
}
