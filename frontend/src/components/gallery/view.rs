use common::gallery::filter_choices;
use common::model::work::Work;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::GalleryComponent;

pub fn view(component: &GalleryComponent, ctx: &Context<GalleryComponent>) -> Html {
    let show_filters = ctx.props().show_filters;
    let filter = component.effective_filter(show_filters);

    html! {
        <>
            if show_filters {
                { build_filter_bar(component, ctx.link()) }
            }
            <div class="gallery">
                if let Some(message) = component.load_error {
                    <p class="error-message">{ message }</p>
                } else {
                    { for component.cache.filtered(filter).map(work_tile) }
                }
            </div>
        </>
    }
}

/// "Tous" followed by one button per category; only the active one carries
/// the `active` class.
fn build_filter_bar(component: &GalleryComponent, link: &Scope<GalleryComponent>) -> Html {
    let buttons = filter_choices(&component.categories)
        .into_iter()
        .map(|choice| {
            let filter = choice.filter;
            html! {
                <button
                    type="button"
                    class={classes!("filter-button", (component.active == filter).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectFilter(filter))}
                >
                    { choice.label }
                </button>
            }
        })
        .collect::<Html>();

    html! { <div class="filter-group">{ buttons }</div> }
}

fn work_tile(work: &Work) -> Html {
    html! {
        <figure key={work.id} data-id={work.id.to_string()}>
            <img src={work.image_url.clone()} alt={work.title.clone()} />
            <figcaption>{ work.title.clone() }</figcaption>
        </figure>
    }
}
