//! Public gallery: filter bar plus the grid of work tiles.
//!
//! Responsibilities
//! - Own the work cache and the active filter.
//! - Fetch categories once and works on creation.
//! - Re-fetch works whenever the `revision` prop changes, which the page bumps
//!   after every create/delete made through the modal.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::GalleryProps;
pub use state::GalleryComponent;

use crate::api;

impl Component for GalleryComponent {
    type Message = Msg;
    type Properties = GalleryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::CategoriesLoaded(api::categories::list().await));
        });
        ctx.link().send_message(Msg::Refresh);
        GalleryComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().revision != old_props.revision {
            ctx.link().send_message(Msg::Refresh);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
