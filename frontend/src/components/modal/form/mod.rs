//! Add-project form shown on the modal's second screen.
//!
//! Responsibilities
//! - Load the categories for the select (a disabled error option on failure).
//! - Validate the chosen image (type and size) and preview it.
//! - Report to the modal whether its external "Valider" button may be
//!   enabled, once right after construction and after every change.
//! - Build the three-field multipart payload and hand it to the modal, which
//!   sends it and handles the outcome.
//!
//! A fresh instance is created every time the form screen is entered.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProjectFormProps;
pub use state::ProjectForm;

use crate::api;

impl Component for ProjectForm {
    type Message = Msg;
    type Properties = ProjectFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::CategoriesLoaded(api::categories::list().await));
        });
        ProjectForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let rerender = update::update(self, ctx, msg);
        let props = ctx.props();
        self.announce_readiness(props.submitting, &props.on_ready_change);
        rerender
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.announce_readiness(props.submitting, &props.on_ready_change);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let props = ctx.props();
            self.announce_readiness(props.submitting, &props.on_ready_change);
        }
    }
}
