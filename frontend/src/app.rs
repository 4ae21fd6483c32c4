use yew::{html, Component, Context, Html};

use crate::components::gallery::GalleryComponent;
use crate::components::modal::ModalComponent;
use crate::session::credentials;

pub enum Msg {
    OpenModal,
    ModalClosed,
    /// A project was created or deleted through the modal.
    ProjectsChanged,
}

/// Portfolio section: edit affordance, public gallery and admin modal.
pub struct App {
    authenticated: bool,
    modal_open: bool,
    /// Bumped after each change so the gallery re-fetches its works.
    revision: u64,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            authenticated: credentials().is_authenticated(),
            modal_open: false,
            revision: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenModal => {
                self.modal_open = true;
                true
            }
            Msg::ModalClosed => {
                self.modal_open = false;
                true
            }
            Msg::ProjectsChanged => {
                self.revision = self.revision.wrapping_add(1);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <div id="portfolio-edit-group" class="portfolio-title">
                    <h2>{ "Mes Projets" }</h2>
                    if self.authenticated {
                        <button
                            type="button"
                            id="edit-btn"
                            class="edit-btn"
                            onclick={link.callback(|_| Msg::OpenModal)}
                        >
                            <i class="fa-regular fa-pen-to-square"></i>
                            { " modifier" }
                        </button>
                    }
                </div>
                <GalleryComponent show_filters={!self.authenticated} revision={self.revision} />
                if self.authenticated {
                    <ModalComponent
                        open={self.modal_open}
                        on_close={link.callback(|_| Msg::ModalClosed)}
                        on_projects_changed={link.callback(|_| Msg::ProjectsChanged)}
                    />
                }
            </>
        }
    }
}
