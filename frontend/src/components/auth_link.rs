//! "Login" / "Logout" entry of the navigation bar.

use common::login::auth_link_label;
use gloo_console::warn;
use yew::{html, Component, Context, Html};

use crate::config::{HOME_PAGE, LOGIN_PAGE};
use crate::helpers::redirect;
use crate::session::credentials;

pub enum Msg {
    Logout,
}

pub struct AuthLink {
    authenticated: bool,
}

impl Component for AuthLink {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            authenticated: credentials().is_authenticated(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Logout => {
                if let Err(err) = credentials().clear() {
                    warn!(format!("logout could not clear the session: {}", err));
                }
                self.authenticated = false;
                redirect(HOME_PAGE);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.authenticated {
            let onclick = ctx.link().callback(|e: yew::MouseEvent| {
                e.prevent_default();
                Msg::Logout
            });
            html! { <a id="auth-link" href="#" {onclick}>{ auth_link_label(true) }</a> }
        } else {
            html! { <a id="auth-link" href={LOGIN_PAGE}>{ auth_link_label(false) }</a> }
        }
    }
}
