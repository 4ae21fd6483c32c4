use common::login::{resolve_login, LoginFailure, LoginRequest};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginComponent;
use crate::api::{self, log_failure};
use crate::helpers::redirect;
use crate::session::credentials;

pub fn update(component: &mut LoginComponent, ctx: &Context<LoginComponent>, msg: Msg) -> bool {
    match msg {
        Msg::EmailChanged(email) => {
            component.email = email;
            false
        }
        Msg::PasswordChanged(password) => {
            component.password = password;
            false
        }
        Msg::Submit => {
            if component.pending {
                return false;
            }
            component.error = None;
            component.pending = true;

            let request = LoginRequest::new(&component.email, &component.password);
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = match api::users::login(&request).await {
                    Ok(reply) => {
                        if !(200..300).contains(&reply.status) {
                            error!(format!("login rejected with status {}", reply.status));
                        }
                        resolve_login(&credentials(), reply.status, &reply.body)
                    }
                    Err(err) => {
                        log_failure("login request", &err);
                        Err(LoginFailure::Server)
                    }
                };
                link.send_message(Msg::Finished(outcome));
            });
            true
        }
        Msg::Finished(Ok(page)) => {
            redirect(page);
            false
        }
        Msg::Finished(Err(failure)) => {
            component.pending = false;
            component.error = Some(failure);
            true
        }
    }
}
