use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{GalleryComponent, LOAD_ERROR};
use crate::api::{self, log_failure};

pub fn update(component: &mut GalleryComponent, ctx: &Context<GalleryComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Refresh => {
            let ticket = component.cache.begin_refresh();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::works::list().await;
                link.send_message(Msg::WorksLoaded { ticket, result });
            });
            false
        }
        Msg::WorksLoaded { ticket, result } => match result {
            Ok(works) => {
                if component.cache.apply(ticket, works) {
                    component.load_error = None;
                    true
                } else {
                    false
                }
            }
            Err(err) => {
                log_failure("gallery refresh", &err);
                if component.cache.is_latest(ticket) {
                    component.load_error = Some(LOAD_ERROR);
                    true
                } else {
                    false
                }
            }
        },
        Msg::CategoriesLoaded(Ok(categories)) => {
            component.categories = categories;
            true
        }
        Msg::CategoriesLoaded(Err(err)) => {
            log_failure("loading filter categories", &err);
            false
        }
        Msg::SelectFilter(filter) => {
            if component.active == filter {
                return false;
            }
            component.active = filter;
            true
        }
    }
}
