use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::LoginComponent;

pub fn view(component: &LoginComponent, ctx: &Context<LoginComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <section id="login-section">
            <h2>{ "Log In" }</h2>
            <form id="login-form" {onsubmit}>
                <label for="email">{ "E-mail" }</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    required={true}
                    value={component.email.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::EmailChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <label for="password">{ "Mot de passe" }</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    required={true}
                    value={component.password.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::PasswordChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                if let Some(failure) = component.error {
                    <p id="login-error" class="error-message">{ failure.to_string() }</p>
                }
                <input type="submit" value="Se connecter" disabled={component.pending} />
            </form>
            <a href="#" class="forgot-password">{ "Mot de passe oublié" }</a>
        </section>
    }
}
