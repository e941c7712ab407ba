use super::state::{self, ConfirmError, EmailError, MAX_SCORE, NameError, PasswordError};
use crate::core::store::PageStore;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const SUCCESS_BANNER: &str = "🎉 Registration successful!";

#[function_component(SignupForm)]
pub(crate) fn signup_form() -> Html {
    let signup = use_selector(|store: &PageStore| store.signup.clone());
    let dispatch = Dispatch::<PageStore>::new();

    let on_name = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dispatch.reduce_mut(|store| state::edit_name(&mut store.signup, input.value()));
            }
        })
    };
    let on_email = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dispatch.reduce_mut(|store| state::edit_email(&mut store.signup, input.value()));
            }
        })
    };
    let on_password = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dispatch.reduce_mut(|store| state::edit_password(&mut store.signup, input.value()));
            }
        })
    };
    let on_confirm = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                dispatch.reduce_mut(|store| state::edit_confirm(&mut store.signup, input.value()));
            }
        })
    };
    let on_submit = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        dispatch.reduce_mut(|store| state::submit(&mut store.signup));
    });

    let meter_value = signup.strength.unwrap_or(0);
    let strength_text = signup.strength.map_or("", state::strength_label);
    let strength_style = signup
        .strength
        .map(|score| format!("color: {}", state::strength_tone(score).color()));

    html! {
        <form id="signup-form" class="signup-form" novalidate="true" onsubmit={on_submit}>
            <div class="form-field">
                <label for="signup-name">{"Full name"}</label>
                <input
                    id="signup-name"
                    type="text"
                    autocomplete="name"
                    value={signup.name.clone()}
                    aria-describedby="signup-name-error"
                    aria-invalid={signup.name_error.is_some().then_some("true")}
                    oninput={on_name}
                />
                <p id="signup-name-error" class="field-error" aria-live="polite">
                    {signup.name_error.map_or("", NameError::message)}
                </p>
            </div>
            <div class="form-field">
                <label for="signup-email">{"Email"}</label>
                <input
                    id="signup-email"
                    type="email"
                    autocomplete="email"
                    value={signup.email.clone()}
                    aria-describedby="signup-email-error"
                    aria-invalid={signup.email_error.is_some().then_some("true")}
                    oninput={on_email}
                />
                <p id="signup-email-error" class="field-error" aria-live="polite">
                    {signup.email_error.map_or("", EmailError::message)}
                </p>
            </div>
            <div class="form-field">
                <label for="signup-password">{"Password"}</label>
                <input
                    id="signup-password"
                    type="password"
                    autocomplete="new-password"
                    value={signup.password.clone()}
                    aria-describedby="signup-password-error"
                    aria-invalid={signup.password_error.is_some().then_some("true")}
                    oninput={on_password}
                />
                <div class="strength-row">
                    <progress
                        class="strength-meter"
                        value={meter_value.to_string()}
                        max={MAX_SCORE.to_string()}
                        aria-label="Password strength"
                    />
                    <span class="strength-label" style={strength_style}>{strength_text}</span>
                </div>
                <p id="signup-password-error" class="field-error" aria-live="polite">
                    {signup.password_error.map_or("", PasswordError::message)}
                </p>
            </div>
            <div class="form-field">
                <label for="signup-confirm">{"Confirm password"}</label>
                <input
                    id="signup-confirm"
                    type="password"
                    autocomplete="new-password"
                    value={signup.confirm.clone()}
                    aria-describedby="signup-confirm-error"
                    aria-invalid={signup.confirm_error.is_some().then_some("true")}
                    oninput={on_confirm}
                />
                <p id="signup-confirm-error" class="field-error" aria-live="polite">
                    {signup.confirm_error.map_or("", ConfirmError::message)}
                </p>
            </div>
            <button type="submit">{"Create account"}</button>
            <p class="form-success" role="status">
                {if signup.submitted { SUCCESS_BANNER } else { "" }}
            </p>
        </form>
    }
}
