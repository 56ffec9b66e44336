//! Login / sign-up modal.
//!
//! The form lives only while the modal is mounted, so closing it discards
//! input and errors. A successful submit reports back through
//! `on_login_success`; the owner decides what that means for root state.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

use crate::state::forms::LoginFormState;
use crate::util::validation::{FIELD_EMAIL, FIELD_PASSWORD};

/// Input CSS class with an error modifier.
pub(crate) fn input_class(has_error: bool) -> &'static str {
    if has_error { "field__input field__input--error" } else { "field__input" }
}

/// Inline error line under a field, if any.
pub(crate) fn error_line(message: Option<String>) -> Option<impl IntoView> {
    message.map(|text| view! { <p class="field__error">{text}</p> })
}

fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn LoginModal(on_close: Callback<()>, on_login_success: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.try_update(LoginFormState::submit).unwrap_or_default() {
            #[cfg(feature = "hydrate")]
            log::info!("login: authenticated");
            on_login_success.run(());
        }
    };

    let mode = Memo::new(move |_| form.with(|f| f.mode));
    let show_password = Memo::new(move |_| form.with(|f| f.show_password));
    let has_error = move |field: &'static str| form.with(|f| f.errors.has(field));
    let message = move |field: &'static str| form.with(|f| f.errors.message(field));

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--login"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <div>
                        <h2>{move || mode.get().heading()}</h2>
                        <p class="dialog__subtitle">{move || mode.get().subtitle()}</p>
                    </div>
                    <button class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>

                <form class="dialog__form" on:submit=on_submit novalidate=true>
                    <div class="field">
                        <label class="field__label">"✉ Email Address"</label>
                        <input
                            type="email"
                            class=move || input_class(has_error(FIELD_EMAIL))
                            placeholder="your@email.com"
                            prop:value=move || form.with(|f| f.form.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                        {move || error_line(message(FIELD_EMAIL))}
                    </div>

                    <div class="field">
                        <label class="field__label">"🔒 Password"</label>
                        <div class="field__password">
                            <input
                                type=move || password_input_type(show_password.get())
                                class=move || input_class(has_error(FIELD_PASSWORD))
                                placeholder="••••••••"
                                prop:value=move || form.with(|f| f.form.password.clone())
                                on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                            />
                            <button
                                type="button"
                                class="field__reveal"
                                title=move || if show_password.get() { "Hide password" } else { "Show password" }
                                on:click=move |_| form.update(LoginFormState::toggle_password_visibility)
                            >
                                {move || if show_password.get() { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        {move || error_line(message(FIELD_PASSWORD))}
                    </div>

                    <button type="submit" class="btn btn--primary btn--block">
                        {move || mode.get().submit_label()}
                    </button>
                </form>

                <div class="dialog__divider">
                    <span>"or"</span>
                </div>
                <button type="button" class="btn btn--outline btn--block">
                    "Continue with Google"
                </button>

                <div class="dialog__switch">
                    {move || mode.get().switch_prompt().0}
                    " "
                    <button class="dialog__link" on:click=move |_| form.update(LoginFormState::toggle_mode)>
                        {move || mode.get().switch_prompt().1}
                    </button>
                </div>
            </div>
        </div>
    }
}
