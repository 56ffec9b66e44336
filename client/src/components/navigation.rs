//! Top navigation bar: logo, tab strip, login/avatar, and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives read-only signals from `HomePage` and reports clicks back through
//! callbacks; the page decides how root state changes.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::ui::Tab;

/// CSS class for a tab button, with an active modifier for the current tab.
fn tab_button_class(tab: Tab, active: Tab) -> &'static str {
    if tab == active { "nav__tab nav__tab--active" } else { "nav__tab" }
}

/// Label shown on the hamburger toggle.
fn menu_toggle_glyph(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

#[component]
pub fn Navigation(
    #[prop(into)] active_tab: Signal<Tab>,
    #[prop(into)] avatar: Signal<Option<&'static str>>,
    #[prop(into)] menu_open: Signal<bool>,
    on_tab_change: Callback<Tab>,
    on_login_click: Callback<()>,
    on_toggle_menu: Callback<()>,
) -> impl IntoView {
    let select = move |tab: Tab| on_tab_change.run(tab);

    let tab_buttons = move |extra_class: &'static str| {
        Tab::ALL
            .iter()
            .copied()
            .map(|tab| {
                view! {
                    <button
                        class=move || format!("{} {extra_class}", tab_button_class(tab, active_tab.get()))
                        on:click=move |_| select(tab)
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let account = move || match avatar.get() {
        Some(initial) => view! {
            <button class="nav__avatar" title="My Profile" on:click=move |_| select(Tab::Profile)>
                {initial}
            </button>
        }
        .into_any(),
        None => view! {
            <button class="btn btn--primary nav__login" on:click=move |_| on_login_click.run(())>
                "Login"
            </button>
        }
        .into_any(),
    };

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <button class="nav__logo" on:click=move |_| select(Tab::Dashboard)>
                    <span class="nav__logo-mark">"♻"</span>
                    <span class="nav__logo-text">"ECONNECTO"</span>
                </button>

                <div class="nav__tabs">{tab_buttons("")}</div>

                <div class="nav__account">{account}</div>

                <button
                    class="nav__menu-toggle"
                    title="Menu"
                    on:click=move |_| on_toggle_menu.run(())
                >
                    {move || menu_toggle_glyph(menu_open.get())}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav__mobile">
                    {tab_buttons("nav__tab--mobile")}
                    <div class="nav__mobile-account">{account}</div>
                </div>
            </Show>
        </nav>
    }
}
