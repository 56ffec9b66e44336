//! Root view: owns tab, modal, and auth state for the whole app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Children receive read-only signals plus callbacks. A child requests a
//! change (switch tab, open a modal, log in); this page applies it to the
//! root state and the view re-renders. The active panel is keyed on the tab
//! alone, so opening a modal does not rebuild it.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::login_modal::LoginModal;
use crate::components::navigation::Navigation;
use crate::components::page_layout::PageLayout;
use crate::components::pickup_modal::PickupModal;
use crate::pages::awareness::AwarenessPanel;
use crate::pages::dashboard::DashboardPanel;
use crate::pages::leaderboard::LeaderboardPanel;
use crate::pages::pickups::PickupsPanel;
use crate::pages::profile::ProfilePanel;
use crate::pages::recyclers::RecyclersPanel;
use crate::state::auth::AuthState;
use crate::state::ui::{Tab, UiState};

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let auth = RwSignal::new(AuthState::default());

    let active_tab = Memo::new(move |_| ui.get().active_tab);
    let menu_open = Memo::new(move |_| ui.get().mobile_menu_open);
    let login_open = Memo::new(move |_| ui.get().login_modal_open);
    let pickup_open = Memo::new(move |_| ui.get().pickup_modal_open);
    let avatar = Memo::new(move |_| auth.get().avatar_initial());

    let on_tab_change = Callback::new(move |tab: Tab| {
        #[cfg(feature = "hydrate")]
        log::debug!("tab: {}", tab.label());
        ui.update(|u| u.select_tab(tab));
    });
    let on_login_click = Callback::new(move |()| ui.update(UiState::open_login));
    let on_login_close = Callback::new(move |()| ui.update(UiState::close_login));
    let on_login_success = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        log::info!("auth: logged in");
        ui.update(|u| auth.update(|a| a.login_succeeded(u)));
    });
    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        log::info!("auth: logged out");
        auth.update(AuthState::logout);
    });
    let on_toggle_menu = Callback::new(move |()| ui.update(UiState::toggle_mobile_menu));
    let on_schedule_pickup = Callback::new(move |()| ui.update(UiState::open_pickup));
    let on_pickup_close = Callback::new(move |()| ui.update(UiState::close_pickup));

    let panel = move || match active_tab.get() {
        Tab::Dashboard => view! { <DashboardPanel on_schedule_pickup=on_schedule_pickup /> }.into_any(),
        Tab::Pickups => view! { <PickupsPanel on_schedule_pickup=on_schedule_pickup /> }.into_any(),
        Tab::Recyclers => view! { <RecyclersPanel /> }.into_any(),
        Tab::Leaderboard => view! { <LeaderboardPanel /> }.into_any(),
        Tab::Awareness => view! { <AwarenessPanel /> }.into_any(),
        Tab::Profile => view! { <ProfilePanel on_logout=on_logout /> }.into_any(),
    };

    view! {
        <div class="app">
            <Navigation
                active_tab=active_tab
                avatar=avatar
                menu_open=menu_open
                on_tab_change=on_tab_change
                on_login_click=on_login_click
                on_toggle_menu=on_toggle_menu
            />

            <Show when=move || active_tab.get().shows_hero()>
                <Hero on_navigate=on_tab_change />
            </Show>

            <PageLayout title=Signal::derive(move || active_tab.get().page_title())>{panel}</PageLayout>

            <Footer />

            <Show when=move || login_open.get()>
                <LoginModal on_close=on_login_close on_login_success=on_login_success />
            </Show>
            <Show when=move || pickup_open.get()>
                <PickupModal on_close=on_pickup_close />
            </Show>
        </div>
    }
}
