use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_starts_on_dashboard_with_modals_closed() {
    let state = UiState::default();
    assert_eq!(state.active_tab, Tab::Dashboard);
    assert!(!state.login_modal_open);
    assert!(!state.pickup_modal_open);
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Tab transitions
// =============================================================

#[test]
fn select_tab_overwrites_from_any_state() {
    for from in Tab::ALL {
        for to in Tab::ALL {
            let mut state = UiState { active_tab: from, ..UiState::default() };
            state.select_tab(to);
            assert_eq!(state.active_tab, to);
        }
    }
}

#[test]
fn select_tab_closes_mobile_menu() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.select_tab(Tab::Recyclers);
    assert!(!state.mobile_menu_open);
}

#[test]
fn select_tab_leaves_modals_alone() {
    let mut state = UiState::default();
    state.open_pickup();
    state.select_tab(Tab::Profile);
    assert!(state.pickup_modal_open);
}

#[test]
fn modal_flags_toggle_independently() {
    let mut state = UiState::default();
    state.open_login();
    assert!(state.login_modal_open);
    assert!(!state.pickup_modal_open);
    state.open_pickup();
    state.close_login();
    assert!(!state.login_modal_open);
    assert!(state.pickup_modal_open);
    state.close_pickup();
    assert_eq!(state, UiState::default());
}

// =============================================================
// Tab metadata
// =============================================================

#[test]
fn tab_default_is_dashboard() {
    assert_eq!(Tab::default(), Tab::Dashboard);
}

#[test]
fn only_dashboard_has_no_title_and_shows_hero() {
    for tab in Tab::ALL {
        assert_eq!(tab.page_title().is_none(), tab == Tab::Dashboard);
        assert_eq!(tab.shows_hero(), tab == Tab::Dashboard);
    }
    assert_eq!(Tab::Recyclers.page_title(), Some("Find Recyclers"));
}

#[test]
fn tab_labels_are_distinct() {
    let mut labels = Tab::ALL.iter().map(|t| t.label()).collect::<Vec<_>>();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), Tab::ALL.len());
}
