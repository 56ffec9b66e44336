//! Active tab and modal visibility.
//!
//! DESIGN
//! ======
//! The tab switch is an unconditional overwrite with no guards and no history
//! stack. Panels are recreated on every switch, so panel-local state (search
//! text, selected timeframe) never survives navigating away and back.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level views selectable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Pickups,
    Recyclers,
    Leaderboard,
    Awareness,
    Profile,
}

impl Tab {
    pub const ALL: [Self; 6] =
        [Self::Dashboard, Self::Pickups, Self::Recyclers, Self::Leaderboard, Self::Awareness, Self::Profile];

    /// Navigation button text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Pickups => "Pickups",
            Self::Recyclers => "Recyclers",
            Self::Leaderboard => "Leaderboard",
            Self::Awareness => "Awareness",
            Self::Profile => "Profile",
        }
    }

    /// Title band text. The dashboard shows the hero banner instead.
    pub fn page_title(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => None,
            Self::Pickups => Some("My Pickups"),
            Self::Recyclers => Some("Find Recyclers"),
            Self::Leaderboard => Some("Leaderboard"),
            Self::Awareness => Some("E-Waste Awareness"),
            Self::Profile => Some("My Profile"),
        }
    }

    pub fn shows_hero(self) -> bool {
        self == Self::Dashboard
    }
}

/// Chrome state owned by the root view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub login_modal_open: bool,
    pub pickup_modal_open: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    /// Switch views. Also collapses the mobile menu.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.mobile_menu_open = false;
    }

    pub fn open_login(&mut self) {
        self.login_modal_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_modal_open = false;
    }

    pub fn open_pickup(&mut self) {
        self.pickup_modal_open = true;
    }

    pub fn close_pickup(&mut self) {
        self.pickup_modal_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }
}
