use super::*;

#[test]
fn tab_button_class_marks_only_the_active_tab() {
    assert_eq!(tab_button_class(Tab::Pickups, Tab::Pickups), "nav__tab nav__tab--active");
    assert_eq!(tab_button_class(Tab::Pickups, Tab::Dashboard), "nav__tab");
}

#[test]
fn menu_toggle_glyph_reflects_open_state() {
    assert_eq!(menu_toggle_glyph(false), "☰");
    assert_eq!(menu_toggle_glyph(true), "✕");
}
