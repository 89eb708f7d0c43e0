// Host-side tests for expandable cards and the mobile menu state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod cards {
    include!("../src/core/cards.rs");
}
mod menu {
    include!("../src/core/menu.rs");
}

use cards::*;
use menu::*;

#[test]
fn opening_a_card_shows_overlay() {
    let mut c = ExpandableCards::new(3);
    let t = c.toggle(1);
    assert_eq!(t.opened, Some(1));
    assert!(t.closed.is_empty());
    assert!(t.overlay_active);
    assert!(c.is_open(1));
}

#[test]
fn opening_another_card_closes_the_first() {
    let mut c = ExpandableCards::new(3);
    c.toggle(0);
    let t = c.toggle(2);
    assert_eq!(t.closed, vec![0]);
    assert_eq!(t.opened, Some(2));
    assert!(t.overlay_active);
    assert_eq!(c.open_index(), Some(2));
}

#[test]
fn toggling_open_card_closes_it() {
    let mut c = ExpandableCards::new(3);
    c.toggle(1);
    let t = c.toggle(1);
    assert_eq!(t.closed, vec![1]);
    assert_eq!(t.opened, None);
    assert!(!t.overlay_active);
    assert_eq!(c.open_index(), None);
}

#[test]
fn close_all_and_out_of_range() {
    let mut c = ExpandableCards::new(2);
    assert!(c.close_all().is_noop());
    assert!(c.toggle(5).is_noop());
    c.toggle(1);
    let t = c.close_all();
    assert_eq!(t.closed, vec![1]);
    assert!(!t.overlay_active);
    // stray out-of-range toggles leave the open card alone
    c.toggle(0);
    let t = c.toggle(9);
    assert!(t.is_noop());
    assert!(t.overlay_active);
    assert!(c.is_open(0));
}

#[test]
fn card_keys() {
    assert_eq!(card_key_action("Enter"), Some(CardKeyAction::Toggle));
    assert_eq!(card_key_action(" "), Some(CardKeyAction::Toggle));
    assert_eq!(card_key_action("Escape"), Some(CardKeyAction::CloseAll));
    assert_eq!(card_key_action("a"), None);
}

#[test]
fn menu_toggle_follows_breakpoint() {
    let mut m = MobileMenu::new();
    assert_eq!(m.on_viewport_width(1280.0), MenuChange::Unchanged);
    assert_eq!(m.on_viewport_width(768.0), MenuChange::CreateToggle);
    assert!(m.has_toggle());
    assert_eq!(m.on_viewport_width(500.0), MenuChange::Unchanged);
    m.toggle();
    assert_eq!(m.on_viewport_width(1024.0), MenuChange::RemoveToggle);
    assert!(!m.has_toggle());
    assert!(!m.is_open());
}

#[test]
fn menu_glyph_tracks_open_state() {
    let mut m = MobileMenu::new();
    assert_eq!(m.glyph(), GLYPH_CLOSED);
    assert!(m.toggle());
    assert_eq!(m.glyph(), GLYPH_OPEN);
    assert!(m.close());
    assert!(!m.close());
    assert_eq!(m.glyph(), GLYPH_CLOSED);
}
