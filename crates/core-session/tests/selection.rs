//! Selection through full sessions: Shift-extended movement, select-all,
//! selection-first deletes and replacement, and highlight painting.

mod common;

use common::run;
use core_console::SimConsole;
use core_keys::{KeyCode, KeyModifiers};

#[test]
fn shift_left_then_backspace_deletes_span() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("hello")
        .press_with(KeyCode::Left, KeyModifiers::SHIFT)
        .press_with(KeyCode::Left, KeyModifiers::SHIFT)
        .press(KeyCode::Backspace)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "hel");
    assert_eq!(con.row_text(0), "hel");
}

#[test]
fn shift_right_then_typing_replaces_span() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("abc")
        .press(KeyCode::Home)
        .press_with(KeyCode::Right, KeyModifiers::SHIFT)
        .press_with(KeyCode::Right, KeyModifiers::SHIFT)
        .type_str("Z")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "Zc");
    assert_eq!(con.row_text(0), "Zc");
}

#[test]
fn select_all_then_typing_replaces_everything() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("hello")
        .press_with(KeyCode::Char('a'), KeyModifiers::CTRL)
        .type_str("z")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "z");
    assert_eq!(con.row_text(0), "z");
}

#[test]
fn shift_home_then_backspace_empties_line() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("abc")
        .press_with(KeyCode::Home, KeyModifiers::SHIFT)
        .press(KeyCode::Backspace)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "");
    assert_eq!(con.row_text(0), "");
}

#[test]
fn shift_end_extends_to_line_end() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press(KeyCode::Home)
        .press_with(KeyCode::End, KeyModifiers::SHIFT)
        .press(KeyCode::Delete)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "");
}

#[test]
fn select_all_paints_whole_line_highlighted() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("ab")
        .press_with(KeyCode::Char('a'), KeyModifiers::CTRL)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "ab");
    assert!(con.is_highlighted(0, 0));
    assert!(con.is_highlighted(1, 0));
}

#[test]
fn collapsing_movement_clears_highlight() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("ab")
        .press_with(KeyCode::Left, KeyModifiers::SHIFT)
        .press(KeyCode::Left) // collapse; plain rewrite drops the highlight
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "ab");
    assert!(!con.is_highlighted(0, 0));
    assert!(!con.is_highlighted(1, 0));
}

#[test]
fn caret_follows_the_moving_edge() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("abcd")
        .press_with(KeyCode::Left, KeyModifiers::SHIFT)
        .press_with(KeyCode::Left, KeyModifiers::SHIFT)
        .type_str("X")
        .press(KeyCode::Enter);
    // The span "cd" behind the moving edge is the part replaced.
    assert_eq!(run(&mut con), "abX");
}

#[test]
fn ctrl_shift_left_selects_previous_word() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press_with(KeyCode::Left, KeyModifiers::CTRL | KeyModifiers::SHIFT)
        .press(KeyCode::Backspace)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo ");
}
