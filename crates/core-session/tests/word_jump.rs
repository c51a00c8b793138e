//! Word-wise navigation and word deletes through full sessions. The cursor
//! index is made observable by typing a marker character after the jump.

mod common;

use common::run;
use core_console::SimConsole;
use core_keys::{KeyCode, KeyModifiers};

#[test]
fn ctrl_left_jumps_to_word_start() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press_with(KeyCode::Left, KeyModifiers::CTRL)
        .type_str("X")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo Xbar");
    assert_eq!(con.row_text(0), "foo Xbar");
}

#[test]
fn ctrl_left_twice_reaches_line_start() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press_with(KeyCode::Left, KeyModifiers::CTRL)
        .press_with(KeyCode::Left, KeyModifiers::CTRL)
        .type_str("X")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "Xfoo bar");
}

#[test]
fn ctrl_right_jumps_to_next_word() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press(KeyCode::Home)
        .press_with(KeyCode::Right, KeyModifiers::CTRL)
        .type_str("X")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo Xbar");
}

#[test]
fn ctrl_right_twice_reaches_line_end() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press(KeyCode::Home)
        .press_with(KeyCode::Right, KeyModifiers::CTRL)
        .press_with(KeyCode::Right, KeyModifiers::CTRL)
        .type_str("X")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo barX");
}

#[test]
fn ctrl_backspace_deletes_previous_word() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press_with(KeyCode::Backspace, KeyModifiers::CTRL)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo ");
    assert_eq!(con.row_text(0), "foo");
}

#[test]
fn ctrl_delete_deletes_next_word() {
    let mut con = SimConsole::new(20, 4);
    con.type_str("foo bar")
        .press(KeyCode::Home)
        .press_with(KeyCode::Delete, KeyModifiers::CTRL)
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "bar");
    assert_eq!(con.row_text(0), "bar");
}

#[test]
fn plain_arrows_stop_at_edges() {
    let mut con = SimConsole::new(20, 4);
    con.press(KeyCode::Left)
        .press(KeyCode::Left)
        .type_str("ab")
        .press(KeyCode::Right)
        .type_str("c")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "abc");
}
