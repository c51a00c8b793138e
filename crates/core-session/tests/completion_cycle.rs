//! Completion panel lifecycle through full sessions: trigger, cycling,
//! abandon, accept, and per-character re-query.

mod common;

use common::run;
use core_console::SimConsole;
use core_keys::KeyCode;

#[test]
fn trigger_on_empty_buffer_inserts_first_candidate() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab).press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo");
    assert_eq!(con.row_text(0), "foo");
}

#[test]
fn tab_cycles_replacing_not_concatenating() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab).press(KeyCode::Tab).press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foobar");
    assert_eq!(con.row_text(0), "foobar");
}

#[test]
fn cycle_wraps_back_to_first_and_clears_stale_tail() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab) // foo
        .press(KeyCode::Tab) // foobar
        .press(KeyCode::Tab) // foobarbaz
        .press(KeyCode::Tab) // wraps to foo
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo");
    // "barbaz" leftovers from the longest candidate must be blanked.
    assert_eq!(con.row_text(0), "foo");
}

#[test]
fn tab_with_single_candidate_is_noop() {
    let mut con = SimConsole::new(24, 4);
    con.type_str("foobarba")
        .press(KeyCode::Tab) // only "z" on offer
        .press(KeyCode::Tab) // fewer than two candidates: no-op
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foobarbaz");
}

#[test]
fn trigger_with_no_candidates_stays_inactive() {
    let mut con = SimConsole::new(24, 4);
    con.type_str("b").press(KeyCode::Tab).press(KeyCode::Enter);
    assert_eq!(run(&mut con), "b");
}

#[test]
fn typing_while_active_requeries_and_falls_back() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab) // inserts "foo"
        .type_str("b") // removes it, re-queries "b": nothing
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "b");
    assert_eq!(con.row_text(0), "b");
}

#[test]
fn typing_while_active_keeps_surviving_candidates() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab) // "foo" selected
        .type_str("f") // re-query "f" -> "oo" inserted
        .press(KeyCode::Char(' ')) // accept candidate, append space
        .type_str("x")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "foo x");
}

#[test]
fn escape_abandons_inserted_candidate() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab)
        .press(KeyCode::Esc)
        .type_str("hi")
        .press(KeyCode::Enter);
    assert_eq!(run(&mut con), "hi");
    assert_eq!(con.row_text(0), "hi");
}

#[test]
fn backspace_abandons_inserted_candidate() {
    let mut con = SimConsole::new(24, 4);
    con.press(KeyCode::Tab).press(KeyCode::Backspace).press(KeyCode::Enter);
    assert_eq!(run(&mut con), "");
    assert_eq!(con.row_text(0), "");
}

#[test]
fn completion_respects_token_delimiters() {
    let mut con = SimConsole::new(24, 4);
    // Partial token is scanned left only to the space.
    con.type_str("b fo").press(KeyCode::Tab).press(KeyCode::Enter);
    assert_eq!(run(&mut con), "b foo");
}
