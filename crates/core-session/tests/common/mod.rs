#![allow(dead_code)] // Shared across the integration test binaries; each uses a subset.

use core_clipboard::test_fixtures::TestClipboard;
use core_complete::PrefixLexicon;
use core_console::SimConsole;
use core_session::LineReader;

/// Reader over the sample lexicon {foo, foobar, foobarbaz}.
pub fn sample_reader() -> LineReader<PrefixLexicon> {
    LineReader::new(PrefixLexicon::new(["foo", "foobar", "foobarbaz"]))
}

/// Run one read over a scripted console, discarding clipboard state.
pub fn run(con: &mut SimConsole) -> String {
    let mut clipboard = TestClipboard::default();
    run_with_clipboard(con, &mut clipboard)
}

/// Run one read over a scripted console with a caller-owned clipboard.
pub fn run_with_clipboard(
    con: &mut SimConsole,
    clipboard: &mut impl core_clipboard::Clipboard,
) -> String {
    sample_reader()
        .read_line(con, clipboard)
        .expect("scripted session must complete")
}
