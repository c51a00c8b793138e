//! Line buffer and selection model.
//!
//! These operate purely on in-memory state and are free of any terminal
//! dependency; the session crate layers screen painting on top. One buffer
//! position is one on-screen column (grapheme-aware arithmetic is an
//! explicit non-goal of this editor).
//!
//! Index invariants:
//! * every index handed to these APIs is clamped into `[0, len]`;
//! * `len` itself is a valid index meaning "after the last character";
//! * selection endpoints are re-clamped whenever the buffer shrinks.

pub mod word;

/// The line being composed, as an ordered character sequence.
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    chars: Vec<char>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a buffer with initial content (tests, paste-heavy fixtures).
    pub fn from_str(content: &str) -> Self {
        Self {
            chars: content.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Full buffer contents as an owned string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Sub-span `[start, start+len)` as an owned string (clamped).
    pub fn slice(&self, start: usize, len: usize) -> String {
        let s = start.min(self.chars.len());
        let e = start.saturating_add(len).min(self.chars.len());
        self.chars[s..e].iter().collect()
    }

    /// Splice `text` in at `index` (clamped), shifting the tail right.
    /// Returns the index just past the inserted text.
    pub fn insert(&mut self, index: usize, text: &str) -> usize {
        let at = index.min(self.chars.len());
        let mut cursor = at;
        for c in text.chars() {
            self.chars.insert(cursor, c);
            cursor += 1;
        }
        cursor
    }

    /// Remove `len` characters starting at `start` (clamped); returns the
    /// removed text for clipboard integration.
    pub fn delete_range(&mut self, start: usize, len: usize) -> String {
        let s = start.min(self.chars.len());
        let e = start.saturating_add(len).min(self.chars.len());
        self.chars.drain(s..e).collect()
    }

    /// Remove the selected span, collapse the selection to its start, and
    /// return the new cursor index. No-op (returns `index`) when empty.
    pub fn delete_selection(&mut self, sel: &mut Selection, index: usize) -> usize {
        if sel.len() == 0 {
            return index.min(self.chars.len());
        }
        let start = sel.start();
        self.delete_range(start, sel.len());
        sel.reset(start);
        start
    }

    /// Replace the selected span with `text`; with an empty selection this
    /// is a plain insert at `index`. The selection is re-anchored after the
    /// inserted text and the new cursor index returned.
    pub fn replace_selection(&mut self, sel: &mut Selection, index: usize, text: &str) -> usize {
        let at = if sel.len() > 0 {
            let start = sel.start();
            self.delete_range(start, sel.len());
            start
        } else {
            index.min(self.chars.len())
        };
        let cursor = self.insert(at, text);
        sel.reset(cursor);
        cursor
    }
}

/// Anchor/focus pair over buffer indices. `beginning` is the fixed anchor,
/// `focus` the end the user is actively moving; ordering between them is
/// not significant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    beginning: usize,
    focus: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse and re-anchor at `index`. Every non-extending gesture
    /// (plain movement, insert, delete, Enter) lands here.
    pub fn reset(&mut self, index: usize) {
        self.beginning = index;
        self.focus = index;
    }

    /// Move the focus, keeping the anchor fixed (Shift-extended gestures).
    pub fn extend(&mut self, index: usize) {
        self.focus = index;
    }

    pub fn anchor(&self) -> usize {
        self.beginning
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Lower endpoint.
    pub fn start(&self) -> usize {
        self.beginning.min(self.focus)
    }

    /// Span width, independent of extension direction.
    pub fn len(&self) -> usize {
        self.beginning.abs_diff(self.focus)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether extending to `index` grows the selection rightward of the
    /// anchor (or would, from a collapsed state).
    pub fn is_expanding_right(&self, index: usize) -> bool {
        (self.beginning == self.focus && index > self.focus) || self.beginning < self.focus
    }

    /// Pull both endpoints back inside `[0, buffer_len]` after a shrink.
    pub fn clamp_to(&mut self, buffer_len: usize) {
        self.beginning = self.beginning.min(buffer_len);
        self.focus = self.focus.min(buffer_len);
    }
}
