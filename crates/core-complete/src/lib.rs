//! Tab-completion capability and panel state machine.
//!
//! `CompletionEngine` is the pluggable provider boundary: it announces the
//! trigger chord, maps a partial token to ordered candidate *suffixes*, and
//! names the characters that bound a token. `Panel` is the controller the
//! session drives: Inactive until the trigger chord fires, Active while a
//! candidate is inserted and selected in the buffer.
//!
//! Active-state invariant: between keystrokes the buffer contains the
//! partial token plus exactly one inserted candidate suffix. Cycling always
//! removes the previous suffix before inserting the next, so two candidates
//! never end up concatenated.

use core_keys::Chord;
use core_line::{LineBuffer, Selection};

/// Pluggable candidate provider consumed by the session.
pub trait CompletionEngine {
    /// Key + exact modifier set that opens the panel.
    fn trigger(&self) -> Chord;
    /// Ordered suffixes to offer for `partial`; empty means no suggestions.
    fn completions(&self, partial: &str) -> Vec<String>;
    /// Characters that end a completable token.
    fn token_delimiters(&self) -> &[char];
}

/// Engine that never suggests anything. Useful for hosts that want the
/// editing surface without completion.
#[derive(Debug, Default)]
pub struct EmptyCompletionEngine;

impl CompletionEngine for EmptyCompletionEngine {
    fn trigger(&self) -> Chord {
        Chord::tab()
    }

    fn completions(&self, _partial: &str) -> Vec<String> {
        Vec::new()
    }

    fn token_delimiters(&self) -> &[char] {
        &[]
    }
}

/// Word-list engine: candidates are the suffixes of lexicon words that
/// strictly extend the partial token, in lexicon order. Space-delimited.
#[derive(Debug, Clone)]
pub struct PrefixLexicon {
    words: Vec<String>,
    delimiters: [char; 1],
}

impl PrefixLexicon {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            delimiters: [' '],
        }
    }
}

impl CompletionEngine for PrefixLexicon {
    fn trigger(&self) -> Chord {
        Chord::tab()
    }

    fn completions(&self, partial: &str) -> Vec<String> {
        self.words
            .iter()
            .filter(|w| w.len() > partial.len() && w.starts_with(partial))
            .map(|w| w[partial.len()..].to_string())
            .collect()
    }

    fn token_delimiters(&self) -> &[char] {
        &self.delimiters
    }
}

/// The run of non-delimiter characters immediately left of `cursor`,
/// used as the completion query.
pub fn partial_token(buf: &LineBuffer, cursor: usize, delimiters: &[char]) -> String {
    let end = cursor.min(buf.len());
    let mut start = end;
    while start > 0 {
        match buf.char_at(start - 1) {
            Some(c) if !delimiters.contains(&c) => start -= 1,
            _ => break,
        }
    }
    buf.slice(start, end - start)
}

#[derive(Debug)]
struct ActivePanel {
    candidates: Vec<String>,
    index: usize,
    /// Buffer index where the candidate suffix was inserted.
    anchor: usize,
    /// Character length of the currently inserted candidate.
    span: usize,
}

/// Completion controller: Inactive, or Active with the candidate list, the
/// selected index, and the buffer span the current candidate occupies.
#[derive(Debug, Default)]
pub struct Panel {
    active: Option<ActivePanel>,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of candidates on offer; 0 while inactive.
    pub fn candidate_count(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.candidates.len())
    }

    /// Drop back to Inactive without touching the buffer. The caller is
    /// responsible for what happens to the inserted candidate (it stays on
    /// accept, or is deleted via the selection on abandon).
    pub fn close(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!(target: "session.completion", "panel closed");
        }
    }

    /// Trigger-chord entry: query the engine for the partial token left of
    /// `cursor` and, if anything is offered, insert and select the first
    /// candidate. Returns the new cursor index, or `None` when the engine
    /// had nothing (state stays Inactive).
    pub fn open<E>(
        &mut self,
        engine: &E,
        buf: &mut LineBuffer,
        sel: &mut Selection,
        cursor: usize,
    ) -> Option<usize>
    where
        E: CompletionEngine + ?Sized,
    {
        let partial = partial_token(buf, cursor, engine.token_delimiters());
        let candidates = engine.completions(&partial);
        tracing::debug!(
            target: "session.completion",
            partial_len = partial.len(),
            candidates = candidates.len(),
            "panel open requested"
        );
        if candidates.is_empty() {
            return None;
        }
        let end = buf.insert(cursor, &candidates[0]);
        sel.reset(cursor);
        sel.extend(end);
        self.active = Some(ActivePanel {
            candidates,
            index: 0,
            anchor: cursor,
            span: end - cursor,
        });
        Some(end)
    }

    /// Tab while Active: replace the inserted candidate with the next one
    /// (wrapping), keeping the same anchor. With fewer than two candidates
    /// this is a no-op returning `None` and the panel stays open.
    pub fn cycle(&mut self, buf: &mut LineBuffer, sel: &mut Selection) -> Option<usize> {
        let active = self.active.as_mut()?;
        if active.candidates.len() < 2 {
            return None;
        }
        buf.delete_range(active.anchor, active.span);
        active.index = (active.index + 1) % active.candidates.len();
        let candidate = active.candidates[active.index].clone();
        let end = buf.insert(active.anchor, &candidate);
        active.span = end - active.anchor;
        sel.reset(active.anchor);
        sel.extend(end);
        tracing::trace!(
            target: "session.completion",
            index = active.index,
            "cycled candidate"
        );
        Some(end)
    }

    /// Printable key while Active: drop the inserted candidate, splice in
    /// the typed character, and re-query with the grown partial token. With
    /// no candidates for the new token the panel closes and just the typed
    /// character remains. Returns the new cursor index.
    pub fn retype<E>(
        &mut self,
        engine: &E,
        buf: &mut LineBuffer,
        sel: &mut Selection,
        c: char,
    ) -> usize
    where
        E: CompletionEngine + ?Sized,
    {
        let anchor = match self.active.take() {
            Some(active) => {
                buf.delete_range(active.anchor, active.span);
                active.anchor
            }
            None => buf.len(),
        };
        let mut tmp = [0u8; 4];
        let cursor = buf.insert(anchor, c.encode_utf8(&mut tmp));
        sel.reset(cursor);
        match self.open(engine, buf, sel, cursor) {
            Some(end) => end,
            None => cursor,
        }
    }
}
