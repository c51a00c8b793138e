//! Per-keystroke dispatch for one read operation.
//!
//! The session owns all mutable editing state for the duration of a single
//! `read_line` call: the buffer, the selection, the completion panel, and —
//! per the explicit-index design — the logical cursor index, updated by
//! every mutation and movement so the terminal never has to be asked where
//! the cursor is mid-session.
//!
//! Dispatch branches once on whether the completion panel is active and
//! hands the key to one of two independent handlers; each transition in
//! both tables is exercised by the integration tests.

use crate::{CursorMap, paint};
use anyhow::Result;
use core_clipboard::Clipboard;
use core_complete::{CompletionEngine, Panel};
use core_console::Console;
use core_keys::{KeyCode, KeyEvent, KeyModifiers};
use core_line::{LineBuffer, Selection, word};

/// Blocking line reader over a pluggable completion engine.
///
/// The engine is a required constructor argument: a host that wants the
/// editing surface without completion passes
/// [`EmptyCompletionEngine`](core_complete::EmptyCompletionEngine).
pub struct LineReader<E> {
    engine: E,
}

impl<E: CompletionEngine> LineReader<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Read one line: blocks on key events and returns the committed text
    /// once Enter is pressed. The screen origin is captured from the live
    /// cursor position at entry and fixed for the whole read.
    pub fn read_line<C, B>(&self, console: &mut C, clipboard: &mut B) -> Result<String>
    where
        C: Console,
        B: Clipboard,
    {
        let origin = console.cursor()?;
        let mut session = Session {
            engine: &self.engine,
            console,
            clipboard,
            map: CursorMap::new(origin),
            buf: LineBuffer::new(),
            sel: Selection::new(),
            panel: Panel::new(),
            index: 0,
        };
        session.run()
    }
}

enum Flow {
    Continue,
    Commit,
}

struct Session<'a, C, B, E> {
    engine: &'a E,
    console: &'a mut C,
    clipboard: &'a mut B,
    map: CursorMap,
    buf: LineBuffer,
    sel: Selection,
    panel: Panel,
    index: usize,
}

impl<C, B, E> Session<'_, C, B, E>
where
    C: Console,
    B: Clipboard,
    E: CompletionEngine,
{
    fn run(&mut self) -> Result<String> {
        loop {
            #[cfg(debug_assertions)]
            self.check_sync()?;
            let key = self.console.next_key()?;
            let flow = if self.panel.is_active() {
                self.handle_panel_key(key)?
            } else {
                self.handle_edit_key(key)?
            };
            if let Flow::Commit = flow {
                self.console.write("\r\n")?;
                tracing::debug!(target: "session", len = self.buf.len(), "line committed");
                return Ok(self.buf.text());
            }
        }
    }

    /// Repaint after a state change. `old_len` is the buffer length before
    /// the change; a shrink blanks the stale tail first. A non-empty
    /// selection paints highlighted, otherwise the plain line with the
    /// caret on the tracked index.
    fn render(&mut self, old_len: usize) -> Result<()> {
        if self.buf.len() < old_len {
            paint::clear_span(self.console, &self.map, old_len)?;
        }
        if self.sel.is_empty() {
            paint::repaint_line(self.console, &self.map, &self.buf, self.index)
        } else {
            paint::paint_selection(self.console, &self.map, &self.buf, &self.sel)
        }
    }

    /// Consistency check between the tracked index and what the bounded
    /// origin-replay scan derives from the live cursor. Debug builds only;
    /// a mismatch is logged, never acted on.
    #[cfg(debug_assertions)]
    fn check_sync(&mut self) -> Result<()> {
        let live = self.console.cursor()?;
        let width = self.console.width()?;
        let height = self.console.height()?;
        let derived = self.map.index_of(live, width, height);
        if derived != self.index {
            tracing::warn!(
                target: "session",
                tracked = self.index,
                derived,
                "cursor index desync"
            );
        }
        Ok(())
    }

    // ---- keys while the completion panel is inactive --------------------

    fn handle_edit_key(&mut self, key: KeyEvent) -> Result<Flow> {
        if self.engine.trigger().matches(&key) {
            let old = self.buf.len();
            if let Some(cursor) =
                self.panel
                    .open(self.engine, &mut self.buf, &mut self.sel, self.index)
            {
                self.index = cursor;
                self.render(old)?;
            }
            return Ok(Flow::Continue);
        }
        match key.code {
            KeyCode::Left | KeyCode::Right => self.arrow(key)?,
            KeyCode::Home => self.jump(key, 0)?,
            KeyCode::End => self.jump(key, self.buf.len())?,
            KeyCode::Backspace => self.backward_delete(key)?,
            KeyCode::Delete => self.forward_delete(key)?,
            KeyCode::Enter => {
                self.sel.reset(self.index);
                return Ok(Flow::Commit);
            }
            KeyCode::Char(c) if key.mods.contains(KeyModifiers::CTRL) => {
                self.control_combo(c)?;
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.insert_text(&c.to_string())?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    // ---- keys while the completion panel is active -----------------------

    fn handle_panel_key(&mut self, key: KeyEvent) -> Result<Flow> {
        if self.engine.trigger().matches(&key) {
            let old = self.buf.len();
            if let Some(cursor) = self.panel.cycle(&mut self.buf, &mut self.sel) {
                self.index = cursor;
                self.render(old)?;
            }
            return Ok(Flow::Continue);
        }
        match key.code {
            // Abandon: close, then perform the delete as if no panel were
            // open. The inserted candidate is the live selection, so the
            // selection-first delete path removes it.
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Delete => {
                self.panel.close();
                if !self.sel.is_empty() {
                    self.delete_selection_op()?;
                } else if key.code == KeyCode::Backspace {
                    self.backward_delete(key)?;
                } else if key.code == KeyCode::Delete {
                    self.forward_delete(key)?;
                }
            }
            // Accept: the candidate stays, the selection collapses, and the
            // key applies normally.
            KeyCode::Char(' ') => {
                self.panel.close();
                self.sel.reset(self.index);
                self.insert_text(" ")?;
            }
            KeyCode::Enter => {
                self.panel.close();
                self.sel.reset(self.index);
                return Ok(Flow::Commit);
            }
            KeyCode::Char(c) if !key.mods.contains(KeyModifiers::CTRL) && !c.is_control() => {
                let old = self.buf.len();
                self.index = self
                    .panel
                    .retype(self.engine, &mut self.buf, &mut self.sel, c);
                self.render(old)?;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    // ---- movement --------------------------------------------------------

    fn arrow(&mut self, key: KeyEvent) -> Result<()> {
        let shift = key.mods.contains(KeyModifiers::SHIFT);
        let ctrl = key.mods.contains(KeyModifiers::CTRL);
        let leftward = key.code == KeyCode::Left;
        let at_edge = if leftward {
            self.index == 0
        } else {
            self.index == self.buf.len()
        };
        if at_edge {
            // Stop at the line edge; without Shift the selection collapses.
            if !shift {
                self.collapse_selection()?;
            }
            return Ok(());
        }
        let target = match (leftward, ctrl) {
            (true, true) => word::previous_word_index(&self.buf, self.index),
            (true, false) => self.index - 1,
            (false, true) => word::next_word_index(&self.buf, self.index),
            (false, false) => self.index + 1,
        };
        self.move_to_index(target, shift)
    }

    fn jump(&mut self, key: KeyEvent, target: usize) -> Result<()> {
        self.move_to_index(target, key.mods.contains(KeyModifiers::SHIFT))
    }

    fn move_to_index(&mut self, target: usize, extend: bool) -> Result<()> {
        if extend {
            self.sel.extend(target);
            self.index = target;
            self.render(self.buf.len())
        } else {
            let had_selection = !self.sel.is_empty();
            self.sel.reset(target);
            self.index = target;
            if had_selection {
                // Old highlight must be cleared by a plain rewrite.
                self.render(self.buf.len())
            } else {
                paint::place_cursor(self.console, &self.map, self.index)
            }
        }
    }

    fn collapse_selection(&mut self) -> Result<()> {
        if self.sel.is_empty() {
            self.sel.reset(self.index);
            return Ok(());
        }
        self.sel.reset(self.index);
        self.render(self.buf.len())
    }

    // ---- mutation --------------------------------------------------------

    fn insert_text(&mut self, text: &str) -> Result<()> {
        let old = self.buf.len();
        self.index = self.buf.replace_selection(&mut self.sel, self.index, text);
        self.render(old)
    }

    fn delete_selection_op(&mut self) -> Result<()> {
        let old = self.buf.len();
        self.index = self.buf.delete_selection(&mut self.sel, self.index);
        self.render(old)
    }

    fn backward_delete(&mut self, key: KeyEvent) -> Result<()> {
        if !self.sel.is_empty() {
            return self.delete_selection_op();
        }
        if self.index == 0 {
            return Ok(());
        }
        let start = if key.mods.contains(KeyModifiers::CTRL) {
            word::previous_word_index(&self.buf, self.index)
        } else {
            self.index - 1
        };
        let old = self.buf.len();
        self.buf.delete_range(start, self.index - start);
        self.index = start;
        self.sel.reset(start);
        self.render(old)
    }

    fn forward_delete(&mut self, key: KeyEvent) -> Result<()> {
        if !self.sel.is_empty() {
            return self.delete_selection_op();
        }
        if self.index == self.buf.len() {
            return Ok(());
        }
        let end = if key.mods.contains(KeyModifiers::CTRL) {
            word::next_word_index(&self.buf, self.index)
        } else {
            self.index + 1
        };
        let old = self.buf.len();
        self.buf.delete_range(self.index, end - self.index);
        self.sel.reset(self.index);
        self.render(old)
    }

    // ---- clipboard chords --------------------------------------------------

    fn control_combo(&mut self, c: char) -> Result<()> {
        match c.to_ascii_lowercase() {
            'a' => {
                self.sel.reset(0);
                self.sel.extend(self.buf.len());
                self.index = self.buf.len();
                self.render(self.buf.len())?;
            }
            'c' => {
                // No selection copies the whole buffer.
                let text = if self.sel.is_empty() {
                    self.buf.text()
                } else {
                    self.buf.slice(self.sel.start(), self.sel.len())
                };
                if let Err(err) = self.clipboard.set(text) {
                    tracing::debug!(target: "session", %err, "copy degraded to no-op");
                }
            }
            'x' => {
                if self.sel.is_empty() {
                    return Ok(());
                }
                let text = self.buf.slice(self.sel.start(), self.sel.len());
                // Only mutate the buffer once the clipboard accepted the
                // content; a locked clipboard leaves the line untouched.
                match self.clipboard.set(text) {
                    Ok(()) => self.delete_selection_op()?,
                    Err(err) => {
                        tracing::debug!(target: "session", %err, "cut degraded to no-op");
                    }
                }
            }
            'v' => match self.clipboard.get() {
                Ok(text) if !text.is_empty() => self.insert_text(&text)?,
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(target: "session", %err, "paste degraded to no-op");
                }
            },
            _ => {}
        }
        Ok(())
    }
}
