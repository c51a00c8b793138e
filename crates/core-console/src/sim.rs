//! Deterministic in-memory console for tests.
//!
//! Models the one terminal behavior the editor depends on: sequential writes
//! auto-wrap at the right edge by resetting the column and advancing the row.
//! Key events come from a pre-loaded script; reading past the end is an
//! error so a test that consumes too many keys fails loudly.

use crate::Console;
use anyhow::{Result, bail};
use core_keys::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;

/// Fixed-size cell grid plus a scripted key queue.
pub struct SimConsole {
    width: u16,
    height: u16,
    col: u16,
    row: u16,
    cells: Vec<Vec<char>>,
    highlighted: Vec<Vec<bool>>,
    reverse: bool,
    keys: VecDeque<KeyEvent>,
}

impl SimConsole {
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "degenerate sim console size");
        Self {
            width,
            height,
            col: 0,
            row: 0,
            cells: vec![vec![' '; width as usize]; height as usize],
            highlighted: vec![vec![false; width as usize]; height as usize],
            reverse: false,
            keys: VecDeque::new(),
        }
    }

    /// Queue one scripted keypress.
    pub fn push_key(&mut self, key: KeyEvent) -> &mut Self {
        self.keys.push_back(key);
        self
    }

    /// Queue a plain (unmodified) key.
    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.push_key(KeyEvent::plain(code))
    }

    /// Queue a key with modifiers.
    pub fn press_with(&mut self, code: KeyCode, mods: KeyModifiers) -> &mut Self {
        self.push_key(KeyEvent::new(code, mods))
    }

    /// Queue each character of `text` as a plain keypress.
    pub fn type_str(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
        self
    }

    /// Remaining unconsumed scripted keys.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Contents of a screen row with trailing blanks trimmed.
    pub fn row_text(&self, row: u16) -> String {
        let line: String = self.cells[row as usize].iter().collect();
        line.trim_end().to_string()
    }

    /// Whether the cell at (col, row) was last written with swapped colors.
    pub fn is_highlighted(&self, col: u16, row: u16) -> bool {
        self.highlighted[row as usize][col as usize]
    }

    /// Current cursor cell, for asserting caret placement.
    pub fn cursor_cell(&self) -> (u16, u16) {
        (self.col, self.row)
    }

    fn put(&mut self, c: char) {
        self.cells[self.row as usize][self.col as usize] = c;
        self.highlighted[self.row as usize][self.col as usize] = self.reverse;
        self.col += 1;
        if self.col >= self.width {
            self.col = 0;
            // Scrolling is out of scope for tests; size grids generously.
            self.row = (self.row + 1).min(self.height - 1);
        }
    }
}

impl Console for SimConsole {
    fn next_key(&mut self) -> Result<KeyEvent> {
        match self.keys.pop_front() {
            Some(k) => Ok(k),
            None => bail!("scripted key queue exhausted"),
        }
    }

    fn cursor(&mut self) -> Result<(u16, u16)> {
        Ok((self.col, self.row))
    }

    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        if col >= self.width || row >= self.height {
            bail!("move_to ({col},{row}) outside {}x{}", self.width, self.height);
        }
        self.col = col;
        self.row = row;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        for c in text.chars() {
            match c {
                '\r' => self.col = 0,
                '\n' => self.row = (self.row + 1).min(self.height - 1),
                _ => self.put(c),
            }
        }
        Ok(())
    }

    fn width(&self) -> Result<u16> {
        Ok(self.width)
    }

    fn height(&self) -> Result<u16> {
        Ok(self.height)
    }

    fn swap_highlight(&mut self) -> Result<()> {
        self.reverse = true;
        Ok(())
    }

    fn restore_colors(&mut self) -> Result<()> {
        self.reverse = false;
        Ok(())
    }
}
