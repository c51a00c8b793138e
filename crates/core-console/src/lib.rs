//! Console backend abstraction and crossterm implementation.
//!
//! The editing core never touches process-wide terminal state directly; it
//! receives a `Console` and issues every read and write through it. That
//! keeps the whole engine runnable against the deterministic [`sim`] backend
//! in tests. Coordinates are absolute (0,0)-origin screen cells.

use anyhow::Result;
use core_keys::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    cursor::{self, MoveTo},
    event::{Event, KeyCode as CKey, KeyEventKind, KeyModifiers as CMods, read},
    execute,
    style::{Attribute, Print, SetAttribute},
    terminal::{disable_raw_mode, enable_raw_mode, size},
};
use std::io::{Write, stdout};

pub mod sim;
pub use sim::SimConsole;

/// Terminal I/O capability consumed by the editing session.
///
/// `width`/`height` are read live on every call; the session deliberately
/// does not snapshot them, so wrap points always follow the current window.
pub trait Console {
    /// Block until the next decoded keypress.
    fn next_key(&mut self) -> Result<KeyEvent>;
    /// Current cursor cell as (column, row).
    fn cursor(&mut self) -> Result<(u16, u16)>;
    fn move_to(&mut self, col: u16, row: u16) -> Result<()>;
    /// Write text at the cursor; the terminal auto-wraps at the right edge.
    fn write(&mut self, text: &str) -> Result<()>;
    fn width(&self) -> Result<u16>;
    fn height(&self) -> Result<u16>;
    /// Swap foreground/background for subsequent writes (selection paint).
    fn swap_highlight(&mut self) -> Result<()>;
    fn restore_colors(&mut self) -> Result<()>;
}

/// Crossterm-backed console. Raw mode is entered explicitly (or via
/// [`CrosstermConsole::raw_guard`]) and always released on drop.
pub struct CrosstermConsole {
    raw: bool,
}

/// RAII guard ensuring cooked mode restoration even if the caller
/// early-returns or panics mid-session.
pub struct RawModeGuard<'a> {
    console: &'a mut CrosstermConsole,
}

impl Default for CrosstermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermConsole {
    pub fn new() -> Self {
        Self { raw: false }
    }

    pub fn enter_raw(&mut self) -> Result<()> {
        if !self.raw {
            enable_raw_mode()?;
            self.raw = true;
            tracing::debug!(target: "console", "raw mode enabled");
        }
        Ok(())
    }

    pub fn leave_raw(&mut self) -> Result<()> {
        if self.raw {
            disable_raw_mode()?;
            self.raw = false;
            tracing::debug!(target: "console", "raw mode disabled");
        }
        Ok(())
    }

    /// Enter raw mode and return a guard that restores cooked mode on drop.
    pub fn raw_guard(&mut self) -> Result<RawModeGuard<'_>> {
        self.enter_raw()?;
        Ok(RawModeGuard { console: self })
    }
}

impl Drop for CrosstermConsole {
    fn drop(&mut self) {
        let _ = self.leave_raw();
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        let _ = self.console.leave_raw();
    }
}

impl std::ops::Deref for RawModeGuard<'_> {
    type Target = CrosstermConsole;
    fn deref(&self) -> &Self::Target {
        self.console
    }
}

impl std::ops::DerefMut for RawModeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.console
    }
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

fn map_code(code: CKey) -> Option<KeyCode> {
    match code {
        CKey::Char(c) => Some(KeyCode::Char(c)),
        CKey::Enter => Some(KeyCode::Enter),
        CKey::Esc => Some(KeyCode::Esc),
        CKey::Backspace => Some(KeyCode::Backspace),
        CKey::Delete => Some(KeyCode::Delete),
        CKey::Tab => Some(KeyCode::Tab),
        CKey::Left => Some(KeyCode::Left),
        CKey::Right => Some(KeyCode::Right),
        CKey::Home => Some(KeyCode::Home),
        CKey::End => Some(KeyCode::End),
        _ => None,
    }
}

impl Console for CrosstermConsole {
    fn next_key(&mut self) -> Result<KeyEvent> {
        // Skip events the line editor has no mapping for (mouse, focus,
        // resize, key release) and block until a usable press arrives.
        loop {
            if let Event::Key(k) = read()?
                && k.kind != KeyEventKind::Release
                && let Some(code) = map_code(k.code)
            {
                return Ok(KeyEvent::new(code, map_mods(k.modifiers)));
            }
        }
    }

    fn cursor(&mut self) -> Result<(u16, u16)> {
        Ok(cursor::position()?)
    }

    fn move_to(&mut self, col: u16, row: u16) -> Result<()> {
        execute!(stdout(), MoveTo(col, row))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let mut out = stdout();
        execute!(out, Print(text))?;
        out.flush()?;
        Ok(())
    }

    fn width(&self) -> Result<u16> {
        Ok(size()?.0)
    }

    fn height(&self) -> Result<u16> {
        Ok(size()?.1)
    }

    fn swap_highlight(&mut self) -> Result<()> {
        execute!(stdout(), SetAttribute(Attribute::Reverse))?;
        Ok(())
    }

    fn restore_colors(&mut self) -> Result<()> {
        execute!(stdout(), SetAttribute(Attribute::NoReverse))?;
        Ok(())
    }
}
