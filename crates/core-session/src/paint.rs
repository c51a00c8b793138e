//! Screen painting for the line under edit.
//!
//! Every function repaints relative to the session origin through the
//! `Console` capability; nothing here reads ambient terminal state. The
//! window width is fetched live on each call so wrap points always follow
//! the current window size.

use crate::CursorMap;
use anyhow::Result;
use core_console::Console;
use core_line::{LineBuffer, Selection};

/// Park the terminal caret on buffer index `index`.
pub fn place_cursor<C>(con: &mut C, map: &CursorMap, index: usize) -> Result<()>
where
    C: Console + ?Sized,
{
    let width = con.width()?;
    let (col, row) = map.position(index, width);
    con.move_to(col, row)
}

/// Blank out `len` cells from the origin. Used before repainting a buffer
/// that shrank so stale tail characters do not linger on screen.
pub fn clear_span<C>(con: &mut C, map: &CursorMap, len: usize) -> Result<()>
where
    C: Console + ?Sized,
{
    if len == 0 {
        return Ok(());
    }
    let (col, row) = map.origin();
    con.move_to(col, row)?;
    con.write(&" ".repeat(len))
}

/// Rewrite the whole buffer from the origin and park the caret on `index`.
pub fn repaint_line<C>(con: &mut C, map: &CursorMap, buf: &LineBuffer, index: usize) -> Result<()>
where
    C: Console + ?Sized,
{
    let (col, row) = map.origin();
    con.move_to(col, row)?;
    con.write(&buf.text())?;
    place_cursor(con, map, index)
}

/// Repaint the buffer with the selected span in swapped colors. The span is
/// first cleared of old formatting by a plain rewrite, then overwritten
/// with highlight on, and the caret lands on the focus — the edge the user
/// is actively moving.
pub fn paint_selection<C>(
    con: &mut C,
    map: &CursorMap,
    buf: &LineBuffer,
    sel: &Selection,
) -> Result<()>
where
    C: Console + ?Sized,
{
    let (col, row) = map.origin();
    con.move_to(col, row)?;
    con.write(&buf.text())?;
    if !sel.is_empty() {
        place_cursor(con, map, sel.start())?;
        con.swap_highlight()?;
        con.write(&buf.slice(sel.start(), sel.len()))?;
        con.restore_colors()?;
    }
    place_cursor(con, map, sel.focus())
}
