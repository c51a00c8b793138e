//! Logical buffer index <-> wrapped screen coordinate translation.
//!
//! Models terminal auto-wrap exactly as the terminal applies it when
//! characters are written sequentially from the session origin: each step
//! advances one column, and reaching the window width resets the column and
//! advances the row. Width is supplied live by the caller at every
//! translation, never snapshotted.

/// Screen coordinate (column, row) in effect when the read began;
/// immutable for the duration of one read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMap {
    origin: (u16, u16),
}

impl CursorMap {
    pub fn new(origin: (u16, u16)) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Screen cell of buffer index `index` under the given window width.
    pub fn position(&self, index: usize, width: u16) -> (u16, u16) {
        let width = width.max(1) as usize;
        let stepped = self.origin.0 as usize + index;
        let col = stepped % width;
        let row = self.origin.1 as usize + stepped / width;
        (col as u16, row as u16)
    }

    /// Inverse of [`position`](Self::position): replay forward steps from
    /// the origin until the produced coordinate matches `cursor`, capped at
    /// `width * height` steps. On a desynced terminal the cap is hit and
    /// the last best-effort index is returned rather than looping forever.
    ///
    /// The session tracks its index explicitly and does not rely on this
    /// scan; it exists for consistency checks.
    pub fn index_of(&self, cursor: (u16, u16), width: u16, height: u16) -> usize {
        let cap = width as usize * height as usize;
        let (mut col, mut row) = self.origin;
        for index in 0..cap {
            if (col, row) == cursor {
                return index;
            }
            col += 1;
            if col >= width.max(1) {
                col = 0;
                row += 1;
            }
        }
        cap
    }
}
