//! Edit session: the per-keystroke dispatcher composing the line buffer,
//! selection tracker, completion panel, cursor mapper, and console painting
//! into one blocking `read_line` operation.

mod cursor_map;
pub mod paint;
mod session;

pub use cursor_map::CursorMap;
pub use session::LineReader;
