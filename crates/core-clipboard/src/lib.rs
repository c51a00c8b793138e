//! Clipboard capability with swappable backends.
//!
//! The editing core only sees the `Clipboard` trait; the OS integration
//! lives behind `SystemClipboard`. Both operations are best-effort: the
//! native clipboard can be transiently locked by another process, and the
//! session treats any failure as a silent no-op (copy/cut leave the buffer
//! untouched, paste inserts nothing).

use copypasta::{ClipboardContext, ClipboardProvider};

pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard backend unavailable: {0}")]
    Backend(String),
}

/// Process-wide shared clipboard state, last-writer-wins.
pub trait Clipboard {
    fn set(&mut self, content: String) -> ClipboardResult<()>;
    fn get(&mut self) -> ClipboardResult<String>;
}

/// OS clipboard via `copypasta`. A fresh context is opened per operation so
/// a failed handshake with the platform clipboard never poisons the session.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set(&mut self, content: String) -> ClipboardResult<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Backend(e.to_string()))?;
        let copied_len = content.len();
        ctx.set_contents(content)
            .map_err(|e| ClipboardError::Backend(e.to_string()))?;
        tracing::debug!(target: "clipboard", copied_len, "content stored");
        Ok(())
    }

    fn get(&mut self) -> ClipboardResult<String> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| ClipboardError::Backend(e.to_string()))?;
        ctx.get_contents()
            .map_err(|e| ClipboardError::Backend(e.to_string()))
    }
}

pub mod test_fixtures {
    use super::{Clipboard, ClipboardResult};

    /// In-memory stand-in used by session tests.
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl Clipboard for TestClipboard {
        fn set(&mut self, content: String) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }

        fn get(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }

    /// Backend that always fails, for exercising silent degradation.
    #[derive(Debug, Default)]
    pub struct LockedClipboard;

    impl Clipboard for LockedClipboard {
        fn set(&mut self, _content: String) -> ClipboardResult<()> {
            Err(super::ClipboardError::Backend("locked".into()))
        }

        fn get(&mut self) -> ClipboardResult<String> {
            Err(super::ClipboardError::Backend("locked".into()))
        }
    }
}
