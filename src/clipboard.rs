//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write clipboard: {0}")]
    Write(String),
}

/// Somewhere a password can be copied to.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. Connects on first copy so a missing display server only
/// matters when the user actually asks for a copy.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx =
                ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no context".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        let result = ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()));
        // Some backends hand back an owned copy on read; wipe it.
        if result.is_ok()
            && let Ok(mut retrieved) = ctx.get_contents()
        {
            retrieved.zeroize();
        }
        result
    }
}

#[cfg(test)]
pub mod fake {
    use super::{Clipboard, ClipboardError};

    /// In-memory clipboard for tests.
    #[derive(Default)]
    pub struct FakeClipboard {
        pub contents: Option<String>,
        pub fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            self.contents = Some(text.to_owned());
            Ok(())
        }
    }
}
