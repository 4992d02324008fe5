//! Clipboard write helper (copypasta). Write-only; there is no read path.

use copypasta::{ClipboardContext, ClipboardProvider};

/// Copy text to the system clipboard. Returns false when no clipboard is
/// available (e.g. headless sessions) so callers can report failure instead
/// of propagating an error.
pub fn copy_to_clipboard(content: &str) -> bool {
    match ClipboardContext::new() {
        Ok(mut ctx) => ctx.set_contents(content.to_string()).is_ok(),
        Err(_) => false,
    }
}
