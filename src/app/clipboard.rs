use anyhow::{Result, anyhow};

/// Destination for copied swatch text.
pub trait Clipboard {
    fn set_contents(&mut self, text: String) -> Result<()>;
}

/// The system clipboard.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, text: String) -> Result<()> {
        cli_clipboard::set_contents(text).map_err(|err| anyhow!("clipboard unavailable: {err}"))
    }
}
