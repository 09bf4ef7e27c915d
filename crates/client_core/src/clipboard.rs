use arboard::Clipboard;
use async_trait::async_trait;

use crate::{error::ClipboardError, ports::ClipboardPort};

/// Host clipboard via `arboard`.
///
/// A handle is opened per write on a blocking worker, since the platform
/// clipboard APIs are synchronous.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Rejected(err.to_string()))
        })
        .await
        .map_err(|err| ClipboardError::Unavailable(format!("clipboard worker failed: {err}")))?
    }
}
