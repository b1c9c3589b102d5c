//! Copy the displayed short URL to a clipboard

use tracing::{debug, warn};

use super::create::CreatePage;
use super::notification::Notification;
use crate::errors::Result;

pub const COPY_SUCCESS_TITLE: &str = "Copied to clipboard";
pub const COPY_FAILED_TITLE: &str = "Could not copy";

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Write the page's short URL to `clipboard` and notify the outcome.
///
/// Returns true when the text reached the clipboard. No retry.
pub fn copy_short_url(page: &mut CreatePage, clipboard: &mut dyn ClipboardWriter) -> bool {
    let Some(short_url) = page.short_url().map(str::to_owned) else {
        page.notifications_mut().push(Notification::warning(
            COPY_FAILED_TITLE,
            "There is no short URL to copy yet",
        ));
        return false;
    };

    match clipboard.write_text(&short_url) {
        Ok(()) => {
            debug!("Copied {} to clipboard", short_url);
            page.notifications_mut()
                .push(Notification::success(COPY_SUCCESS_TITLE, short_url));
            true
        }
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            page.notifications_mut()
                .push(Notification::warning(COPY_FAILED_TITLE, e.message()));
            false
        }
    }
}

/// System clipboard through arboard
///
/// The last handle stays alive: on X11 the copied text disappears once the
/// owning handle is dropped.
#[cfg(feature = "tui")]
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

#[cfg(feature = "tui")]
impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        use crate::errors::ShortfrontError;

        let clipboard = arboard::Clipboard::new()
            .map_err(|e| ShortfrontError::clipboard(e.to_string()))?;
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text)
            .map_err(|e| ShortfrontError::clipboard(e.to_string()))
    }
}
