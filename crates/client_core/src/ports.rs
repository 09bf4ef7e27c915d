//! Seams between the widget core and whatever renders it.

use async_trait::async_trait;
use shared::protocol::{ShortenRequest, ShortenResponse};

use crate::{
    error::{ClipboardError, ShortenError},
    form::FormValues,
};

/// Typed access to the widget's named elements.
///
/// Implementations use interior mutability; the core may call these from a
/// runtime thread other than the one drawing the surface.
pub trait UiPort: Send + Sync {
    /// Current raw values of the url and advanced-option inputs.
    fn form_values(&self) -> FormValues;

    fn set_advanced_options_visible(&self, visible: bool);
    fn set_options_toggle_label(&self, label: &str);

    fn short_url_output(&self) -> String;
    fn set_short_url_output(&self, value: &str);
    fn set_result_visible(&self, visible: bool);

    fn set_copy_button_label(&self, label: &str);
    fn set_submit_enabled(&self, enabled: bool);

    /// Blocking, dismissable notification.
    fn alert(&self, message: &str);
}

#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[async_trait]
pub trait ShortenerApi: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError>;
}
