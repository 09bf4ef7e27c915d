use std::sync::Arc;

use tracing::info;

use crate::ports::UiPort;

/// Owns the output field and the result area.
#[derive(Clone)]
pub struct ResultPresenter {
    ui: Arc<dyn UiPort>,
}

impl ResultPresenter {
    pub fn new(ui: Arc<dyn UiPort>) -> Self {
        Self { ui }
    }

    pub fn show(&self, short_url: &str) {
        info!(short_url, "presenting short url");
        self.ui.set_short_url_output(short_url);
        self.ui.set_result_visible(true);
    }

    /// Value currently held by the output field.
    pub fn current(&self) -> String {
        self.ui.short_url_output()
    }
}
