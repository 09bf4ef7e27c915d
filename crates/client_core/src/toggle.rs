use std::sync::{Arc, Mutex, PoisonError};

use shared::domain::AdvancedOptionsVisibility;
use tracing::debug;

use crate::ports::UiPort;

/// Shows and hides the advanced-options panel.
pub struct OptionsToggle {
    ui: Arc<dyn UiPort>,
    visibility: Mutex<AdvancedOptionsVisibility>,
}

impl OptionsToggle {
    pub fn new(ui: Arc<dyn UiPort>) -> Self {
        Self {
            ui,
            visibility: Mutex::new(AdvancedOptionsVisibility::default()),
        }
    }

    pub fn visibility(&self) -> AdvancedOptionsVisibility {
        *self
            .visibility
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Pushes the current visibility and its label to the surface.
    pub fn render(&self) {
        let visibility = self.visibility();
        self.ui.set_advanced_options_visible(visibility.is_visible());
        self.ui.set_options_toggle_label(visibility.toggle_label());
    }

    pub fn toggle(&self) -> AdvancedOptionsVisibility {
        let next = {
            let mut visibility = self
                .visibility
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *visibility = visibility.flipped();
            *visibility
        };
        debug!(visible = next.is_visible(), "advanced options toggled");
        self.ui.set_advanced_options_visible(next.is_visible());
        self.ui.set_options_toggle_label(next.toggle_label());
        next
    }
}
