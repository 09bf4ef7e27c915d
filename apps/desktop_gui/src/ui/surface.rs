use std::{
    collections::VecDeque,
    sync::{Mutex, MutexGuard, PoisonError},
};

use client_core::{FormValues, UiPort};
use eframe::egui;

/// Everything the widget's elements currently show.
#[derive(Debug, Default)]
pub struct SurfaceState {
    pub form: FormValues,
    pub advanced_options_visible: bool,
    pub options_toggle_label: String,
    pub short_url_output: String,
    pub result_visible: bool,
    pub copy_button_label: String,
    pub submit_enabled: bool,
    /// Pending notifications, oldest first; the front one is on screen.
    pub alerts: VecDeque<String>,
}

/// Shared between the egui thread, which edits the inputs in place, and the
/// backend worker, which drives the widget through [`UiPort`].
pub struct GuiSurface {
    state: Mutex<SurfaceState>,
    repaint: Option<egui::Context>,
}

impl GuiSurface {
    pub fn new(repaint: Option<egui::Context>) -> Self {
        Self {
            state: Mutex::new(SurfaceState::default()),
            repaint,
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, apply: impl FnOnce(&mut SurfaceState)) {
        {
            let mut state = self.lock();
            apply(&mut state);
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

impl UiPort for GuiSurface {
    fn form_values(&self) -> FormValues {
        self.lock().form.clone()
    }

    fn set_advanced_options_visible(&self, visible: bool) {
        self.update(|state| state.advanced_options_visible = visible);
    }

    fn set_options_toggle_label(&self, label: &str) {
        self.update(|state| state.options_toggle_label = label.to_string());
    }

    fn short_url_output(&self) -> String {
        self.lock().short_url_output.clone()
    }

    fn set_short_url_output(&self, value: &str) {
        self.update(|state| state.short_url_output = value.to_string());
    }

    fn set_result_visible(&self, visible: bool) {
        self.update(|state| state.result_visible = visible);
    }

    fn set_copy_button_label(&self, label: &str) {
        self.update(|state| state.copy_button_label = label.to_string());
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.update(|state| state.submit_enabled = enabled);
    }

    fn alert(&self, message: &str) {
        tracing::debug!(message, "alert raised");
        self.update(|state| state.alerts.push_back(message.to_string()));
    }
}
