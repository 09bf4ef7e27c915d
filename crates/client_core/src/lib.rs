use std::sync::Arc;

use shared::domain::AdvancedOptionsVisibility;

pub mod clipboard;
pub mod config;
mod copy;
pub mod error;
pub mod form;
mod ports;
mod presenter;
pub mod service;
mod submit;
mod toggle;

pub use clipboard::SystemClipboard;
pub use config::{load_settings, Settings};
pub use copy::{CopyController, CopyOutcome};
pub use error::{ClipboardError, ShortenError};
pub use form::FormValues;
pub use ports::{ClipboardPort, ShortenerApi, UiPort};
pub use presenter::ResultPresenter;
pub use service::HttpShortenerApi;
pub use submit::{SubmissionCoordinator, SubmitOutcome};
pub use toggle::OptionsToggle;

/// The shortening widget: toggle, submission, result and copy controllers
/// wired to one surface.
pub struct ShortenerWidget {
    ui: Arc<dyn UiPort>,
    toggle: OptionsToggle,
    presenter: ResultPresenter,
    submission: SubmissionCoordinator,
    copy: CopyController,
}

impl ShortenerWidget {
    pub fn new(
        ui: Arc<dyn UiPort>,
        clipboard: Arc<dyn ClipboardPort>,
        api: Arc<dyn ShortenerApi>,
        settings: &Settings,
    ) -> Self {
        let presenter = ResultPresenter::new(Arc::clone(&ui));
        Self {
            toggle: OptionsToggle::new(Arc::clone(&ui)),
            submission: SubmissionCoordinator::new(Arc::clone(&ui), api, presenter.clone()),
            copy: CopyController::new(
                Arc::clone(&ui),
                clipboard,
                presenter.clone(),
                settings.copy_revert_delay(),
            ),
            presenter,
            ui,
        }
    }

    /// Uses the HTTP service at `settings.endpoint` and the host clipboard.
    pub fn with_system_services(
        ui: Arc<dyn UiPort>,
        settings: &Settings,
    ) -> Result<Self, ShortenError> {
        let api = HttpShortenerApi::from_settings(settings)?;
        Ok(Self::new(ui, Arc::new(SystemClipboard), Arc::new(api), settings))
    }

    /// Puts the surface into its initial state.
    pub fn attach(&self) {
        self.toggle.render();
        self.ui.set_result_visible(false);
        self.copy.render_idle();
        self.ui.set_submit_enabled(true);
    }

    pub fn toggle_options(&self) -> AdvancedOptionsVisibility {
        self.toggle.toggle()
    }

    pub fn options_visibility(&self) -> AdvancedOptionsVisibility {
        self.toggle.visibility()
    }

    /// Reads the form from the surface and submits it.
    pub async fn submit_form(&self) -> SubmitOutcome {
        self.submit(self.ui.form_values()).await
    }

    pub async fn submit(&self, form: FormValues) -> SubmitOutcome {
        self.submission.submit(form).await
    }

    pub async fn copy(&self) -> CopyOutcome {
        self.copy.copy().await
    }

    pub fn short_url(&self) -> String {
        self.presenter.current()
    }

    pub fn copy_controller(&self) -> &CopyController {
        &self.copy
    }
}

#[cfg(test)]
#[path = "tests/fakes.rs"]
pub(crate) mod fakes;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
