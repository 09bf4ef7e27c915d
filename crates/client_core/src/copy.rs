use std::{sync::Arc, time::Duration};

use shared::domain::CopyButtonState;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    error::COPY_FAILED_ALERT,
    ports::{ClipboardPort, UiPort},
    presenter::ResultPresenter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Copies the presented short URL and drives the button's confirmation.
///
/// Each successful copy replaces the pending revert, so the label returns
/// to idle only once the latest confirmation has been shown for the full
/// delay.
pub struct CopyController {
    ui: Arc<dyn UiPort>,
    clipboard: Arc<dyn ClipboardPort>,
    presenter: ResultPresenter,
    revert_after: Duration,
    state: Arc<Mutex<CopyButtonState>>,
    pending_revert: Mutex<Option<JoinHandle<()>>>,
}

impl CopyController {
    pub fn new(
        ui: Arc<dyn UiPort>,
        clipboard: Arc<dyn ClipboardPort>,
        presenter: ResultPresenter,
        revert_after: Duration,
    ) -> Self {
        Self {
            ui,
            clipboard,
            presenter,
            revert_after,
            state: Arc::new(Mutex::new(CopyButtonState::Idle)),
            pending_revert: Mutex::new(None),
        }
    }

    pub async fn state(&self) -> CopyButtonState {
        *self.state.lock().await
    }

    pub fn render_idle(&self) {
        self.ui.set_copy_button_label(CopyButtonState::Idle.label());
    }

    pub async fn copy(&self) -> CopyOutcome {
        let value = self.presenter.current();
        if let Err(err) = self.clipboard.write_text(&value).await {
            warn!("clipboard write failed: {err}");
            self.ui.alert(COPY_FAILED_ALERT);
            return CopyOutcome::Failed;
        }

        let mut pending = self.pending_revert.lock().await;
        if let Some(previous) = pending.take() {
            previous.abort();
            debug!("cancelled pending copy-button revert");
        }

        {
            let mut state = self.state.lock().await;
            *state = CopyButtonState::Confirmed;
            self.ui.set_copy_button_label(state.label());
        }

        let ui = Arc::clone(&self.ui);
        let state = Arc::clone(&self.state);
        let delay = self.revert_after;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            *state = CopyButtonState::Idle;
            ui.set_copy_button_label(state.label());
            debug!("copy button reverted");
        }));

        CopyOutcome::Copied
    }
}

impl Drop for CopyController {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_revert.get_mut().take() {
            pending.abort();
        }
    }
}
