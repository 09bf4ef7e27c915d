//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{CopyOutcome, Settings, ShortenerWidget, SubmitOutcome};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::surface::GuiSurface;

/// Starts the backend worker thread.
///
/// The worker owns a tokio runtime and the widget. Submissions and copies
/// run as tasks so a slow request never holds up a toggle or a copy.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    surface: Arc<GuiSurface>,
    settings: Settings,
) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let widget = match ShortenerWidget::with_system_services(surface, &settings) {
                Ok(widget) => Arc::new(widget),
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err}"),
                    )));
                    tracing::error!("failed to build shortener widget: {err}");
                    return;
                }
            };
            widget.attach();
            tracing::info!(endpoint = %settings.endpoint, "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info(format!("Ready ({})", settings.endpoint)));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::ToggleOptions => {
                        widget.toggle_options();
                    }
                    BackendCommand::Submit => {
                        let widget = Arc::clone(&widget);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let status = match widget.submit_form().await {
                                SubmitOutcome::Shortened(response) => {
                                    format!("Shortened to {}", response.short_url)
                                }
                                SubmitOutcome::Failed => "Shortening failed".to_string(),
                                SubmitOutcome::Rejected => "Nothing to shorten".to_string(),
                                SubmitOutcome::Ignored => {
                                    "A request is already in progress".to_string()
                                }
                            };
                            let _ = ui_tx.try_send(UiEvent::Info(status));
                        });
                    }
                    BackendCommand::Copy => {
                        let widget = Arc::clone(&widget);
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            if widget.copy().await == CopyOutcome::Copied {
                                let _ = ui_tx
                                    .try_send(UiEvent::Info("Copied to clipboard".to_string()));
                            }
                        });
                    }
                }
            }
            tracing::info!("backend worker stopping: command queue closed");
        });
    });
}
