use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::{config::load_settings_from, load_settings, Settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::{GuiSurface, ShortenerApp};

#[derive(Parser, Debug)]
struct StartupArgs {
    /// Overrides the configured service root.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file; defaults to `$SHORTENER_CONFIG` or `shortener.toml`.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl StartupArgs {
    fn resolve_settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => load_settings_from(path, |key| std::env::var(key).ok())?,
            None => load_settings()?,
        };
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
            settings.validate()?;
        }
        Ok(settings)
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = StartupArgs::parse();
    let settings = args.resolve_settings();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("URL Shortener")
            .with_inner_size([640.0, 360.0])
            .with_min_inner_size([480.0, 280.0]),
        ..Default::default()
    };
    eframe::run_native(
        "URL Shortener",
        options,
        Box::new(move |cc| {
            let surface = Arc::new(GuiSurface::new(Some(cc.egui_ctx.clone())));
            match settings {
                Ok(settings) => runtime::launch(cmd_rx, ui_tx, Arc::clone(&surface), settings),
                Err(err) => {
                    tracing::error!("invalid settings: {err:#}");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::Settings,
                        format!("invalid settings: {err:#}"),
                    )));
                }
            }
            Ok(Box::new(ShortenerApp::new(cmd_tx, ui_rx, surface)))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{events::UiErrorCategory, orchestration::dispatch_backend_command};
    use client_core::{HttpShortenerApi, ShortenerWidget, SystemClipboard, UiPort};

    fn widget_on(surface: Arc<GuiSurface>) -> ShortenerWidget {
        let settings = Settings::default();
        let api = HttpShortenerApi::from_settings(&settings).expect("http api");
        ShortenerWidget::new(surface, Arc::new(SystemClipboard), Arc::new(api), &settings)
    }

    #[test]
    fn attach_and_toggle_render_into_surface() {
        let surface = Arc::new(GuiSurface::new(None));
        let widget = widget_on(Arc::clone(&surface));
        widget.attach();

        {
            let state = surface.lock();
            assert!(!state.advanced_options_visible);
            assert_eq!(state.options_toggle_label, "Advanced Options ↓");
            assert_eq!(state.copy_button_label, "Copy");
            assert!(state.submit_enabled);
            assert!(!state.result_visible);
        }

        widget.toggle_options();
        assert!(surface.lock().advanced_options_visible);
        widget.toggle_options();
        let state = surface.lock();
        assert!(!state.advanced_options_visible);
        assert_eq!(state.options_toggle_label, "Advanced Options ↓");
    }

    #[test]
    fn surface_reads_form_edits_and_queues_alerts() {
        let surface = GuiSurface::new(None);
        surface.lock().form.url = "https://example.com".to_string();
        surface.lock().form.max_clicks = "3".to_string();
        let form = surface.form_values();
        assert_eq!(form.url, "https://example.com");
        assert_eq!(form.max_clicks, "3");

        surface.alert("first");
        surface.alert("second");
        assert_eq!(surface.lock().alerts.front().map(String::as_str), Some("first"));
        assert_eq!(surface.lock().alerts.len(), 2);
    }

    #[test]
    fn dispatch_reports_disconnected_backend() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(1);
        drop(cmd_rx);
        let mut status = String::new();
        dispatch_backend_command(&cmd_tx, BackendCommand::Submit, &mut status);
        assert!(status.contains("disconnected"));
    }

    #[test]
    fn dispatch_reports_full_queue() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(1);
        let mut status = String::new();
        dispatch_backend_command(&cmd_tx, BackendCommand::Copy, &mut status);
        assert!(status.is_empty());
        dispatch_backend_command(&cmd_tx, BackendCommand::Copy, &mut status);
        assert!(status.contains("full"));
    }

    #[test]
    fn classifies_startup_errors() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "backend worker startup failure: failed to build http client: tls",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);

        let err = UiError::from_message(UiErrorContext::Settings, "invalid settings: bad");
        assert_eq!(err.category(), UiErrorCategory::Configuration);
        assert_eq!(err.context(), UiErrorContext::Settings);

        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "clipboard backend missing",
        );
        assert_eq!(err.category(), UiErrorCategory::Unknown);
    }

    #[test]
    fn endpoint_flag_overrides_settings() {
        let args = StartupArgs::parse_from([
            "desktop_gui",
            "--config",
            "/nonexistent/shortener.toml",
            "--endpoint",
            "https://sh.rt",
        ]);
        let settings = args.resolve_settings().expect("settings");
        assert_eq!(settings.endpoint, "https://sh.rt");

        let args = StartupArgs::parse_from(["desktop_gui", "--endpoint", "ftp://nope"]);
        assert!(args.resolve_settings().is_err());
    }
}
