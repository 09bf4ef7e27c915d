use std::{
    path::PathBuf,
    process::ExitCode,
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Result;
use clap::Parser;
use client_core::{
    config::load_settings_from, load_settings, CopyOutcome, FormValues, ShortenerWidget,
    SubmitOutcome, UiPort,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Shorten a URL with the configured shortening service.
#[derive(Parser, Debug)]
struct Args {
    /// Long URL to shorten.
    url: String,
    #[arg(long)]
    alias: Option<String>,
    #[arg(long)]
    password: Option<String>,
    /// Click limit; zero or non-numeric means no limit.
    #[arg(long)]
    max_clicks: Option<String>,
    /// Overrides the configured service root.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file; defaults to `$SHORTENER_CONFIG` or `shortener.toml`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Copy the short URL to the clipboard.
    #[arg(long)]
    copy: bool,
}

impl Args {
    fn form_values(&self) -> FormValues {
        FormValues {
            url: self.url.clone(),
            custom_alias: self.alias.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            max_clicks: self.max_clicks.clone().unwrap_or_default(),
        }
    }
}

/// Terminal rendering of the widget: the result goes to stdout, alerts to
/// stderr, label changes to the debug log.
struct TerminalSurface {
    form: FormValues,
    short_url: Mutex<String>,
}

impl TerminalSurface {
    fn new(form: FormValues) -> Self {
        Self {
            form,
            short_url: Mutex::new(String::new()),
        }
    }
}

impl UiPort for TerminalSurface {
    fn form_values(&self) -> FormValues {
        self.form.clone()
    }

    fn set_advanced_options_visible(&self, visible: bool) {
        tracing::debug!(visible, "advanced options visibility");
    }

    fn set_options_toggle_label(&self, label: &str) {
        tracing::debug!(label, "options toggle label");
    }

    fn short_url_output(&self) -> String {
        self.short_url
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_short_url_output(&self, value: &str) {
        *self.short_url.lock().unwrap_or_else(PoisonError::into_inner) = value.to_string();
    }

    fn set_result_visible(&self, visible: bool) {
        if visible {
            println!("{}", self.short_url_output());
        }
    }

    fn set_copy_button_label(&self, label: &str) {
        tracing::debug!(label, "copy button label");
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::debug!(enabled, "submit enabled");
    }

    fn alert(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Any outcome other than a fresh short URL has already been alerted, so the
/// process only needs to exit non-zero.
fn submit_exit_code(outcome: &SubmitOutcome) -> Option<ExitCode> {
    match outcome {
        SubmitOutcome::Shortened(_) => None,
        SubmitOutcome::Failed | SubmitOutcome::Rejected | SubmitOutcome::Ignored => {
            Some(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => load_settings_from(path, |key| std::env::var(key).ok())?,
        None => load_settings()?,
    };
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = endpoint.clone();
        settings.validate()?;
    }

    let surface = Arc::new(TerminalSurface::new(args.form_values()));
    let widget = ShortenerWidget::with_system_services(surface, &settings)?;
    widget.attach();

    if let Some(code) = submit_exit_code(&widget.submit_form().await) {
        return Ok(code);
    }

    if args.copy {
        match widget.copy().await {
            CopyOutcome::Copied => eprintln!("copied to clipboard"),
            CopyOutcome::Failed => return Ok(ExitCode::FAILURE),
        }
    }

    Ok(ExitCode::SUCCESS)
}
