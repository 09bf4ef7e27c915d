use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ElementId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorCategory, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::surface::{GuiSurface, SurfaceState};

#[derive(Debug, Clone)]
struct StatusBanner {
    category: UiErrorCategory,
    message: String,
}

fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Configuration => "Configuration",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn element_id(element: ElementId) -> egui::Id {
    egui::Id::new(element.anchor())
}

pub struct ShortenerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    surface: Arc<GuiSurface>,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl ShortenerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        surface: Arc<GuiSurface>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            surface,
            status: "Starting...".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::error!(context = ?err.context(), "{}", err.message());
                    self.status = format!("{} error", err_label(err.category()));
                    self.status_banner = Some(StatusBanner {
                        category: err.category(),
                        message: err.message().to_string(),
                    });
                }
            }
        }
    }

    fn show_form(state: &mut SurfaceState, ui: &mut egui::Ui, commands: &mut Vec<BackendCommand>) {
        ui.push_id(ElementId::Form.anchor(), |ui| {
            ui.horizontal(|ui| {
                let url_field = ui.add(
                    egui::TextEdit::singleline(&mut state.form.url)
                        .id(element_id(ElementId::UrlInput))
                        .hint_text("https://example.com/a/very/long/link")
                        .desired_width(420.0),
                );
                let entered =
                    url_field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let submit = ui.add_enabled(state.submit_enabled, egui::Button::new("Shorten"));
                if submit.clicked() || (entered && state.submit_enabled) {
                    commands.push(BackendCommand::Submit);
                }
            });

            let toggle =
                ui.add(egui::Button::new(state.options_toggle_label.as_str()).frame(false));
            if toggle.clicked() {
                commands.push(BackendCommand::ToggleOptions);
            }

            if state.advanced_options_visible {
                egui::Grid::new(ElementId::AdvancedOptions.anchor())
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Custom alias");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.form.custom_alias)
                                .id(element_id(ElementId::CustomAliasInput)),
                        );
                        ui.end_row();

                        ui.label("Password");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.form.password)
                                .id(element_id(ElementId::PasswordInput))
                                .password(true),
                        );
                        ui.end_row();

                        ui.label("Max clicks");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.form.max_clicks)
                                .id(element_id(ElementId::MaxClicksInput))
                                .hint_text("no limit"),
                        );
                        ui.end_row();
                    });
            }
        });
    }

    fn show_result(state: &SurfaceState, ui: &mut egui::Ui, commands: &mut Vec<BackendCommand>) {
        if !state.result_visible {
            return;
        }
        ui.separator();
        ui.push_id(ElementId::ResultSection.anchor(), |ui| {
            ui.label("Your short URL");
            ui.horizontal(|ui| {
                let mut output: &str = &state.short_url_output;
                ui.add(
                    egui::TextEdit::singleline(&mut output)
                        .id(element_id(ElementId::ShortUrlOutput))
                        .desired_width(360.0),
                );
                let copy = ui.add(egui::Button::new(state.copy_button_label.as_str()));
                if copy.clicked() {
                    commands.push(BackendCommand::Copy);
                }
            });
        });
    }

    /// Front alert as a modal notice; returns true once dismissed.
    fn show_alert(ctx: &egui::Context, message: &str) -> bool {
        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        dismissed
    }
}

impl eframe::App for ShortenerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut commands = Vec::new();
        {
            let surface = Arc::clone(&self.surface);
            let mut state = surface.lock();
            let blocked = !state.alerts.is_empty();

            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                if let Some(banner) = &self.status_banner {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(
                        color,
                        format!("{}: {}", err_label(banner.category), banner.message),
                    );
                }
                ui.label(self.status.as_str());
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("URL Shortener");
                ui.add_space(8.0);
                ui.add_enabled_ui(!blocked, |ui| {
                    Self::show_form(&mut state, ui, &mut commands);
                    Self::show_result(&state, ui, &mut commands);
                });
            });

            let dismissed = match state.alerts.front() {
                Some(message) => Self::show_alert(ctx, message),
                None => false,
            };
            if dismissed {
                state.alerts.pop_front();
            }
        }

        for cmd in commands {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
        }
    }
}
