//! The single-window form-and-list screen.
//!
//! The UI thread owns the [`DirectoryState`] mirror exclusively; every
//! mutation happens here after draining the backend's event queue, so no
//! two handlers ever touch the state concurrently.

use std::time::{Duration, Instant};

use client_core::{DirectoryState, FormMode};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::UserId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeSeverity {
    Success,
    Error,
}

/// Transient one-shot notification strip. Success notices dismiss
/// themselves; error notices stay until the user dismisses them.
#[derive(Debug, Clone)]
struct Notice {
    severity: NoticeSeverity,
    message: String,
    raised_at: Instant,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Success,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.severity == NoticeSeverity::Success
            && now.duration_since(self.raised_at) >= SUCCESS_NOTICE_TTL
    }
}

pub struct DirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    state: DirectoryState,
    notice: Option<Notice>,
    status: String,
}

/// Maps the current form mode to the store call a submit should issue.
fn submit_command(state: &DirectoryState) -> BackendCommand {
    match state.mode {
        FormMode::Creating => BackendCommand::CreateUser {
            draft: state.draft.clone(),
        },
        FormMode::Editing(id) => BackendCommand::UpdateUser {
            id,
            draft: state.draft.clone(),
        },
    }
}

impl DirectoryApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: DirectoryState::new(),
            notice: None,
            status: String::new(),
        }
    }

    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_ui_event(event);
        }
    }

    fn apply_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::UsersLoaded(users) => {
                // No notice for list loads, successful or not.
                self.state.replace_users(users);
            }
            UiEvent::UserCreated(record) => {
                self.state.fold_created(record);
                self.notice = Some(Notice::success("User created successfully."));
            }
            UiEvent::UserUpdated(record) => {
                self.state.fold_updated(record);
                self.notice = Some(Notice::success("User updated successfully."));
            }
            UiEvent::UserDeleted(id) => {
                self.state.fold_deleted(id);
                self.notice = Some(Notice::success("User deleted successfully."));
            }
            UiEvent::Error(err) => {
                tracing::error!(
                    context = ?err.context(),
                    category = ?err.category(),
                    "backend error: {}",
                    err.message()
                );
                self.notice = Some(Notice::error(err.context().notice_text()));
            }
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn show_notice(&mut self, ui: &mut egui::Ui) {
        if let Some(notice) = self.notice.clone() {
            let (fill, stroke) = match notice.severity {
                NoticeSeverity::Success => (
                    egui::Color32::from_rgb(46, 87, 54),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(92, 156, 105)),
                ),
                NoticeSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&notice.message).color(egui::Color32::WHITE));
                        if notice.severity == NoticeSeverity::Error {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Dismiss").clicked() {
                                        self.notice = None;
                                    }
                                },
                            );
                        }
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn form_text_field(ui: &mut egui::Ui, id: &'static str, hint: &str, value: &mut String) {
        let edit = egui::TextEdit::singleline(value)
            .id_salt(id)
            .hint_text(hint)
            .desired_width(f32::INFINITY);
        ui.add_sized([ui.available_width(), 30.0], edit);
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(ui.visuals().faint_bg_color.gamma_multiply(0.55))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.style_mut().spacing.item_spacing = egui::vec2(8.0, 8.0);

                Self::form_text_field(
                    ui,
                    "first_name",
                    "First Name",
                    &mut self.state.draft.first_name,
                );
                Self::form_text_field(
                    ui,
                    "last_name",
                    "Last Name",
                    &mut self.state.draft.last_name,
                );
                Self::form_text_field(ui, "email", "Email", &mut self.state.draft.email);

                ui.horizontal(|ui| {
                    let label = if self.state.is_editing() {
                        "Update User"
                    } else {
                        "Create User"
                    };
                    // Required-field enforcement lives entirely in this
                    // widget-layer gate; the controller never validates.
                    let can_submit = self.state.draft.is_complete();
                    if ui.add_enabled(can_submit, egui::Button::new(label)).clicked() {
                        let cmd = submit_command(&self.state);
                        self.dispatch(cmd);
                    }
                    if self.state.is_editing() && ui.button("Cancel").clicked() {
                        self.state.cancel_edit();
                    }
                });
            });
    }

    fn show_user_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Users");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Refresh").clicked() {
                    self.dispatch(BackendCommand::LoadUsers);
                }
            });
        });
        ui.add_space(4.0);

        let mut edit_target: Option<UserId> = None;
        let mut delete_target: Option<UserId> = None;

        egui::ScrollArea::vertical()
            .auto_shrink(false)
            .show(ui, |ui| {
                for user in &self.state.users {
                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .stroke(egui::Stroke::new(
                            1.0,
                            ui.visuals().widgets.noninteractive.bg_stroke.color,
                        ))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} {}",
                                            user.first_name, user.last_name
                                        ))
                                        .strong(),
                                    );
                                    ui.weak(&user.email);
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.button("Delete").clicked() {
                                            delete_target = Some(user.id);
                                        }
                                        if ui.button("Edit").clicked() {
                                            edit_target = Some(user.id);
                                        }
                                    },
                                );
                            });
                        });
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = edit_target {
            // Local only: the form takes over the record's fields.
            self.state.begin_edit(id);
        }
        if let Some(id) = delete_target {
            self.dispatch(BackendCommand::DeleteUser { id });
        }
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_ui_events();

        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.is_expired(Instant::now()))
        {
            self.notice = None;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("User Directory");
            if !self.status.is_empty() {
                ui.weak(&self.status);
            }
            ui.add_space(8.0);

            self.show_notice(ui);
            self.show_form(ui);
            ui.add_space(12.0);
            self.show_user_list(ui);
        });

        // Backend events arrive without any input event to wake the UI.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
