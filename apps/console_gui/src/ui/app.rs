use std::time::{Duration, Instant};

use console_core::{ConsoleState, Notification, Severity};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::{CustomerDraft, SortDirection, SortField, SortSpec};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::toasts::ToastQueue;

pub fn submit_label(editing: bool) -> &'static str {
    if editing {
        "Update Customer"
    } else {
        "Add Customer"
    }
}

/// Arrow for a column header. Columns other than the sorted one show ascending.
pub fn sort_indicator(field: SortField, current: SortSpec) -> &'static str {
    let direction = if current.field == field {
        current.direction
    } else {
        SortDirection::Ascending
    };
    match direction {
        SortDirection::Ascending => "⬆",
        SortDirection::Descending => "⬇",
    }
}

fn toast_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::Success => egui::Color32::from_rgb(46, 160, 67),
        Severity::Error => egui::Color32::from_rgb(218, 54, 51),
    }
}

pub struct ConsoleApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ConsoleState,
    form: CustomerDraft,
    search_input: String,
    toasts: ToastQueue,
    status: String,
    service_url: String,
}

impl ConsoleApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        service_url: String,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: ConsoleState::default(),
            form: CustomerDraft::default(),
            search_input: String::new(),
            toasts: ToastQueue::default(),
            status: "Loading customers...".to_string(),
            service_url,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(message) => {
                    self.toasts
                        .push(Notification::error(message.clone()), Instant::now());
                    self.status = message;
                }
                UiEvent::StateChanged { state, sync_form } => {
                    if sync_form {
                        self.form = state.draft().clone();
                    }
                    self.state = state;
                }
                UiEvent::Notification(notification) => {
                    self.toasts.push(notification, Instant::now());
                }
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui, commands: &mut Vec<BackendCommand>) {
        let editing = self.state.is_editing();
        ui.horizontal_wrapped(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .hint_text("Name")
                    .desired_width(160.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.form.email)
                    .hint_text("Email")
                    .desired_width(200.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.form.fav_number)
                    .hint_text("Favorite Number")
                    .desired_width(140.0),
            );
            if ui.button(submit_label(editing)).clicked() {
                commands.push(BackendCommand::Submit {
                    draft: self.form.clone(),
                });
            }
            if editing && ui.button("Cancel").clicked() {
                commands.push(BackendCommand::CancelEdit);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let search = ui.add(
                    egui::TextEdit::singleline(&mut self.search_input)
                        .hint_text("Search...")
                        .desired_width(200.0),
                );
                if search.changed() {
                    commands.push(BackendCommand::Search {
                        term: self.search_input.clone(),
                    });
                }
            });
        });
    }

    fn show_table(&self, ui: &mut egui::Ui, commands: &mut Vec<BackendCommand>) {
        let sort = self.state.sort();
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("customer_table")
                .striped(true)
                .num_columns(SortField::ALL.len() + 2)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    ui.label("");
                    for field in SortField::ALL {
                        let header = format!("{} {}", field.label(), sort_indicator(field, sort));
                        if ui.button(header).clicked() {
                            commands.push(BackendCommand::Sort { field });
                        }
                    }
                    ui.strong("Actions");
                    ui.end_row();

                    for (index, customer) in self.state.displayed().iter().enumerate() {
                        ui.label((index + 1).to_string());
                        ui.label(customer.name.as_str());
                        ui.label(customer.email.as_str());
                        ui.label(customer.fav_number.as_str());

                        // Only a refresh changes the shown flag.
                        let mut active = customer.active;
                        if ui.checkbox(&mut active, "").changed() {
                            commands.push(BackendCommand::ToggleActive {
                                email: customer.email.clone(),
                                current_active: customer.active,
                            });
                        }

                        ui.horizontal(|ui| {
                            if ui.button("Edit").clicked() {
                                commands.push(BackendCommand::BeginEdit {
                                    customer: customer.clone(),
                                });
                            }
                            if ui.button("Delete").clicked() {
                                commands.push(BackendCommand::Delete {
                                    email: customer.email.clone(),
                                });
                            }
                        });
                        ui.end_row();
                    }
                });
        });
    }

    fn show_toasts(&mut self, ctx: &egui::Context) {
        self.toasts.prune(Instant::now());
        if self.toasts.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toast_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -40.0))
            .show(ctx, |ui| {
                for (index, toast) in self.toasts.iter().enumerate() {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.colored_label(toast_color(toast.severity), toast.message.as_str());
                            if ui.small_button("x").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                }
            });
        if let Some(index) = dismissed {
            self.toasts.dismiss(index);
        }
    }
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        let mut commands = Vec::new();

        egui::TopBottomPanel::top("console_top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Customer Management");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Refresh").clicked() {
                        commands.push(BackendCommand::Refresh);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("console_status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.service_url.as_str());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_form(ui, &mut commands);
            ui.separator();
            self.show_table(ui, &mut commands);
        });

        self.show_toasts(ctx);

        for cmd in commands {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
        }

        let repaint_after = if self.toasts.is_empty() { 250 } else { 100 };
        ctx.request_repaint_after(Duration::from_millis(repaint_after));
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::Customer;

    use super::*;

    #[test]
    fn submit_button_reflects_edit_mode() {
        assert_eq!(submit_label(false), "Add Customer");
        assert_eq!(submit_label(true), "Update Customer");
    }

    #[test]
    fn only_sorted_column_shows_its_direction() {
        let current = SortSpec::descending(SortField::Email);
        assert_eq!(sort_indicator(SortField::Email, current), "⬇");
        assert_eq!(sort_indicator(SortField::Name, current), "⬆");
    }

    #[test]
    fn form_follows_console_draft_only_when_asked() {
        let (cmd_tx, _cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let mut app = ConsoleApp::new(cmd_tx, ui_rx, "http://localhost:8000".into());
        let ann = Customer::new("Ann", "ann@x.com", "3", true);
        let editing = ConsoleState::default()
            .refreshed(vec![ann.clone()])
            .editing(&ann);

        app.form.name = "typed".into();
        ui_tx
            .send(UiEvent::StateChanged {
                state: editing.clone(),
                sync_form: false,
            })
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.form.name, "typed");
        assert!(app.state.is_editing());

        ui_tx
            .send(UiEvent::StateChanged {
                state: editing,
                sync_form: true,
            })
            .expect("send");
        ui_tx
            .send(UiEvent::Notification(Notification::success("done")))
            .expect("send");
        app.process_ui_events();
        assert_eq!(app.form.name, "Ann");
        assert!(!app.toasts.is_empty());
    }
}
