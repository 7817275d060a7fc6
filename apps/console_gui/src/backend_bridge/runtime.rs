//! Backend worker thread: runs the customer console and streams state back to the UI.

use std::thread;

use console_core::{
    CustomerConsole, CustomerDirectory, HttpCustomerDirectory, Notification, Notifier,
};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::{CustomerDraft, DraftEdit};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Hands console notifications to the UI queue in the order they are raised.
pub struct UiNotifier {
    ui_tx: Sender<UiEvent>,
}

impl UiNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }
}

impl Notifier for UiNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(TrySendError::Full(_)) = self.ui_tx.try_send(UiEvent::Notification(notification))
        {
            tracing::warn!("ui event queue is full; dropping notification");
        }
    }
}

pub fn launch(service_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let directory = match HttpCustomerDirectory::new(&service_url) {
                Ok(directory) => directory,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(format!(
                        "backend worker startup failure: {err}"
                    )));
                    tracing::error!("failed to build directory client: {err}");
                    return;
                }
            };

            let mut console = CustomerConsole::new(directory, UiNotifier::new(ui_tx.clone()));
            console.mount().await;
            publish_state(&ui_tx, &console, true);
            let _ = ui_tx.try_send(UiEvent::Info(format!("Connected to {service_url}")));

            while let Ok(cmd) = cmd_rx.recv() {
                let sync_form = cmd.syncs_form();
                handle_command(&mut console, cmd).await;
                publish_state(&ui_tx, &console, sync_form);
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

pub async fn handle_command<D: CustomerDirectory, N: Notifier>(
    console: &mut CustomerConsole<D, N>,
    cmd: BackendCommand,
) {
    tracing::debug!(command = cmd.name(), "backend: handling ui command");
    match cmd {
        BackendCommand::Refresh => {
            console.fetch_all().await;
        }
        BackendCommand::Submit { draft } => {
            apply_draft(console, draft);
            console.submit().await;
        }
        BackendCommand::BeginEdit { customer } => console.begin_edit(&customer),
        BackendCommand::CancelEdit => console.cancel_edit(),
        BackendCommand::Delete { email } => {
            console.delete(&email).await;
        }
        BackendCommand::ToggleActive {
            email,
            current_active,
        } => {
            console.toggle_active(&email, current_active).await;
        }
        BackendCommand::Search { term } => console.search(term),
        BackendCommand::Sort { field } => console.sort(field),
    }
}

fn apply_draft<D: CustomerDirectory, N: Notifier>(
    console: &mut CustomerConsole<D, N>,
    draft: CustomerDraft,
) {
    console.edit_draft(DraftEdit::Name(draft.name));
    console.edit_draft(DraftEdit::Email(draft.email));
    console.edit_draft(DraftEdit::FavNumber(draft.fav_number));
    console.edit_draft(DraftEdit::Active(draft.active));
}

fn publish_state<D: CustomerDirectory, N: Notifier>(
    ui_tx: &Sender<UiEvent>,
    console: &CustomerConsole<D, N>,
    sync_form: bool,
) {
    let event = UiEvent::StateChanged {
        state: console.state().clone(),
        sync_form,
    };
    if let Err(TrySendError::Full(_)) = ui_tx.try_send(event) {
        tracing::warn!("ui event queue is full; dropping state snapshot");
    }
}
