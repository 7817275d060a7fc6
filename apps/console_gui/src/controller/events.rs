//! Backend-to-UI events.

use console_core::{ConsoleState, Notification};

pub enum UiEvent {
    Info(String),
    Error(String),
    StateChanged {
        state: ConsoleState,
        /// Set after submit/edit/cancel: the form shows the console draft again.
        sync_form: bool,
    },
    Notification(Notification),
}
