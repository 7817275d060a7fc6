pub mod config;
pub mod controller;
pub mod directory;
pub mod notify;
pub mod outcome;
pub mod state;
pub mod view;

pub use controller::CustomerConsole;
pub use directory::{CustomerDirectory, HttpCustomerDirectory};
pub use notify::{BroadcastNotifier, LogNotifier, Notification, Notifier, Severity};
pub use outcome::{DirectoryError, RequestOutcome};
pub use state::ConsoleState;

#[cfg(test)]
#[path = "tests/mock_directory.rs"]
mod mock_directory;
