//! Backend worker: owns the customer console on a tokio runtime off the UI thread.

pub mod commands;
pub mod runtime;
