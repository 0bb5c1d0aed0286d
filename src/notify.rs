//! Error logging and user notification collaborators.
//!
//! Providers report failures through a `Notifier` handed to them at
//! construction and never touch logging configuration themselves.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use crate::TRACING_TARGET;

/// Tracing target for messages meant for the user.
pub const USER_TRACING_TARGET: &str = "dataprov::user";

/// Sink for diagnostic logs and user-facing messages.
pub trait Notifier: Send + Sync + Debug {
    /// Record an error in the diagnostic log.
    fn log_error(&self, context: &str, message: &str);

    /// Surface a message to the user.
    fn notify_user(&self, message: &str);
}

/// Notifier emitting `tracing` events.
///
/// Diagnostic errors go to the crate target at `error` level, user messages
/// go to `dataprov::user` at `warn` level so hosts can route them separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn log_error(&self, context: &str, message: &str) {
        tracing::error!(target: TRACING_TARGET, context = %context, "{message}");
    }

    fn notify_user(&self, message: &str) {
        tracing::warn!(target: USER_TRACING_TARGET, "{message}");
    }
}

/// Notifier that records every message, for assertions in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    errors: Arc<Mutex<Vec<(String, String)>>>,
    notifications: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    /// Create a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged errors as `(context, message)` pairs.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Messages surfaced to the user.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.errors().is_empty() && self.notifications().is_empty()
    }

    /// Clear both streams.
    pub fn clear(&self) {
        self.errors.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Notifier for RecordingNotifier {
    fn log_error(&self, context: &str, message: &str) {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((context.to_string(), message.to_string()));
    }

    fn notify_user(&self, message: &str) {
        self.notifications
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }
}
