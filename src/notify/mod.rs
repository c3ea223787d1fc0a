//! # Notification Dispatcher
//!
//! Relays a visitor's email address to an external messaging endpoint.
//!
//! ## Fire-and-forget contract
//!
//! [`dispatch`] spawns a detached tokio task that owns copies of everything it
//! needs and reports nothing back. It is never joined, cancelled or awaited,
//! and it must never be awaited from the event loop. Failures are logged and
//! dropped. The UI leaves the sending screen on its own timer whether or not
//! the request finished.

mod telegram;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

pub use telegram::TelegramNotifier;

/// Errors that can occur while delivering a notification.
#[derive(Debug)]
pub enum NotifyError {
    /// Request could not be built or sent (DNS, connection refused, bad URL).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Network(msg) => write!(f, "network error: {msg}"),
            NotifyError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for NotifyError {}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the name of the notifier.
    fn name(&self) -> &str;

    /// Deliver one notification about the given email address.
    async fn notify(&self, email: &str) -> Result<(), NotifyError>;
}

/// The templated message body embedding the submitted email.
pub fn contact_message(email: &str) -> String {
    format!("🚀 New CV Contact!\nEmail: {email}\nSent via OpenClaw CLI")
}

/// Launch a detached notification task. Returns immediately.
///
/// Must be called from within a tokio runtime.
pub fn dispatch(notifier: Arc<dyn Notifier>, email: String) {
    info!("Dispatching contact notification via {}", notifier.name());
    tokio::spawn(async move {
        match notifier.notify(&email).await {
            Ok(()) => info!("Contact notification delivered"),
            Err(e) => warn!("Contact notification failed: {}", e),
        }
    });
}
