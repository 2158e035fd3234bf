// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use presidio_domain::PushSubscription;
use tracing::debug;

/// Errors from the push transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    /// The transport could not deliver the message.
    DeliveryFailed(String),
}

impl std::fmt::Display for PushError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeliveryFailed(msg) => write!(f, "Push delivery failed: {msg}"),
        }
    }
}

impl std::error::Error for PushError {}

/// The seam to the OS-level push transport.
///
/// The dispatcher calls this only after the in-app notification record has
/// been stored; delivery is best-effort and a failure is logged, never
/// propagated as a mutation failure.
pub trait PushTransport: Send + Sync {
    /// Attempts to deliver a push message to the subscribed device.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport could not deliver the message.
    fn send(
        &self,
        subscription: &PushSubscription,
        title: &str,
        body: &str,
        data: Option<&str>,
    ) -> Result<(), PushError>;
}

/// A transport that records delivery intent in the log and reports
/// success. Stands in for the real web-push service, which lives outside
/// this system's boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPushTransport;

impl PushTransport for LoggingPushTransport {
    fn send(
        &self,
        subscription: &PushSubscription,
        title: &str,
        _body: &str,
        data: Option<&str>,
    ) -> Result<(), PushError> {
        debug!(
            endpoint = %subscription.endpoint,
            title = %title,
            data = ?data,
            "Push notification dispatched"
        );
        Ok(())
    }
}
