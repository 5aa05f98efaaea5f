//! Fire-and-forget command execution off the triggering context.

use std::sync::Arc;

use tracing::debug;
use vrcast_protocol::{AppIdentity, Credentials, TransportFailure};

use super::classify::classify;
use super::transport::QuitTransport;
use crate::error::CommandError;
use crate::notify::NotificationSink;

/// Runs one remote command per invocation on its own execution unit and
/// reports the classified outcome exactly once.
///
/// The triggering context never blocks: the call returns as soon as the
/// command is handed off. No ordering is guaranteed between independently
/// issued commands.
pub struct RemoteCommandExecutor {
	transport: Arc<dyn QuitTransport>,
	notifications: Arc<dyn NotificationSink>,
}

impl RemoteCommandExecutor {
	/// Creates an executor over the transport and notification collaborators.
	pub fn new(transport: Arc<dyn QuitTransport>, notifications: Arc<dyn NotificationSink>) -> Self {
		Self { transport, notifications }
	}

	/// Asks `host` to quit the running application.
	///
	/// `on_complete` runs exactly once after the exchange resolves, for
	/// every outcome including a crashed execution unit, and before the
	/// outcome notification (cleanup-then-notify). Must be called from
	/// within a tokio runtime.
	pub fn quit_application(
		&self,
		host: &str,
		app: AppIdentity,
		credentials: Credentials,
		on_complete: impl FnOnce() + Send + 'static,
	) -> Result<(), CommandError> {
		if host.trim().is_empty() {
			return Err(CommandError::EmptyHost);
		}

		let host = host.to_string();
		let transport = Arc::clone(&self.transport);
		let notifications = Arc::clone(&self.notifications);

		tokio::spawn(async move {
			let exchange = {
				let host = host.clone();
				let app = app.clone();
				tokio::task::spawn_blocking(move || transport.quit_app(&host, &app, &credentials))
			};
			let raw = match exchange.await {
				Ok(raw) => raw,
				// The blocking unit crashed; fold the crash into the
				// outcome set instead of propagating it.
				Err(crash) => Err(TransportFailure::other(format!("command execution failed: {crash}"))),
			};

			let outcome = classify(raw);
			debug!(
				target = "vrcast.command",
				%host,
				app = app.id,
				outcome = ?outcome,
				"quit command resolved"
			);

			on_complete();
			notifications.notify(outcome);
		});

		Ok(())
	}
}

#[cfg(test)]
mod tests;
