//! Outcome delivery to the user-visible context.

use tokio::sync::mpsc;
use vrcast_protocol::CommandOutcome;

/// Collaborator receiving exactly one [`CommandOutcome`] per command.
///
/// Implementations decide where the outcome becomes user-visible; the
/// executor only guarantees the count.
pub trait NotificationSink: Send + Sync {
	fn notify(&self, outcome: CommandOutcome);
}

/// Sink delivering outcomes over an unbounded channel drained by the
/// context designated for user-visible effects.
///
/// Delivery to a dropped receiver is a no-op: a command that resolves
/// after the UI context has moved on is discarded rather than faulted.
pub struct ChannelSink {
	sender: mpsc::UnboundedSender<CommandOutcome>,
}

impl ChannelSink {
	/// Creates a sink plus the receiver the UI context should drain.
	pub fn new() -> (Self, mpsc::UnboundedReceiver<CommandOutcome>) {
		let (sender, receiver) = mpsc::unbounded_channel();
		(Self { sender }, receiver)
	}

	/// Wraps an existing sender.
	pub fn from_sender(sender: mpsc::UnboundedSender<CommandOutcome>) -> Self {
		Self { sender }
	}
}

impl NotificationSink for ChannelSink {
	fn notify(&self, outcome: CommandOutcome) {
		let _ = self.sender.send(outcome);
	}
}
