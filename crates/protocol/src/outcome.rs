//! Closed result set for a single remote command attempt.

use serde::{Deserialize, Serialize};

/// Outcome of one remote command invocation.
///
/// Produced exactly once per invocation and immutable afterwards. The
/// denied/error kinds carry a human-readable message suitable for direct
/// user display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CommandOutcome {
	/// The host executed the command.
	Success,
	/// The host refused because the running session is owned by another
	/// device/identity.
	AuthorizationDenied { message: String },
	/// The host could not be resolved or reached.
	HostUnreachable { message: String },
	/// The host answered but the command endpoint does not exist.
	HostNotFound { message: String },
	/// Transport-level failure: timeout, reset, malformed response.
	TransportError { message: String },
	/// Protocol-level rejection with the host's numeric code.
	ProtocolError { code: u16, message: String },
}

impl CommandOutcome {
	/// Human-readable message for user display; `None` for `Success`.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Success => None,
			Self::AuthorizationDenied { message }
			| Self::HostUnreachable { message }
			| Self::HostNotFound { message }
			| Self::TransportError { message }
			| Self::ProtocolError { message, .. } => Some(message),
		}
	}

	/// Whether the command was executed by the host.
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success)
	}
}
