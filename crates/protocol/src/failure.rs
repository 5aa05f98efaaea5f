//! Raw failure signals reported by the host transport.

use thiserror::Error;

/// Everything the blocking transport call can report short of a boolean
/// result.
///
/// The transport collaborator is required to fold its internal errors into
/// this set; `Other` is the catch-all for timeouts, resets, and malformed
/// responses so that no signal is ever dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
	/// Protocol-level rejection carrying the host's numeric code.
	#[error("host rejected command (code {code}): {message}")]
	Rejected { code: u16, message: String },
	/// Host name could not be resolved.
	#[error("unknown host: {0}")]
	UnknownHost(String),
	/// Host resolved but a connection could not be established.
	#[error("connection failed: {0}")]
	ConnectFailed(String),
	/// The command endpoint does not exist on the host (404-equivalent).
	#[error("not found: {0}")]
	NotFound(String),
	/// Any other transport failure: timeout, reset, malformed response.
	#[error("{0}")]
	Other(String),
}

impl TransportFailure {
	/// Wraps an arbitrary error message as the catch-all signal.
	pub fn other(message: impl Into<String>) -> Self {
		Self::Other(message.into())
	}
}
