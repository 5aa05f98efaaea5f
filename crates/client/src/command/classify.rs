//! Total mapping from raw transport signals to [`CommandOutcome`].

use vrcast_protocol::{CommandOutcome, TransportFailure};

/// Host code meaning "the running session belongs to another identity".
const CODE_SESSION_NOT_OWNED: u16 = 599;

/// Classifies the result of one quit exchange.
///
/// Total over every reachable signal: anything the other arms do not
/// claim falls through to `TransportError` with the raw message rather
/// than being dropped.
pub fn classify(raw: Result<bool, TransportFailure>) -> CommandOutcome {
	match raw {
		Ok(true) => CommandOutcome::Success,
		// The host executed the exchange but declined the command.
		Ok(false) => CommandOutcome::ProtocolError {
			code: 0,
			message: "command declined".to_string(),
		},
		Err(TransportFailure::Rejected { code: CODE_SESSION_NOT_OWNED, .. }) => CommandOutcome::AuthorizationDenied {
			message: format!(
				"This session wasn't started by this device, so it cannot be quit. \
				 End streaming on the original device or the host itself. (Error code: {CODE_SESSION_NOT_OWNED})"
			),
		},
		Err(TransportFailure::Rejected { code, message }) => CommandOutcome::ProtocolError { code, message },
		Err(TransportFailure::UnknownHost(message)) | Err(TransportFailure::ConnectFailed(message)) => CommandOutcome::HostUnreachable { message },
		Err(TransportFailure::NotFound(message)) => CommandOutcome::HostNotFound { message },
		Err(TransportFailure::Other(message)) => CommandOutcome::TransportError { message },
	}
}
