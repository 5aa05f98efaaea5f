//! Error types surfaced by the session and command services.

use thiserror::Error;

use crate::session::AcquireError;

/// Errors reported by [`SessionController::start`].
///
/// [`SessionController::start`]: crate::session::SessionController::start
#[derive(Debug, Error)]
pub enum StartError {
	/// Requested stream configuration failed validation.
	#[error("invalid stream config: {0}")]
	InvalidConfig(String),
	/// The surface factory could not produce a decode surface. Any prior
	/// session has already been torn down when this is returned.
	#[error("surface acquisition failed")]
	Acquire(#[from] AcquireError),
}

/// Errors reported synchronously by [`RemoteCommandExecutor`].
///
/// Everything that happens after the command is handed to its execution
/// unit is reported through the outcome notification instead.
///
/// [`RemoteCommandExecutor`]: crate::command::RemoteCommandExecutor
#[derive(Debug, Error)]
pub enum CommandError {
	/// The host address was empty.
	#[error("host address must not be empty")]
	EmptyHost,
}
