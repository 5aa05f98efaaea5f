//! Blocking host-transport seam and an in-memory fake for tests.

use std::collections::VecDeque;

use parking_lot::Mutex;
use vrcast_protocol::{AppIdentity, Credentials, TransportFailure};

/// External collaborator performing the blocking quit exchange.
///
/// `Ok(bool)` is the host's explicit result flag; every failure mode is
/// folded into [`TransportFailure`] by the implementation.
pub trait QuitTransport: Send + Sync {
	fn quit_app(&self, host: &str, app: &AppIdentity, credentials: &Credentials) -> Result<bool, TransportFailure>;
}

/// One recorded call against a [`FakeQuitTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuitCall {
	pub host: String,
	pub app_id: u32,
	pub unique_id: String,
}

enum ScriptedReply {
	Reply(Result<bool, TransportFailure>),
	Panic(String),
}

/// In-memory transport for unit testing command execution without a host.
///
/// Replies are scripted in FIFO order; an unscripted call reports a
/// transport failure rather than blocking. `push_panic` simulates an
/// execution-unit crash inside the exchange.
#[derive(Default)]
pub struct FakeQuitTransport {
	replies: Mutex<VecDeque<ScriptedReply>>,
	calls: Mutex<Vec<QuitCall>>,
}

impl FakeQuitTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Scripts the host's explicit boolean result.
	pub fn push_result(&self, executed: bool) {
		self.replies.lock().push_back(ScriptedReply::Reply(Ok(executed)));
	}

	/// Scripts a transport failure.
	pub fn push_failure(&self, failure: TransportFailure) {
		self.replies.lock().push_back(ScriptedReply::Reply(Err(failure)));
	}

	/// Scripts a panic inside the exchange.
	pub fn push_panic(&self, message: impl Into<String>) {
		self.replies.lock().push_back(ScriptedReply::Panic(message.into()));
	}

	/// Calls recorded so far, in invocation order.
	pub fn calls(&self) -> Vec<QuitCall> {
		self.calls.lock().clone()
	}
}

impl QuitTransport for FakeQuitTransport {
	fn quit_app(&self, host: &str, app: &AppIdentity, credentials: &Credentials) -> Result<bool, TransportFailure> {
		self.calls.lock().push(QuitCall {
			host: host.to_string(),
			app_id: app.id,
			unique_id: credentials.unique_id.clone(),
		});
		match self.replies.lock().pop_front() {
			Some(ScriptedReply::Reply(reply)) => reply,
			Some(ScriptedReply::Panic(message)) => panic!("{message}"),
			None => Err(TransportFailure::other("no scripted reply")),
		}
	}
}
