//! Session orchestration under a single critical section.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use tracing::{debug, error, warn};

use super::focus::PlaybackFocus;
use super::resource::{SurfaceFactory, SurfaceHandle};
use super::spec::{Session, StartRequest};
use crate::error::StartError;

/// Session paired with the surface it exclusively owns.
struct ActiveSession {
	session: Session,
	resource: SurfaceHandle,
}

/// Owns the single-active-session state machine and the decode surface
/// bound to it.
///
/// All state transitions happen under one mutex, so `start`, `stop`, and
/// `is_active` are totally ordered with respect to each other. Nothing
/// under the lock blocks on I/O; surface acquisition and release are
/// required to be fast local calls.
pub struct SessionController {
	active: Mutex<Option<ActiveSession>>,
	last_failure: Mutex<Option<String>>,
	surfaces: Arc<dyn SurfaceFactory>,
	focus: Arc<dyn PlaybackFocus>,
}

impl SessionController {
	/// Creates a controller over the shell's surface and focus collaborators.
	pub fn new(surfaces: Arc<dyn SurfaceFactory>, focus: Arc<dyn PlaybackFocus>) -> Self {
		Self {
			active: Mutex::new(None),
			last_failure: Mutex::new(None),
			surfaces,
			focus,
		}
	}

	/// Starts a session against `request.host`, replacing any active one.
	///
	/// An active session is fully torn down (exactly one release) before
	/// the new surface is acquired, so two surfaces are never bound at
	/// once. On acquisition failure the controller is left idle; the prior
	/// session does not come back.
	pub fn start(&self, request: StartRequest) -> Result<(), StartError> {
		request.config.validate().map_err(StartError::InvalidConfig)?;

		let mut active = self.active.lock();
		if let Some(previous) = active.take() {
			debug!(
				target = "vrcast.session",
				host = %previous.session.host,
				app = previous.session.app.id,
				"stopping active session before restart"
			);
			self.teardown(previous);
		}

		let resource = self.surfaces.acquire(request.config.dimensions)?;
		self.focus.request();
		*self.last_failure.lock() = None;

		debug!(
			target = "vrcast.session",
			host = %request.host,
			app = request.app.id,
			dimensions = %request.config.dimensions,
			fps = request.config.fps,
			"session started"
		);

		*active = Some(ActiveSession {
			session: Session::new(request.host, request.app, request.config),
			resource,
		});
		Ok(())
	}

	/// Stops the active session and releases its surface.
	///
	/// No-op when idle. Never fails: release problems are logged and the
	/// idle transition happens regardless.
	pub fn stop(&self) {
		let mut active = self.active.lock();
		let Some(previous) = active.take() else {
			return;
		};
		debug!(
			target = "vrcast.session",
			host = %previous.session.host,
			app = previous.session.app.id,
			"session stopped"
		);
		self.teardown(previous);
	}

	/// Tears down the active session after an internal failure, recording
	/// the reason for the shell to surface.
	pub fn fail(&self, reason: impl Into<String>) {
		let reason = reason.into();
		let mut active = self.active.lock();
		error!(target = "vrcast.session", %reason, "session failed");
		*self.last_failure.lock() = Some(reason);
		if let Some(previous) = active.take() {
			self.teardown(previous);
		}
	}

	/// Whether a session is currently active.
	pub fn is_active(&self) -> bool {
		self.active.lock().is_some()
	}

	/// Snapshot of the active session, if any.
	pub fn current(&self) -> Option<Session> {
		self.active.lock().as_ref().map(|active| active.session.clone())
	}

	/// Reason recorded by the last [`fail`] since the last successful start.
	///
	/// [`fail`]: SessionController::fail
	pub fn last_failure(&self) -> Option<String> {
		self.last_failure.lock().clone()
	}

	/// Structured status payload for the shell.
	pub fn status(&self) -> serde_json::Value {
		let active = self.active.lock();
		match active.as_ref() {
			Some(current) => json!({
				"active": true,
				"session": current.session,
			}),
			None => json!({
				"active": false,
				"lastFailure": *self.last_failure.lock(),
			}),
		}
	}

	/// Releases the surface and collaborator claims of a detached session.
	///
	/// Caller holds the session lock; state is already cleared, so a
	/// release failure cannot leave a stuck binding.
	fn teardown(&self, active: ActiveSession) {
		if let Err(err) = self.surfaces.release(active.resource) {
			warn!(
				target = "vrcast.session",
				error = %err,
				"surface release failed; session state cleared anyway"
			);
		}
		self.focus.release();
	}
}
