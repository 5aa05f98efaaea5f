//! Playback focus collaborator seam.

/// External collaborator holding audio/rendering claims for the active
/// session.
///
/// The controller requests focus when a session starts and releases it on
/// stop and fail; the shell maps this onto platform audio focus and
/// renderer teardown.
pub trait PlaybackFocus: Send + Sync {
	fn request(&self);
	fn release(&self);
}

/// Focus implementation for shells without audio/rendering claims.
#[derive(Debug, Default)]
pub struct NoopFocus;

impl PlaybackFocus for NoopFocus {
	fn request(&self) {}
	fn release(&self) {}
}
