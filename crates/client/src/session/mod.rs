//! Session lifecycle and surface-ownership subsystem.
//!
//! This module centralizes the single-active-session state machine, the
//! exclusively-owned decode surface, and the collaborator seams the shell
//! plugs into (surface factory, playback focus).

/// Start/stop orchestration under the session critical section.
pub mod controller;
/// Playback focus collaborator seam.
pub mod focus;
/// Decode-surface handle, factory seam, and acquisition errors.
pub mod resource;
/// Stream configuration, start request, and session snapshot types.
pub mod spec;

/// Session orchestration service.
pub use controller::SessionController;
/// Playback focus collaborator.
pub use focus::{NoopFocus, PlaybackFocus};
/// Surface handle and factory seam.
pub use resource::{AcquireError, ReleaseError, SurfaceFactory, SurfaceHandle};
/// Session request and snapshot types.
pub use spec::{Session, StartRequest, StreamConfig};
