//! Streaming-session lifecycle core for the vrcast client shell.
//!
//! The surrounding shell owns the rendering surface, input forwarding, and
//! host discovery; this crate owns the two pieces that have to be exactly
//! right: exclusive ownership of the decode surface across concurrent
//! start/stop triggers, and the classification of remote quit-command
//! failures into a closed outcome set.

pub mod command;
pub mod error;
pub mod notify;
pub mod session;

pub use command::{FakeQuitTransport, QuitTransport, RemoteCommandExecutor, classify};
pub use error::{CommandError, StartError};
pub use notify::{ChannelSink, NotificationSink};
pub use session::{
	AcquireError, PlaybackFocus, ReleaseError, Session, SessionController, StartRequest, StreamConfig, SurfaceFactory, SurfaceHandle,
};
