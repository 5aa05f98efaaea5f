//! Remote command execution subsystem.
//!
//! One fire-and-forget command per invocation, run off the triggering
//! context, with every failure folded into the closed
//! [`CommandOutcome`](vrcast_protocol::CommandOutcome) set.

/// Pure mapping from raw transport signals to command outcomes.
pub mod classify;
/// Background execution and exactly-once completion delivery.
pub mod executor;
/// Blocking host-transport seam and its in-memory fake.
pub mod transport;

pub use classify::classify;
pub use executor::RemoteCommandExecutor;
pub use transport::{FakeQuitTransport, QuitTransport};
