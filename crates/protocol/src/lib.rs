//! Boundary types for the vrcast streaming client.
//!
//! This crate contains the data types exchanged across the host-transport
//! boundary: the identities a command is issued against, the raw failure
//! signals the transport can report, and the closed outcome set shown to
//! the user. These types represent the "boundary layer" - the shapes of
//! data as they cross into and out of the client core.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond construction and serialization
//! * Closed: `TransportFailure` and `CommandOutcome` enumerate every
//!   reachable signal, so callers can match exhaustively
//! * Stable: Changes only when the collaborator boundary changes
//!
//! The session/command orchestration built on top of these types lives in
//! `vrcast-client`.

pub mod failure;
pub mod outcome;
pub mod types;

pub use failure::*;
pub use outcome::*;
pub use types::*;
