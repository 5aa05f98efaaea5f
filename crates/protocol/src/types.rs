//! Identity and negotiation types used when addressing a paired host.

use serde::{Deserialize, Serialize};

/// Application running (or runnable) on a paired host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIdentity {
	/// Numeric id assigned by the host.
	pub id: u32,
	/// Display name shown in the client shell.
	pub name: String,
}

impl AppIdentity {
	/// Creates an identity from the host-assigned id and display name.
	pub fn new(id: u32, name: impl Into<String>) -> Self {
		Self { id, name: name.into() }
	}
}

/// Caller identity established by pairing.
///
/// The host uses this to decide whether the caller owns the running
/// session; the client treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
	/// Unique id negotiated during the pairing handshake.
	pub unique_id: String,
}

impl Credentials {
	/// Wraps a pairing-issued unique id.
	pub fn new(unique_id: impl Into<String>) -> Self {
		Self { unique_id: unique_id.into() }
	}
}

/// Negotiated video dimensions for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
	pub width: u32,
	pub height: u32,
}

impl Dimensions {
	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}
}

impl std::fmt::Display for Dimensions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}
