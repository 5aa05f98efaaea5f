//! Exclusively-owned decode/render surface and its factory seam.

use thiserror::Error;
use vrcast_protocol::Dimensions;

/// Handle to one native decode/render target.
///
/// Deliberately not `Clone`: the controller is the sole holder, and a
/// handle travels back to the factory exactly once on release.
#[derive(Debug, PartialEq, Eq)]
pub struct SurfaceHandle {
	token: u64,
	dimensions: Dimensions,
}

impl SurfaceHandle {
	/// Wraps a native surface token produced by a factory.
	pub fn new(token: u64, dimensions: Dimensions) -> Self {
		Self { token, dimensions }
	}

	/// Opaque native token identifying the bound target.
	pub fn token(&self) -> u64 {
		self.token
	}

	/// Dimensions the surface was acquired for.
	pub fn dimensions(&self) -> Dimensions {
		self.dimensions
	}
}

/// Errors from surface acquisition.
#[derive(Debug, Error)]
pub enum AcquireError {
	/// No surface can be produced right now.
	#[error("surface pool exhausted: {0}")]
	Exhausted(String),
	/// The native layer rejected the request.
	#[error("native surface setup failed: {0}")]
	Native(String),
}

/// Error from surface release.
///
/// The controller logs and swallows these; release is best-effort and
/// session state is cleared regardless.
#[derive(Debug, Error)]
#[error("surface release failed: {0}")]
pub struct ReleaseError(#[from] pub anyhow::Error);

/// External collaborator producing and reclaiming decode surfaces.
///
/// `release` must be idempotent: releasing a surface whose native target
/// is already gone reports `Ok(())`.
pub trait SurfaceFactory: Send + Sync {
	fn acquire(&self, dimensions: Dimensions) -> Result<SurfaceHandle, AcquireError>;
	fn release(&self, handle: SurfaceHandle) -> Result<(), ReleaseError>;
}
