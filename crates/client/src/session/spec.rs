//! Stream configuration, start request, and session snapshot types.

use serde::{Deserialize, Serialize};
use vrcast_protocol::{AppIdentity, Dimensions};

/// Negotiated parameters for one stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamConfig {
	/// Video dimensions requested from the host.
	pub dimensions: Dimensions,
	/// Frame rate in frames per second.
	pub fps: u32,
	/// Whether audio stays on the host instead of being routed here.
	pub host_audio: bool,
	/// Optional bitrate hint in kbit/s; `None` lets the host pick.
	#[serde(default)]
	pub bitrate_kbps: Option<u32>,
	/// Whether the host was paired over a remote (non-LAN) connection.
	pub remote: bool,
}

impl Default for StreamConfig {
	fn default() -> Self {
		Self {
			dimensions: Dimensions::new(1280, 720),
			fps: 60,
			host_audio: false,
			bitrate_kbps: None,
			remote: false,
		}
	}
}

impl StreamConfig {
	/// Sets the requested video dimensions.
	pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
		self.dimensions = Dimensions::new(width, height);
		self
	}

	/// Sets the requested frame rate.
	pub fn with_fps(mut self, fps: u32) -> Self {
		self.fps = fps;
		self
	}

	/// Routes audio to the host instead of this client.
	pub fn with_host_audio(mut self, host_audio: bool) -> Self {
		self.host_audio = host_audio;
		self
	}

	/// Sets an explicit bitrate hint in kbit/s.
	pub fn with_bitrate_kbps(mut self, bitrate: Option<u32>) -> Self {
		self.bitrate_kbps = bitrate;
		self
	}

	/// Marks the host as remotely paired.
	pub fn with_remote(mut self, remote: bool) -> Self {
		self.remote = remote;
		self
	}

	/// Validates the negotiated parameters.
	pub fn validate(&self) -> Result<(), String> {
		if self.dimensions.width == 0 || self.dimensions.height == 0 {
			return Err(format!("dimensions must be positive, got {}", self.dimensions));
		}
		if self.fps == 0 {
			return Err("frame rate must be positive".to_string());
		}
		Ok(())
	}
}

/// Fully resolved request for starting a streaming session.
#[derive(Debug, Clone)]
pub struct StartRequest {
	/// Address of the previously paired host.
	pub host: String,
	/// Application to stream.
	pub app: AppIdentity,
	/// Negotiated stream parameters.
	pub config: StreamConfig,
}

impl StartRequest {
	/// Builds a request with default stream parameters.
	pub fn new(host: impl Into<String>, app: AppIdentity) -> Self {
		Self {
			host: host.into(),
			app,
			config: StreamConfig::default(),
		}
	}

	/// Replaces the stream parameters wholesale.
	pub fn with_config(mut self, config: StreamConfig) -> Self {
		self.config = config;
		self
	}
}

/// Immutable snapshot of the active session.
///
/// Built only once a surface is bound; callers never observe a partially
/// constructed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
	/// Host the stream runs against.
	pub host: String,
	/// Application being streamed.
	pub app: AppIdentity,
	/// Parameters the stream was started with.
	pub config: StreamConfig,
}

impl Session {
	pub(crate) fn new(host: String, app: AppIdentity, config: StreamConfig) -> Self {
		Self { host, app, config }
	}
}
