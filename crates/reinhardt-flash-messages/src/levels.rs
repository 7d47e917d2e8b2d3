//! Message level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flash message levels
///
/// The level drives presentation (CSS class, icon, overlay styling) and is
/// part of a message's identity for de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
	Success,
	#[default]
	Info,
	Warning,
	Error,
}

/// Error returned when a string does not name a known level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown message level: {0}")]
pub struct UnknownLevel(pub String);

impl Level {
	/// All recognized levels
	pub const ALL: [Level; 4] = [Level::Success, Level::Info, Level::Warning, Level::Error];

	/// Returns the string representation of the level
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::Level;
	///
	/// assert_eq!(Level::Success.as_str(), "success");
	/// assert_eq!(Level::Info.as_str(), "info");
	/// assert_eq!(Level::Warning.as_str(), "warning");
	/// assert_eq!(Level::Error.as_str(), "error");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Level::Success => "success",
			Level::Info => "info",
			Level::Warning => "warning",
			Level::Error => "error",
		}
	}

	/// Parses a level from a string (case-insensitive)
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::Level;
	///
	/// assert_eq!(Level::parse("success"), Some(Level::Success));
	/// assert_eq!(Level::parse("ERROR"), Some(Level::Error));
	/// assert_eq!(Level::parse("My Title"), None);
	/// ```
	pub fn parse(s: &str) -> Option<Self> {
		match s.trim().to_lowercase().as_str() {
			"success" => Some(Level::Success),
			"info" => Some(Level::Info),
			"warning" => Some(Level::Warning),
			"error" => Some(Level::Error),
			_ => None,
		}
	}

	/// Matches the exact lower-case tag produced by [`Level::as_str`]
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::Level;
	///
	/// assert_eq!(Level::from_tag("warning"), Some(Level::Warning));
	/// assert_eq!(Level::from_tag("Warning"), None);
	/// assert_eq!(Level::from_tag(" warning"), None);
	/// ```
	pub fn from_tag(tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|level| level.as_str() == tag)
	}

	/// Parses a level, falling back to [`Level::Info`] for unknown strings
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::Level;
	///
	/// assert_eq!(Level::parse_or_default("warning"), Level::Warning);
	/// assert_eq!(Level::parse_or_default("notice"), Level::Info);
	/// ```
	pub fn parse_or_default(s: &str) -> Self {
		Self::parse(s).unwrap_or_default()
	}
}

impl FromStr for Level {
	type Err = UnknownLevel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s).ok_or_else(|| UnknownLevel(s.to_string()))
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
