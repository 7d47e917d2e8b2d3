//! Flash messages configuration
//!
//! The configuration block is validated once at startup. A field with the
//! wrong type, an unknown key, or a template file that does not exist is a
//! fatal [`ConfigError`]; nothing is validated at request time.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration errors
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid flash messages configuration: {0}")]
	Invalid(String),

	#[error("Template file not found: {0}")]
	TemplateNotFound(PathBuf),
}

impl From<serde_json::Error> for ConfigError {
	fn from(error: serde_json::Error) -> Self {
		ConfigError::Invalid(error.to_string())
	}
}

impl From<toml::de::Error> for ConfigError {
	fn from(error: toml::de::Error) -> Self {
		ConfigError::Invalid(error.to_string())
	}
}

/// Flash messages settings
///
/// # Examples
///
/// ```
/// use reinhardt_flash::FlashMessagesConfig;
/// use serde_json::json;
///
/// let config = FlashMessagesConfig::from_value(json!({
///     "useOverlay": true,
///     "useTranslator": false,
/// }))
/// .unwrap();
///
/// assert!(config.use_title);
/// assert!(config.use_overlay);
/// assert!(!config.use_translator);
///
/// assert!(FlashMessagesConfig::from_value(json!({ "useTitle": "yes" })).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FlashMessagesConfig {
	/// Render message titles
	pub use_title: bool,

	/// Enable overlay-mode rendering
	pub use_overlay: bool,

	/// Template overriding the default one
	pub template_file: Option<PathBuf>,

	/// Resolve phrases through the translator rather than eager literals
	pub use_translator: bool,
}

impl Default for FlashMessagesConfig {
	fn default() -> Self {
		Self {
			use_title: true,
			use_overlay: false,
			template_file: None,
			use_translator: true,
		}
	}
}

impl FlashMessagesConfig {
	/// Parse and validate a JSON configuration block
	pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_value(value)?;
		config.validate()?;
		Ok(config)
	}

	/// Parse and validate a TOML configuration block
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash::FlashMessagesConfig;
	///
	/// let config = FlashMessagesConfig::from_toml_str("useTitle = false").unwrap();
	/// assert!(!config.use_title);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Check constraints serde cannot express
	pub fn validate(&self) -> Result<(), ConfigError> {
		if let Some(path) = &self.template_file
			&& !path.is_file()
		{
			return Err(ConfigError::TemplateNotFound(path.clone()));
		}
		Ok(())
	}
}
