//! Handler-facing helper
//!
//! [`FlashMessages`] is composed into request handlers at construction time
//! and exposes the loosely-typed `flash_message` call plus the display
//! component factory.

use reinhardt_flash_messages::{FlashNotifier, FlashText, Level, Message, MessageOptions};
use std::sync::Arc;

#[cfg(feature = "display")]
use reinhardt_flash_display::{FlashMessagesComponent, FlashMessagesFactory};

#[cfg(feature = "display")]
use crate::services::FlashServices;

/// Flash helper injected into request handlers
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use reinhardt_flash::{
///     FlashMessages, FlashMessagesConfig, InMemorySession, MessageOptions, build_services,
/// };
///
/// struct ProfileHandler {
///     flash: FlashMessages,
/// }
///
/// let services = build_services(
///     &FlashMessagesConfig::default(),
///     Arc::new(InMemorySession::new()),
///     None,
/// )
/// .unwrap();
/// let handler = ProfileHandler { flash: FlashMessages::from(&services) };
///
/// let message = handler.flash.flash_message("Profile updated", "success", MessageOptions::new());
/// assert_eq!(message.level.as_str(), "success");
///
/// let html = handler.flash.create_component().render().unwrap();
/// assert!(html.contains("Profile updated"));
/// ```
#[derive(Clone)]
pub struct FlashMessages {
	notifier: Arc<FlashNotifier>,
	#[cfg(feature = "display")]
	factory: Arc<FlashMessagesFactory>,
}

impl FlashMessages {
	#[cfg(feature = "display")]
	pub fn new(notifier: Arc<FlashNotifier>, factory: Arc<FlashMessagesFactory>) -> Self {
		Self { notifier, factory }
	}

	#[cfg(not(feature = "display"))]
	pub fn new(notifier: Arc<FlashNotifier>) -> Self {
		Self { notifier }
	}

	/// The wrapped notifier
	pub fn notifier(&self) -> &FlashNotifier {
		&self.notifier
	}

	/// Flash a message; unknown level strings fall back to `info`
	pub fn flash_message(
		&self,
		message: impl Into<FlashText>,
		level: &str,
		options: MessageOptions,
	) -> Message {
		self.notifier
			.message(message, Level::parse_or_default(level), options)
	}

	/// Create the flash messages display component
	#[cfg(feature = "display")]
	pub fn create_component(&self) -> FlashMessagesComponent {
		self.factory.create()
	}
}

#[cfg(feature = "display")]
impl From<&FlashServices> for FlashMessages {
	fn from(services: &FlashServices) -> Self {
		Self::new(services.notifier.clone(), services.factory.clone())
	}
}

#[cfg(all(test, feature = "display"))]
mod tests {
	use super::*;
	use crate::config::FlashMessagesConfig;
	use crate::services::build_services;
	use reinhardt_flash_messages::InMemorySession;
	use reinhardt_flash_messages::storage::load_messages;
	use rstest::{fixture, rstest};

	#[fixture]
	fn services() -> FlashServices {
		build_services(
			&FlashMessagesConfig::default(),
			Arc::new(InMemorySession::new()),
			None,
		)
		.unwrap()
	}

	#[rstest]
	#[case("success", Level::Success)]
	#[case("error", Level::Error)]
	#[case("Warning", Level::Warning)]
	#[case("info", Level::Info)]
	#[case("notice", Level::Info)]
	#[case("", Level::Info)]
	fn test_flash_message_level_string(
		services: FlashServices,
		#[case] level: &str,
		#[case] expected: Level,
	) {
		let flash = FlashMessages::from(&services);
		let message = flash.flash_message("Hello", level, MessageOptions::new());
		assert_eq!(message.level, expected);
	}

	#[rstest]
	fn test_flash_message_passes_options(services: FlashServices) {
		let flash = FlashMessages::from(&services);
		let message = flash.flash_message(
			"Hi %(name)s",
			"info",
			MessageOptions::new()
				.title("Greeting")
				.overlay(true)
				.count(3)
				.parameter("name", "Bob"),
		);

		assert!(message.overlay);
		assert_eq!(message.text(), "Hi Bob");
		assert_eq!(message.title().as_deref(), Some("Greeting"));
		assert_eq!(message.phrase.count, Some(3));
		assert_eq!(load_messages(services.storage.as_ref()).len(), 1);
	}

	#[rstest]
	fn test_component_renders_helper_messages(services: FlashServices) {
		let flash = FlashMessages::from(&services);
		flash.notifier().error("Broken", None);

		let html = flash.create_component().render().unwrap();
		assert!(html.contains("Broken"));
	}
}
