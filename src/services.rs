//! Service construction
//!
//! The host application's startup (or per-session) code calls
//! [`build_services`] with its configuration block, the session handle and an
//! optional translator, and composes the returned services itself.

use crate::config::{ConfigError, FlashMessagesConfig};
use reinhardt_flash_messages::{FlashNotifier, FlashStorage, SessionHandle, SessionStorage, Translator};
use std::sync::Arc;

#[cfg(feature = "display")]
use reinhardt_flash_display::{DisplayOptions, FlashMessagesFactory, OnResponseHandler};

/// Flash message services bound to one session
#[derive(Clone)]
pub struct FlashServices {
	pub notifier: Arc<FlashNotifier>,
	pub storage: Arc<dyn FlashStorage>,
	#[cfg(feature = "display")]
	pub factory: Arc<FlashMessagesFactory>,
	#[cfg(feature = "display")]
	pub on_response: OnResponseHandler,
}

#[cfg(feature = "display")]
impl From<&FlashMessagesConfig> for DisplayOptions {
	fn from(config: &FlashMessagesConfig) -> Self {
		DisplayOptions {
			use_title: config.use_title,
			use_overlay: config.use_overlay,
			template_file: config.template_file.clone(),
			use_translator: config.use_translator,
		}
	}
}

/// Validate `config` and construct the notifier, storage adapter, display
/// factory and post-response hook
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use reinhardt_flash::{FlashMessagesConfig, InMemorySession, build_services};
///
/// let session = Arc::new(InMemorySession::new());
/// let services = build_services(&FlashMessagesConfig::default(), session, None).unwrap();
///
/// services.notifier.success("Saved", None);
/// let html = services.factory.create().render().unwrap();
/// assert!(html.contains("Saved"));
/// assert_eq!(services.on_response.handle(), 1);
/// ```
pub fn build_services(
	config: &FlashMessagesConfig,
	session: Arc<dyn SessionHandle>,
	translator: Option<Arc<dyn Translator>>,
) -> Result<FlashServices, ConfigError> {
	config.validate()?;

	let storage: Arc<dyn FlashStorage> = Arc::new(SessionStorage::new(session));
	let notifier = Arc::new(FlashNotifier::new(
		storage.clone(),
		config.use_translator,
		translator.clone(),
	));

	tracing::debug!(
		use_title = config.use_title,
		use_overlay = config.use_overlay,
		use_translator = config.use_translator,
		translator = translator.is_some(),
		"Flash message services constructed"
	);

	Ok(FlashServices {
		notifier,
		#[cfg(feature = "display")]
		factory: Arc::new(FlashMessagesFactory::new(
			storage.clone(),
			DisplayOptions::from(config),
			translator,
		)),
		#[cfg(feature = "display")]
		on_response: OnResponseHandler::new(storage.clone()),
		storage,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_flash_messages::storage::{is_important, load_messages};
	use reinhardt_flash_messages::{CatalogTranslator, InMemorySession};
	use rstest::rstest;

	#[rstest]
	fn test_services_share_one_storage() {
		let session = Arc::new(InMemorySession::new());
		let services = build_services(&FlashMessagesConfig::default(), session, None).unwrap();

		services.notifier.warning("Careful", None);
		services.notifier.important();

		assert_eq!(load_messages(services.storage.as_ref()).len(), 1);
		assert!(is_important(services.storage.as_ref()));
	}

	#[rstest]
	fn test_invalid_template_rejected_at_startup() {
		let config = FlashMessagesConfig {
			template_file: Some("/nonexistent/flash.html".into()),
			..FlashMessagesConfig::default()
		};
		let result = build_services(&config, Arc::new(InMemorySession::new()), None);

		assert!(matches!(result, Err(ConfigError::TemplateNotFound(_))));
	}

	#[cfg(feature = "display")]
	#[rstest]
	fn test_display_options_follow_config() {
		let config = FlashMessagesConfig {
			use_title: false,
			use_overlay: true,
			template_file: None,
			use_translator: false,
		};
		let services = build_services(&config, Arc::new(InMemorySession::new()), None).unwrap();

		let options = services.factory.options();
		assert!(!options.use_title);
		assert!(options.use_overlay);
		assert!(!options.use_translator);
	}

	#[cfg(feature = "display")]
	#[rstest]
	fn test_translator_wired_into_notifier_and_display() {
		let mut catalog = CatalogTranslator::new("fr");
		catalog.add("Saved", "Enregistré");
		let translator: Arc<dyn Translator> = Arc::new(catalog);

		let services = build_services(
			&FlashMessagesConfig::default(),
			Arc::new(InMemorySession::new()),
			Some(translator),
		)
		.unwrap();

		let message = services.notifier.success("Saved", None);
		assert_eq!(message.text, None);

		let html = services.factory.create().render().unwrap();
		assert!(html.contains("Enregistré"));
	}
}
