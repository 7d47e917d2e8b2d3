//! Flash message notifier
//!
//! Request handlers queue messages through [`FlashNotifier`]. Every call
//! re-reads the pending list from storage, appends the new message unless an
//! identical one is still undisplayed, and writes the list back.

use crate::levels::Level;
use crate::message::Message;
use crate::phrase::{FlashText, Parameters};
use crate::storage::{self, FlashStorage};
use crate::translator::Translator;
use serde_json::Value;
use std::sync::Arc;

/// Optional attributes of a flash message
///
/// # Examples
///
/// ```
/// use reinhardt_flash_messages::MessageOptions;
///
/// let options = MessageOptions::new()
///     .title("Upload")
///     .count(3)
///     .parameter("name", "Bob");
///
/// assert!(!options.overlay);
/// assert_eq!(options.count, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageOptions {
	pub title: Option<FlashText>,
	pub overlay: bool,
	pub count: Option<u64>,
	pub parameters: Parameters,
}

impl MessageOptions {
	/// Options with every attribute at its default
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the title (literal text or a pre-built phrase)
	pub fn title(mut self, title: impl Into<FlashText>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Set the overlay flag
	pub fn overlay(mut self, overlay: bool) -> Self {
		self.overlay = overlay;
		self
	}

	/// Set the plural count
	pub fn count(mut self, count: u64) -> Self {
		self.count = Some(count);
		self
	}

	/// Replace all interpolation parameters
	pub fn parameters(mut self, parameters: Parameters) -> Self {
		self.parameters = parameters;
		self
	}

	/// Add a single interpolation parameter
	pub fn parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.parameters.insert(name.into(), value.into());
		self
	}
}

/// Queues flash messages into session storage
pub struct FlashNotifier {
	storage: Arc<dyn FlashStorage>,
	use_translator: bool,
	translator: Option<Arc<dyn Translator>>,
}

impl FlashNotifier {
	/// Create a notifier
	///
	/// Phrases are left for the translator to resolve at render time only when
	/// `use_translator` is set and a translator is available.
	pub fn new(
		storage: Arc<dyn FlashStorage>,
		use_translator: bool,
		translator: Option<Arc<dyn Translator>>,
	) -> Self {
		Self {
			storage,
			use_translator,
			translator,
		}
	}

	fn translates(&self) -> bool {
		self.use_translator && self.translator.is_some()
	}

	/// Flash a success message
	pub fn success(&self, message: impl Into<FlashText>, title: Option<&str>) -> Message {
		self.message(message, Level::Success, titled(title))
	}

	/// Flash an information message
	pub fn info(&self, message: impl Into<FlashText>, title: Option<&str>) -> Message {
		self.message(message, Level::Info, titled(title))
	}

	/// Flash a warning message
	pub fn warning(&self, message: impl Into<FlashText>, title: Option<&str>) -> Message {
		self.message(message, Level::Warning, titled(title))
	}

	/// Flash an error message
	pub fn error(&self, message: impl Into<FlashText>, title: Option<&str>) -> Message {
		self.message(message, Level::Error, titled(title))
	}

	/// Flash an overlay modal
	///
	/// A level tag in the second slot (exactly `success`, `info`, `warning`
	/// or `error`) selects the level; anything else is used as the title and
	/// the level stays `Info`.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use reinhardt_flash_messages::{FlashNotifier, InMemorySession, Level, SessionStorage};
	///
	/// let storage = Arc::new(SessionStorage::new(Arc::new(InMemorySession::new())));
	/// let notifier = FlashNotifier::new(storage, false, None);
	///
	/// let done = notifier.overlay("Done", Some("success"));
	/// assert_eq!(done.level, Level::Success);
	/// assert_eq!(done.title(), None);
	///
	/// let titled = notifier.overlay("Done", Some("My Title"));
	/// assert_eq!(titled.level, Level::Info);
	/// assert_eq!(titled.title().as_deref(), Some("My Title"));
	/// assert!(titled.overlay);
	///
	/// let shouted = notifier.overlay("Done", Some("Success"));
	/// assert_eq!(shouted.level, Level::Info);
	/// assert_eq!(shouted.title().as_deref(), Some("Success"));
	/// ```
	pub fn overlay(&self, message: impl Into<FlashText>, level_or_title: Option<&str>) -> Message {
		let (level, options) = match level_or_title {
			Some(value) => match Level::from_tag(value) {
				Some(level) => (level, MessageOptions::new()),
				None => (Level::Info, MessageOptions::new().title(value)),
			},
			None => (Level::Info, MessageOptions::new()),
		};
		self.message(message, level, options.overlay(true))
	}

	/// Flash a general message
	pub fn message(
		&self,
		message: impl Into<FlashText>,
		level: Level,
		options: MessageOptions,
	) -> Message {
		let message = message.into();
		let MessageOptions {
			title,
			overlay,
			count,
			parameters,
		} = options;

		let literal_text = message.is_literal();
		let literal_title = title.as_ref().is_some_and(FlashText::is_literal);

		let phrase = message.into_phrase(count, &parameters);
		let title_phrase = title.map(|title| title.into_phrase(count, &parameters));

		let mut flash = Message::new(level, phrase).with_overlay(overlay);
		flash.title_phrase = title_phrase;

		if !self.translates() {
			if literal_text {
				flash.set_text(flash.phrase.render_literal());
			}
			if literal_title && let Some(title) = &flash.title_phrase {
				flash.title = Some(title.render_literal());
			}
		}

		let mut messages = storage::load_messages(self.storage.as_ref());

		if messages.iter().any(|member| member.suppresses(&flash)) {
			tracing::debug!(
				level = %flash.level,
				message = %flash,
				"Flash message already pending, not queued again"
			);
		} else {
			tracing::debug!(
				level = %flash.level,
				overlay = flash.overlay,
				pending = messages.len() + 1,
				"Flash message queued"
			);
			messages.push(flash.clone());
		}

		storage::store_messages(self.storage.as_ref(), &messages);

		flash
	}

	/// Add an "important" flag to the session
	///
	/// Leaves the pending message list untouched.
	pub fn important(&self) {
		storage::set_important(self.storage.as_ref(), true);
		tracing::debug!("Flash messages marked important");
	}
}

fn titled(title: Option<&str>) -> MessageOptions {
	match title {
		Some(title) => MessageOptions::new().title(title),
		None => MessageOptions::new(),
	}
}
