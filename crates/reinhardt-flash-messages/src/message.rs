//! Flash message entity

use crate::levels::Level;
use crate::phrase::Phrase;
use crate::translator::Translator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single flash message
///
/// The phrases are what a translator resolves at render time. `text` and
/// `title` hold eagerly resolved literals when translation is disabled or
/// unavailable; when present they take precedence over the phrases.
///
/// Identity is the string form produced by [`fmt::Display`]: level, title
/// and text. There is no assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
	pub level: Level,
	pub phrase: Phrase,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title_phrase: Option<Phrase>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub text: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(default)]
	pub overlay: bool,
	#[serde(default)]
	pub displayed: bool,
}

impl Message {
	/// Create an undisplayed, inline message
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::{Level, Message, Phrase};
	///
	/// let message = Message::new(Level::Success, Phrase::new("Saved"));
	/// assert_eq!(message.text(), "Saved");
	/// assert!(!message.is_displayed());
	/// ```
	pub fn new(level: Level, phrase: Phrase) -> Self {
		Self {
			level,
			phrase,
			title_phrase: None,
			text: None,
			title: None,
			overlay: false,
			displayed: false,
		}
	}

	/// Attach a title phrase
	pub fn with_title(mut self, title: Phrase) -> Self {
		self.title_phrase = Some(title);
		self
	}

	/// Set the overlay flag
	pub fn with_overlay(mut self, overlay: bool) -> Self {
		self.overlay = overlay;
		self
	}

	/// Store an eagerly resolved literal text
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.text = Some(text.into());
	}

	/// Store an eagerly resolved literal title
	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = Some(title.into());
	}

	/// Text without a translator: the eager literal, or the phrase's own rendering
	pub fn text(&self) -> String {
		self.resolve_text(None)
	}

	/// Title without a translator, if the message has one
	pub fn title(&self) -> Option<String> {
		self.resolve_title(None)
	}

	/// Resolve the text for display
	pub fn resolve_text(&self, translator: Option<&dyn Translator>) -> String {
		if let Some(text) = &self.text {
			return text.clone();
		}
		match translator {
			Some(translator) => translator.translate(&self.phrase),
			None => self.phrase.render_literal(),
		}
	}

	/// Resolve the title for display
	pub fn resolve_title(&self, translator: Option<&dyn Translator>) -> Option<String> {
		if let Some(title) = &self.title {
			return Some(title.clone());
		}
		let phrase = self.title_phrase.as_ref()?;
		Some(match translator {
			Some(translator) => translator.translate(phrase),
			None => phrase.render_literal(),
		})
	}

	/// Whether this message has been rendered
	pub fn is_displayed(&self) -> bool {
		self.displayed
	}

	/// Flag this message as rendered
	pub fn mark_displayed(&mut self) {
		self.displayed = true;
	}

	/// Whether `candidate` would repeat this message while it is still pending
	///
	/// Displayed messages never suppress new ones.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::{Level, Message, Phrase};
	///
	/// let mut pending = Message::new(Level::Info, Phrase::new("Saved"));
	/// let candidate = Message::new(Level::Info, Phrase::new("Saved"));
	/// assert!(pending.suppresses(&candidate));
	///
	/// pending.mark_displayed();
	/// assert!(!pending.suppresses(&candidate));
	/// ```
	pub fn suppresses(&self, candidate: &Message) -> bool {
		!self.displayed && self.to_string() == candidate.to_string()
	}
}

impl fmt::Display for Message {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.level)?;
		if let Some(title) = self.title() {
			write!(f, " {}:", title)?;
		}
		write!(f, " {}", self.text())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::translator::CatalogTranslator;
	use rstest::rstest;

	#[rstest]
	fn test_display_string_form() {
		let message = Message::new(Level::Warning, Phrase::new("Disk almost full"))
			.with_title(Phrase::new("Storage"));
		assert_eq!(message.to_string(), "[warning] Storage: Disk almost full");

		let untitled = Message::new(Level::Error, Phrase::new("Failed"));
		assert_eq!(untitled.to_string(), "[error] Failed");
	}

	#[rstest]
	fn test_eager_literal_takes_precedence() {
		let mut translator = CatalogTranslator::new("fr");
		translator.add("Saved", "Enregistré");

		let mut message = Message::new(Level::Success, Phrase::new("Saved"));
		assert_eq!(message.resolve_text(Some(&translator)), "Enregistré");

		message.set_text("Saved");
		assert_eq!(message.resolve_text(Some(&translator)), "Saved");
	}

	#[rstest]
	fn test_title_resolution() {
		let mut translator = CatalogTranslator::new("fr");
		translator.add("Done", "Terminé");

		let message =
			Message::new(Level::Info, Phrase::new("Body")).with_title(Phrase::new("Done"));

		assert_eq!(message.title().as_deref(), Some("Done"));
		assert_eq!(
			message.resolve_title(Some(&translator)).as_deref(),
			Some("Terminé")
		);
		assert_eq!(
			Message::new(Level::Info, Phrase::new("Body")).resolve_title(Some(&translator)),
			None
		);
	}

	#[rstest]
	#[case(Level::Info, "Saved", None, true)]
	#[case(Level::Success, "Saved", None, false)]
	#[case(Level::Info, "Saved!", None, false)]
	#[case(Level::Info, "Saved", Some("Profile"), false)]
	fn test_suppression(
		#[case] level: Level,
		#[case] text: &str,
		#[case] title: Option<&str>,
		#[case] expected: bool,
	) {
		let pending = Message::new(Level::Info, Phrase::new("Saved"));
		let mut candidate = Message::new(level, Phrase::new(text));
		if let Some(title) = title {
			candidate = candidate.with_title(Phrase::new(title));
		}
		assert_eq!(pending.suppresses(&candidate), expected);
	}

	#[rstest]
	fn test_literal_and_phrase_with_same_rendering_are_equal_identities() {
		let mut literal = Message::new(Level::Info, Phrase::new("Saved"));
		literal.set_text("Saved");
		let deferred = Message::new(Level::Info, Phrase::new("Saved"));

		assert!(literal.suppresses(&deferred));
	}

	#[rstest]
	fn test_session_round_trip_keeps_flags() {
		let mut message = Message::new(Level::Error, Phrase::new("Oops")).with_overlay(true);
		message.mark_displayed();

		let value = serde_json::to_value(&message).unwrap();
		let restored: Message = serde_json::from_value(value).unwrap();

		assert_eq!(restored, message);
		assert!(restored.overlay);
		assert!(restored.is_displayed());
	}
}
