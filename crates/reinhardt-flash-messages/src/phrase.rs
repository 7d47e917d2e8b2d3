//! Translatable phrases
//!
//! A [`Phrase`] is the unit handed to a translator: the source text plus an
//! optional plural count and named interpolation parameters. Placeholders use
//! the `%(name)s` / `%(name)d` syntax of the i18n catalogs.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Named interpolation parameters
pub type Parameters = BTreeMap<String, Value>;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"%\((?P<name>[A-Za-z_][A-Za-z0-9_]*)\)[sd]").expect("placeholder pattern is valid")
});

/// A translatable unit of text
///
/// # Examples
///
/// ```
/// use reinhardt_flash_messages::Phrase;
///
/// let phrase = Phrase::new("Welcome back, %(name)s")
///     .with_parameter("name", "Bob");
/// assert_eq!(phrase.render_literal(), "Welcome back, Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Phrase {
	pub text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub count: Option<u64>,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub parameters: Parameters,
}

impl Phrase {
	/// Create a phrase without count or parameters
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			count: None,
			parameters: Parameters::new(),
		}
	}

	/// Set the plural count
	pub fn with_count(mut self, count: Option<u64>) -> Self {
		self.count = count;
		self
	}

	/// Replace all interpolation parameters
	pub fn with_parameters(mut self, parameters: Parameters) -> Self {
		self.parameters = parameters;
		self
	}

	/// Add a single interpolation parameter
	pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.parameters.insert(name.into(), value.into());
		self
	}

	/// Substitute this phrase's parameters into `template`
	///
	/// `%(count)d` falls back to the phrase count when no explicit `count`
	/// parameter is present. Unknown placeholders are left as they are.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_flash_messages::Phrase;
	///
	/// let phrase = Phrase::new("%(count)d item").with_count(Some(4));
	/// assert_eq!(phrase.interpolate("%(count)d articles"), "4 articles");
	/// assert_eq!(phrase.interpolate("%(missing)s"), "%(missing)s");
	/// ```
	pub fn interpolate(&self, template: &str) -> String {
		if !template.contains("%(") {
			return template.to_string();
		}

		PLACEHOLDER
			.replace_all(template, |caps: &Captures<'_>| {
				let name = &caps["name"];
				match self.parameters.get(name) {
					Some(value) => value_to_string(value),
					None if name == "count" => match self.count {
						Some(count) => count.to_string(),
						None => caps[0].to_string(),
					},
					None => caps[0].to_string(),
				}
			})
			.into_owned()
	}

	/// Render the source text without translation
	pub fn render_literal(&self) -> String {
		self.interpolate(&self.text)
	}
}

impl fmt::Display for Phrase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render_literal())
	}
}

fn value_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Text handed to the notifier: either a literal string or a pre-built phrase
///
/// Literal text is wrapped into a [`Phrase`] carrying the call's count and
/// parameters. A pre-built phrase passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum FlashText {
	Literal(String),
	Phrase(Phrase),
}

impl FlashText {
	/// Whether the caller supplied a plain string
	pub fn is_literal(&self) -> bool {
		matches!(self, FlashText::Literal(_))
	}

	/// Convert into a phrase, attaching count and parameters to literal text
	pub fn into_phrase(self, count: Option<u64>, parameters: &Parameters) -> Phrase {
		match self {
			FlashText::Literal(text) => Phrase::new(text)
				.with_count(count)
				.with_parameters(parameters.clone()),
			FlashText::Phrase(phrase) => phrase,
		}
	}
}

impl From<&str> for FlashText {
	fn from(s: &str) -> Self {
		FlashText::Literal(s.to_string())
	}
}

impl From<String> for FlashText {
	fn from(s: String) -> Self {
		FlashText::Literal(s)
	}
}

impl From<&String> for FlashText {
	fn from(s: &String) -> Self {
		FlashText::Literal(s.clone())
	}
}

impl From<Phrase> for FlashText {
	fn from(phrase: Phrase) -> Self {
		FlashText::Phrase(phrase)
	}
}
