//! Translator collaborator
//!
//! The notifier and the display component only need one capability from the
//! localization subsystem: resolve a [`Phrase`] into a display string.

use crate::phrase::Phrase;
use std::collections::HashMap;

/// Resolves phrases into localized strings
pub trait Translator: Send + Sync {
	/// Translate and interpolate a phrase
	fn translate(&self, phrase: &Phrase) -> String;

	/// Locale this translator resolves into
	fn locale(&self) -> &str;
}

/// Translator that only interpolates the source text
#[derive(Debug, Clone, Default)]
pub struct NoopTranslator;

impl Translator for NoopTranslator {
	fn translate(&self, phrase: &Phrase) -> String {
		phrase.render_literal()
	}

	fn locale(&self) -> &str {
		"en"
	}
}

/// In-process translation catalog for a single locale
///
/// # Example
/// ```
/// use reinhardt_flash_messages::{CatalogTranslator, Phrase, Translator};
///
/// let mut translator = CatalogTranslator::new("fr");
/// translator.add("Saved", "Enregistré");
/// translator.add_plural("%(count)d file", vec!["%(count)d fichier", "%(count)d fichiers"]);
///
/// assert_eq!(translator.translate(&Phrase::new("Saved")), "Enregistré");
/// assert_eq!(
///     translator.translate(&Phrase::new("%(count)d file").with_count(Some(2))),
///     "2 fichiers"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
	locale: String,
	messages: HashMap<String, String>,
	plurals: HashMap<String, Vec<String>>,
}

impl CatalogTranslator {
	/// Create an empty catalog for the given locale
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
			plurals: HashMap::new(),
		}
	}

	/// Add a simple translation
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Add plural forms for a source string
	pub fn add_plural(&mut self, singular: impl Into<String>, forms: Vec<&str>) {
		self.plurals.insert(
			singular.into(),
			forms.iter().map(|s| s.to_string()).collect(),
		);
	}

	fn lookup(&self, phrase: &Phrase) -> Option<&String> {
		if let Some(count) = phrase.count
			&& let Some(forms) = self.plurals.get(&phrase.text)
		{
			let index = self.plural_form(count);
			return forms.get(index).or_else(|| forms.last());
		}
		self.messages.get(&phrase.text)
	}

	/// Plural form index for `count` under this catalog's locale
	fn plural_form(&self, count: u64) -> usize {
		let lang = self.locale.split(['-', '_']).next().unwrap_or(&self.locale);

		match lang {
			"ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" => 0,

			"fr" => {
				if count <= 1 {
					0
				} else {
					1
				}
			}

			// form 0: n%10==1 && n%100!=11
			// form 1: n%10 in 2..=4 && n%100 not in 10..20
			"ru" | "uk" | "be" | "sr" | "hr" | "bs" => {
				let n100 = count % 100;
				let n10 = count % 10;
				if n10 == 1 && n100 != 11 {
					0
				} else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
					1
				} else {
					2
				}
			}

			_ => {
				if count == 1 {
					0
				} else {
					1
				}
			}
		}
	}
}

impl Translator for CatalogTranslator {
	fn translate(&self, phrase: &Phrase) -> String {
		match self.lookup(phrase) {
			Some(translation) => phrase.interpolate(translation),
			None => phrase.render_literal(),
		}
	}

	fn locale(&self) -> &str {
		&self.locale
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn german() -> CatalogTranslator {
		let mut translator = CatalogTranslator::new("de-DE");
		translator.add("Hello %(name)s", "Hallo %(name)s");
		translator.add_plural("%(count)d item", vec!["%(count)d Artikel", "%(count)d Artikel"]);
		translator
	}

	#[rstest]
	fn test_translate_with_parameters(german: CatalogTranslator) {
		let phrase = Phrase::new("Hello %(name)s").with_parameter("name", "Ringo");
		assert_eq!(german.translate(&phrase), "Hallo Ringo");
	}

	#[rstest]
	fn test_missing_translation_falls_back_to_source(german: CatalogTranslator) {
		let phrase = Phrase::new("Goodbye %(name)s").with_parameter("name", "Ringo");
		assert_eq!(german.translate(&phrase), "Goodbye Ringo");
	}

	#[rstest]
	fn test_plural_without_count_uses_singular_lookup(german: CatalogTranslator) {
		let phrase = Phrase::new("%(count)d item");
		assert_eq!(german.translate(&phrase), "%(count)d item");
	}

	#[rstest]
	#[case("en", 1, 0)]
	#[case("en", 0, 1)]
	#[case("en", 5, 1)]
	#[case("fr", 0, 0)]
	#[case("fr", 1, 0)]
	#[case("fr", 2, 1)]
	#[case("ja", 7, 0)]
	#[case("ru", 1, 0)]
	#[case("ru", 3, 1)]
	#[case("ru", 11, 2)]
	#[case("ru", 22, 1)]
	#[case("ru-RU", 25, 2)]
	fn test_plural_form(#[case] locale: &str, #[case] count: u64, #[case] expected: usize) {
		let translator = CatalogTranslator::new(locale);
		assert_eq!(translator.plural_form(count), expected);
	}

	#[rstest]
	fn test_plural_form_out_of_range_uses_last() {
		let mut translator = CatalogTranslator::new("ru");
		translator.add_plural("%(count)d file", vec!["%(count)d файл"]);

		let phrase = Phrase::new("%(count)d file").with_count(Some(5));
		assert_eq!(translator.translate(&phrase), "5 файл");
	}

	#[rstest]
	fn test_locale_reported(german: CatalogTranslator) {
		assert_eq!(german.locale(), "de-DE");
		assert_eq!(NoopTranslator.locale(), "en");
	}

	#[rstest]
	fn test_noop_translator_interpolates() {
		let phrase = Phrase::new("%(count)d new").with_count(Some(2));
		assert_eq!(NoopTranslator.translate(&phrase), "2 new");
	}
}
