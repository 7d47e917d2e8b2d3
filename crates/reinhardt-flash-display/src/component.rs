//! Flash messages display component
//!
//! The component reads the pending list from session storage, renders every
//! undisplayed message through Tera and flags those messages as displayed.

use crate::error::{DisplayError, DisplayResult};
use once_cell::sync::Lazy;
use reinhardt_flash_messages::storage::{self, FlashStorage};
use reinhardt_flash_messages::{Level, Message, Translator};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tera::{Context, Tera};

/// Name of the embedded default template
pub const DEFAULT_TEMPLATE: &str = "flash_messages.html";

static TERA: Lazy<Tera> = Lazy::new(|| {
	let mut tera = Tera::default();
	tera.add_raw_template(
		DEFAULT_TEMPLATE,
		include_str!("../templates/flash_messages.html"),
	)
	.expect("Failed to add flash_messages.html template");
	tera
});

/// Presentation settings of the display component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
	/// Render message titles
	pub use_title: bool,
	/// Render overlay messages as a modal group
	pub use_overlay: bool,
	/// Template replacing the embedded default
	pub template_file: Option<PathBuf>,
	/// Resolve phrases through the translator
	pub use_translator: bool,
}

impl Default for DisplayOptions {
	fn default() -> Self {
		Self {
			use_title: true,
			use_overlay: false,
			template_file: None,
			use_translator: true,
		}
	}
}

/// A message as exposed to the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
	pub level: Level,
	pub text: String,
	pub title: Option<String>,
	pub overlay: bool,
}

#[derive(Serialize)]
struct TemplateContext<'a> {
	messages: &'a [RenderedMessage],
	overlay: &'a [RenderedMessage],
	important: bool,
	use_title: bool,
}

/// Renders the pending flash messages of one session
pub struct FlashMessagesComponent {
	storage: Arc<dyn FlashStorage>,
	translator: Option<Arc<dyn Translator>>,
	options: DisplayOptions,
}

impl FlashMessagesComponent {
	/// Create a component over the given storage
	pub fn new(
		storage: Arc<dyn FlashStorage>,
		options: DisplayOptions,
		translator: Option<Arc<dyn Translator>>,
	) -> Self {
		Self {
			storage,
			translator,
			options,
		}
	}

	/// Current presentation settings
	pub fn options(&self) -> &DisplayOptions {
		&self.options
	}

	pub fn enable_title(&mut self) {
		self.options.use_title = true;
	}

	pub fn disable_title(&mut self) {
		self.options.use_title = false;
	}

	pub fn enable_overlay(&mut self) {
		self.options.use_overlay = true;
	}

	pub fn disable_overlay(&mut self) {
		self.options.use_overlay = false;
	}

	/// Render with a template file instead of the embedded default
	pub fn set_template_file(&mut self, path: impl Into<PathBuf>) {
		self.options.template_file = Some(path.into());
	}

	fn translator(&self) -> Option<&dyn Translator> {
		if self.options.use_translator {
			self.translator.as_deref()
		} else {
			None
		}
	}

	fn present(&self, message: &Message, important: bool) -> RenderedMessage {
		let translator = self.translator();
		RenderedMessage {
			level: message.level,
			text: message.resolve_text(translator),
			title: if self.options.use_title {
				message.resolve_title(translator)
			} else {
				None
			},
			overlay: self.options.use_overlay && (message.overlay || important),
		}
	}

	/// Messages the next render would show, without touching storage
	pub fn pending(&self) -> Vec<RenderedMessage> {
		let important = storage::is_important(self.storage.as_ref());
		storage::load_messages(self.storage.as_ref())
			.iter()
			.filter(|message| !message.is_displayed())
			.map(|message| self.present(message, important))
			.collect()
	}

	/// Render undisplayed messages and flag them as displayed
	///
	/// Storage is only written back when rendering succeeds, so a broken
	/// template does not swallow messages. An important flag left over from a
	/// response with nothing to show is cleared.
	pub fn render(&self) -> DisplayResult<String> {
		let mut messages = storage::load_messages(self.storage.as_ref());
		let important = storage::is_important(self.storage.as_ref());

		let mut inline = Vec::new();
		let mut overlay = Vec::new();
		let mut rendered = 0usize;

		for message in messages.iter_mut().filter(|message| !message.is_displayed()) {
			let entry = self.present(message, important);
			if entry.overlay {
				overlay.push(entry);
			} else {
				inline.push(entry);
			}
			message.mark_displayed();
			rendered += 1;
		}

		let context = TemplateContext {
			messages: &inline,
			overlay: &overlay,
			important,
			use_title: self.options.use_title,
		};
		let html = self.render_template(&context)?;

		if rendered > 0 {
			storage::store_messages(self.storage.as_ref(), &messages);
		} else if important {
			storage::set_important(self.storage.as_ref(), false);
		}

		tracing::debug!(
			rendered = rendered,
			inline = inline.len(),
			overlay = overlay.len(),
			important = important,
			locale = self.translator().map(|translator| translator.locale()),
			"Flash messages rendered"
		);

		Ok(html)
	}

	fn render_template(&self, context: &TemplateContext<'_>) -> DisplayResult<String> {
		let ctx = Context::from_serialize(context).map_err(DisplayError::Context)?;

		match &self.options.template_file {
			Some(path) => {
				let source = read_template(path)?;
				Ok(Tera::one_off(&source, &ctx, true)?)
			}
			None => Ok(TERA.render(DEFAULT_TEMPLATE, &ctx)?),
		}
	}
}

fn read_template(path: &Path) -> DisplayResult<String> {
	std::fs::read_to_string(path).map_err(|source| DisplayError::TemplateFile {
		path: path.to_path_buf(),
		source,
	})
}

/// Builds display components for request handlers
#[derive(Clone)]
pub struct FlashMessagesFactory {
	storage: Arc<dyn FlashStorage>,
	options: DisplayOptions,
	translator: Option<Arc<dyn Translator>>,
}

impl FlashMessagesFactory {
	pub fn new(
		storage: Arc<dyn FlashStorage>,
		options: DisplayOptions,
		translator: Option<Arc<dyn Translator>>,
	) -> Self {
		Self {
			storage,
			options,
			translator,
		}
	}

	/// Settings every created component starts with
	pub fn options(&self) -> &DisplayOptions {
		&self.options
	}

	/// Create a display component
	pub fn create(&self) -> FlashMessagesComponent {
		FlashMessagesComponent::new(
			self.storage.clone(),
			self.options.clone(),
			self.translator.clone(),
		)
	}
}
