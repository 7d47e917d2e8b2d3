//! # Reinhardt Flash
//!
//! Session-backed flash messages for Reinhardt applications.
//!
//! A flash message is queued while handling one request and displayed
//! during the next, typically across a redirect. Messages live in the
//! user's session until they have been rendered once; a post-response hook
//! then removes them.
//!
//! ## Crates
//!
//! - `reinhardt-flash-messages`: levels, phrases, the message entity, the
//!   session storage adapter and the [`FlashNotifier`]
//! - `reinhardt-flash-display` (feature `display`, on by default): the Tera
//!   display component, its factory and the post-response hook
//!
//! ## Lifecycle
//!
//! ```rust
//! use std::sync::Arc;
//! use reinhardt_flash::{FlashMessagesConfig, InMemorySession, build_services};
//!
//! let config = FlashMessagesConfig::from_value(serde_json::json!({
//!     "useTitle": true,
//!     "useOverlay": false,
//! }))
//! .unwrap();
//! let session = Arc::new(InMemorySession::new());
//!
//! // Request 1: the handler queues a message and redirects
//! let services = build_services(&config, session.clone(), None).unwrap();
//! services.notifier.success("Your changes were saved", Some("Settings"));
//!
//! // Request 2: the page renders the pending messages
//! let services = build_services(&config, session.clone(), None).unwrap();
//! let html = services.factory.create().render().unwrap();
//! assert!(html.contains("Your changes were saved"));
//!
//! // After the response: displayed messages are pruned
//! assert_eq!(services.on_response.handle(), 1);
//! ```

pub mod config;
pub mod helper;
pub mod services;

pub use config::{ConfigError, FlashMessagesConfig};
pub use helper::FlashMessages;
pub use services::{FlashServices, build_services};

pub use reinhardt_flash_messages::{
	CatalogTranslator, FlashNotifier, FlashStorage, FlashText, InMemorySession, Level, Message,
	MessageOptions, NoopTranslator, Parameters, Phrase, SessionHandle, SessionStorage, Translator,
	storage,
};

#[cfg(feature = "display")]
pub use reinhardt_flash_display::{
	DisplayError, DisplayOptions, FlashMessagesComponent, FlashMessagesFactory, OnResponseHandler,
};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::config::*;
	pub use crate::helper::*;
	pub use crate::services::*;
	pub use reinhardt_flash_messages::prelude::*;

	#[cfg(feature = "display")]
	pub use reinhardt_flash_display::{
		DisplayOptions, FlashMessagesComponent, FlashMessagesFactory, OnResponseHandler,
	};
}
