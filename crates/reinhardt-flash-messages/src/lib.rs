//! Flash messages for Reinhardt
//!
//! This crate provides one-time notifications that survive a single
//! redirect/response cycle. Request handlers queue messages through the
//! [`FlashNotifier`]; the pending list lives in the user's session and is
//! rendered (and then discarded) by the display component on the next
//! response.
//!
//! ## Features
//!
//! - **Levels**: Success, Info, Warning and Error
//! - **Phrases**: Translatable text carrying a plural count and named parameters
//! - **Overlay**: Messages may request modal presentation
//! - **De-duplication**: A message identical to one that is still pending is not queued twice
//! - **Session Storage**: Pending messages are kept in the host session under well-known keys
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use reinhardt_flash_messages::{
//!     FlashNotifier, InMemorySession, Level, MessageOptions, SessionStorage,
//!     storage::load_messages,
//! };
//!
//! let session = Arc::new(InMemorySession::new());
//! let storage = Arc::new(SessionStorage::new(session));
//! let notifier = FlashNotifier::new(storage.clone(), false, None);
//!
//! notifier.success("Profile saved", None);
//! notifier.message(
//!     "%(count)d files uploaded",
//!     Level::Info,
//!     MessageOptions::new().count(3),
//! );
//!
//! let pending = load_messages(&*storage);
//! assert_eq!(pending.len(), 2);
//! assert_eq!(pending[1].text(), "3 files uploaded");
//! ```

pub mod levels;
pub mod message;
pub mod notifier;
pub mod phrase;
pub mod storage;
pub mod translator;

pub use levels::{Level, UnknownLevel};
pub use message::Message;
pub use notifier::{FlashNotifier, MessageOptions};
pub use phrase::{FlashText, Parameters, Phrase};
pub use storage::{
	FlashStorage, InMemorySession, KEY_IMPORTANT, KEY_MESSAGES, SessionHandle, SessionStorage,
};
pub use translator::{CatalogTranslator, NoopTranslator, Translator};

/// Re-export commonly used types
pub mod prelude {
	pub use crate::levels::*;
	pub use crate::message::*;
	pub use crate::notifier::*;
	pub use crate::phrase::*;
	pub use crate::storage::*;
	pub use crate::translator::*;
}
