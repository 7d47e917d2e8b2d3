//! Display component for Reinhardt flash messages
//!
//! [`FlashMessagesComponent`] renders the pending messages of the current
//! session once and flags them as displayed. [`OnResponseHandler`] is meant to
//! run after the response has been generated and prunes displayed entries so
//! session storage does not grow across requests.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use reinhardt_flash_display::{DisplayOptions, FlashMessagesFactory, OnResponseHandler};
//! use reinhardt_flash_messages::{FlashNotifier, InMemorySession, SessionStorage};
//!
//! let storage = Arc::new(SessionStorage::new(Arc::new(InMemorySession::new())));
//! let notifier = FlashNotifier::new(storage.clone(), false, None);
//! let factory = FlashMessagesFactory::new(storage.clone(), DisplayOptions::default(), None);
//! let hook = OnResponseHandler::new(storage.clone());
//!
//! // Request 1: queue a message, then redirect
//! notifier.success("Profile saved", None);
//!
//! // Request 2: render it and prune after the response
//! let html = factory.create().render().unwrap();
//! assert!(html.contains("Profile saved"));
//! assert_eq!(hook.handle(), 1);
//! ```

pub mod component;
pub mod error;
pub mod hook;

pub use component::{DisplayOptions, FlashMessagesComponent, FlashMessagesFactory, RenderedMessage};
pub use error::{DisplayError, DisplayResult};
pub use hook::OnResponseHandler;
