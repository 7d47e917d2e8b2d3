//! Post-response hook
//!
//! The host framework calls [`OnResponseHandler::handle`] after generating the
//! response. Without it, rendered messages stay in storage flagged as
//! displayed: each message is still shown once, but the list is never pruned.

use reinhardt_flash_messages::storage::{self, FlashStorage};
use std::sync::Arc;

/// Prunes displayed flash messages after the response
#[derive(Clone)]
pub struct OnResponseHandler {
	storage: Arc<dyn FlashStorage>,
}

impl OnResponseHandler {
	pub fn new(storage: Arc<dyn FlashStorage>) -> Self {
		Self { storage }
	}

	/// Remove displayed messages and return how many were removed
	///
	/// The important flag is reset once the messages it applied to have been
	/// shown.
	pub fn handle(&self) -> usize {
		let mut messages = storage::load_messages(self.storage.as_ref());
		let before = messages.len();
		messages.retain(|message| !message.is_displayed());
		let pruned = before - messages.len();

		if pruned == 0 {
			return 0;
		}

		storage::store_messages(self.storage.as_ref(), &messages);

		if storage::is_important(self.storage.as_ref()) {
			storage::set_important(self.storage.as_ref(), false);
		}

		tracing::debug!(
			pruned = pruned,
			remaining = messages.len(),
			"Displayed flash messages pruned"
		);

		pruned
	}
}
