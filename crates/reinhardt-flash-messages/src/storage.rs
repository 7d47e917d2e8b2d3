//! Session storage adapter
//!
//! Flash state lives entirely inside the user's session. The adapter is a
//! thin key/value shim: it performs no locking, versioning or validation.
//! Concurrent requests of one session race on read-modify-write and the last
//! writer wins.

use crate::message::Message;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Key of the pending message list
pub const KEY_MESSAGES: &str = "messages";

/// Key of the "important" flag
pub const KEY_IMPORTANT: &str = "important";

/// Session namespace used by [`SessionStorage`]
pub const SESSION_NAMESPACE: &str = "_flash_messages";

/// Host session collaborator
///
/// Scoped to one end-user session. Values written in one request must be
/// readable in the next.
pub trait SessionHandle: Send + Sync {
	/// Get a value from the session
	fn get(&self, key: &str) -> Option<Value>;

	/// Set a value in the session
	fn set(&self, key: &str, value: Value);
}

/// In-memory session data
///
/// Useful for tests, development servers and non-HTTP execution contexts.
///
/// # Examples
///
/// ```
/// use reinhardt_flash_messages::{InMemorySession, SessionHandle};
/// use serde_json::json;
///
/// let session = InMemorySession::new();
/// session.set("user_id", json!("123"));
/// assert_eq!(session.get("user_id"), Some(json!("123")));
/// assert_eq!(session.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
	data: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemorySession {
	/// Create a new empty session
	pub fn new() -> Self {
		Self::default()
	}

	/// Check if the session is empty
	pub fn is_empty(&self) -> bool {
		self.data.read().is_empty()
	}

	/// Clear all session data
	pub fn clear(&self) {
		self.data.write().clear();
	}
}

impl SessionHandle for InMemorySession {
	fn get(&self, key: &str) -> Option<Value> {
		self.data.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: Value) {
		self.data.write().insert(key.to_string(), value);
	}
}

/// Key/value storage for flash state
pub trait FlashStorage: Send + Sync {
	/// Get a value, or `default` when nothing is stored under `key`
	fn get(&self, key: &str, default: Value) -> Value;

	/// Store a value
	fn set(&self, key: &str, value: Value);
}

/// [`FlashStorage`] backed by the host session
///
/// Keys are namespaced so flash state cannot collide with other session data.
pub struct SessionStorage {
	session: Arc<dyn SessionHandle>,
	namespace: String,
}

impl SessionStorage {
	/// Create a storage adapter over the given session
	pub fn new(session: Arc<dyn SessionHandle>) -> Self {
		Self {
			session,
			namespace: SESSION_NAMESPACE.to_string(),
		}
	}

	/// Use a custom session namespace
	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	/// Get the session namespace
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	fn session_key(&self, key: &str) -> String {
		format!("{}.{}", self.namespace, key)
	}
}

impl FlashStorage for SessionStorage {
	fn get(&self, key: &str, default: Value) -> Value {
		self.session.get(&self.session_key(key)).unwrap_or(default)
	}

	fn set(&self, key: &str, value: Value) {
		self.session.set(&self.session_key(key), value);
	}
}

/// Read the pending message list
///
/// A stored value that cannot be decoded is treated as an empty list.
pub fn load_messages(storage: &dyn FlashStorage) -> Vec<Message> {
	let value = storage.get(KEY_MESSAGES, Value::Array(Vec::new()));
	match serde_json::from_value(value) {
		Ok(messages) => messages,
		Err(e) => {
			tracing::warn!(error = %e, "Discarding undecodable flash message list");
			Vec::new()
		}
	}
}

/// Write the pending message list
pub fn store_messages(storage: &dyn FlashStorage, messages: &[Message]) {
	match serde_json::to_value(messages) {
		Ok(value) => storage.set(KEY_MESSAGES, value),
		Err(e) => {
			tracing::warn!(error = %e, "Failed to encode flash message list");
		}
	}
}

/// Read the "important" flag
pub fn is_important(storage: &dyn FlashStorage) -> bool {
	storage
		.get(KEY_IMPORTANT, Value::Bool(false))
		.as_bool()
		.unwrap_or(false)
}

/// Write the "important" flag
pub fn set_important(storage: &dyn FlashStorage, important: bool) {
	storage.set(KEY_IMPORTANT, Value::Bool(important));
}
