//! Display errors

use std::path::PathBuf;

/// Result type for display operations
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Errors raised while rendering flash messages
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
	#[error("Failed to read template file {path}: {source}")]
	TemplateFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create template context: {0}")]
	Context(#[source] tera::Error),

	#[error("Tera rendering error: {0}")]
	Render(#[from] tera::Error),
}
