//! Output persistence: sanitized run folders and content files

pub mod writer;

pub use writer::{sanitize_filename, sanitize_folder_name, OutputWriter, SavedPaths};
