//! stillreel host integration
//!
//! Concrete implementations of the host contracts:
//! - **ProjectHost:** editing service over a JSON project document
//! - **FsMediaLibrary:** still discovery from a folder on disk
//! - **PromptFolderPicker:** line-based folder prompt on any reader/writer

pub mod host;
pub mod library;
pub mod picker;

pub use host::ProjectHost;
pub use library::FsMediaLibrary;
pub use picker::PromptFolderPicker;
