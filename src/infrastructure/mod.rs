//! Infrastructure layer - File system access and configuration

pub mod config;
pub mod copier;
pub mod discovery;
pub mod generator;

pub use config::Config;
pub use copier::copy_resources;
pub use discovery::discover_files;
pub use generator::{FileSystemGenerator, Generator};
