//! Application layer - Plugin hooks, registration and use cases

pub mod build;
pub mod hooks;
pub mod init;
pub mod signals;

pub use build::{BuildReport, BuildService, ContentKind, ResolvedItem};
pub use hooks::{add_tags, move_resources, JsEmbed};
pub use signals::{register, register_with, Registration, Signal, SignalBus};
