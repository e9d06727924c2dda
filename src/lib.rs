//! jsembed - Embed per-page JavaScript in static site builds
//!
//! Content items declare scripts in a `js` metadata value such as
//! `app.js(head), chart.js(body)`. The `add_tags` hook turns that value into
//! script tags and the `move_resources` hook copies the content `js`
//! directory into the output tree.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{add_tags, move_resources, register, Registration, Signal, SignalBus};
pub use error::JsEmbedError;
