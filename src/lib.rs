//! deck-rs: headless slide presentation engine.
//!
//! The engine owns navigation state (current slide, transition lock, overview
//! grid), translates keyboard/touch/fragment input into navigation, and
//! orchestrates chart instances on an external rendering service as slides
//! become active. Hosts plug in drawing through [`render::Renderer`].

pub mod api;
pub mod charts;
pub mod content;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DeckEngine, DeckEngineConfig};
pub use error::{DeckError, DeckResult};
