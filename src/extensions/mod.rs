//! Extension points for hosts.

mod plugins;

pub use plugins::{DeckEvent, DeckPlugin, PluginContext};
