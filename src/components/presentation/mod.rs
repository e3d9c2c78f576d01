mod component;
pub mod config;
mod layout;
mod state;
mod types;

pub use component::Presentation;
pub use config::{DeckConfig, Variant};
