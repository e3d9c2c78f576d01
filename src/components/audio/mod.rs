mod component;
mod listener;
mod state;

pub use component::BackgroundAudio;
