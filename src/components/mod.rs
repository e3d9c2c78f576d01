pub mod audio;
pub mod presentation;
