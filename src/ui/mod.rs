//! Terminal rendering

pub mod browser;
pub mod menu;
pub mod notice;
pub mod prompt;
pub mod render;
pub mod splash;
pub mod toast;

pub use render::render;
