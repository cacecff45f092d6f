// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod popup;
pub mod progress;

pub use app::run;
