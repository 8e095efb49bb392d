/// State management module
///
/// This module handles all application state, including:
/// - Scroll position tracking and carousel geometry (tracker.rs)
/// - The loaded photo gallery and folder scanning (gallery.rs)
/// - The persisted user configuration (config.rs)

pub mod config;
pub mod gallery;
pub mod tracker;
