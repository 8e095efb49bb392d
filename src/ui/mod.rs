/// UI composition module
///
/// Pure view builders:
/// - The scrolling photo strip (foreground.rs)
/// - The crossfading full-window backdrop (background.rs)
///
/// Every builder takes the shared scroll position and returns widgets styled
/// for that instant; nothing in here holds state of its own.

pub mod background;
pub mod foreground;
