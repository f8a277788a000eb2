//! hdrgrad engine crate.
//!
//! Host-side collaborators for the gradient editor: geometry, packed display
//! colors, the recorded draw stream and platform-agnostic input state.
//! Rendering the draw stream is left to the embedding application.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
