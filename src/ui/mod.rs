//! Minimal immediate-mode UI helpers
//!
//! Rectangle-based layout plus a handful of draw helpers. Widgets are
//! rebuilt every frame; clicks are reported through return values.

mod draw;
mod rect;

pub use draw::*;
pub use rect::*;
