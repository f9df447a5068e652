//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod element;
pub mod error;
pub mod geometry;

// Re-export for convenience
pub use element::Element;
pub use error::{AppError, MissingElement};
pub use geometry::{AnchorSnapshot, ElementBox, InvalidViewport, Viewport};
