//! Fonts, shaping and paragraph wrapping.

pub(crate) mod bitmap;
/// Parley-backed shaping and measurement.
pub mod engine;
/// Font roles, faces and manifests.
pub mod font;
/// Greedy word wrap.
pub mod wrap;

pub use engine::{Shaped, TextEngine, TextExtent};
pub use font::{FontFace, FontManifest, FontRole, FontSet, FontSpec, load_face};
pub use wrap::{try_wrap, wrap};
