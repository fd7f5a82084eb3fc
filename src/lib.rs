//! Glassmock renders deterministic raster mockups of mobile app screens.
//!
//! A render takes a [`Theme`], a [`FontSet`], a [`FrameSize`] and (for photographic screens) a
//! seed, and produces a flattened RGB image. The pieces stack bottom-up:
//!
//! - [`raster`]: premultiplied [`Surface`] buffers, vector drawing through [`Pen`], blending and
//!   blur
//! - [`text`]: font roles, shaping and greedy word wrap
//! - [`backdrop`]: procedural photo backgrounds and flat gradients
//! - [`sheet`]: frosted-glass bottom sheets that blur only what lies beneath them
//! - [`widgets`]: buttons, pills, fields, navigation and status bars
//! - [`screens`]: the fixed screen set, plus parallel batch rendering
//!
//! The same inputs always produce the same bytes.
#![forbid(unsafe_code)]

mod foundation;

/// Procedural backgrounds.
pub mod backdrop;
/// PNG output.
pub mod output;
pub mod raster;
pub mod screens;
pub mod sheet;
pub mod text;
/// Color themes.
pub mod theme;
pub mod widgets;

pub use crate::foundation::core::{FrameSize, Point, Rect, Rgba8};
pub use crate::foundation::error::{FontLoadError, MockupError, MockupResult};

pub use crate::backdrop::{flat_backdrop, photo_backdrop};
pub use crate::output::save_png;
pub use crate::raster::blend::BlendMode;
pub use crate::raster::pen::Pen;
pub use crate::raster::surface::Surface;
pub use crate::screens::{
    BatchJob, BatchOpts, Composed, MARGIN, Rendered, Screen, render_batch,
};
pub use crate::sheet::{SheetStyle, glass_sheet, glass_sheet_with};
pub use crate::text::{FontFace, FontManifest, FontRole, FontSet, FontSpec, TextEngine};
pub use crate::theme::{SkyPalette, Theme};
pub use crate::widgets::{
    ButtonStyle, CardTone, ElementKind, LayoutTrace, NavSlot, Placement, Ui,
};
