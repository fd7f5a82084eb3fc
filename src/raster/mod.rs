//! Pixel buffers, vector drawing and compositing.
//!
//! All buffers are premultiplied RGBA8. Shapes are rasterized with `vello_cpu`; blending and
//! blurring are integer kernels over the raw bytes so results are bit-stable across runs.

/// Porter-Duff and separable blend kernels.
pub mod blend;
pub(crate) mod blur;
/// Vector drawing handle.
pub mod pen;
/// Owned canvas/layer buffer.
pub mod surface;
