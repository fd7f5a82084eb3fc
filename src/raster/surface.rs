use std::path::Path;

use crate::foundation::core::{FrameSize, Rect, Rgba8};
use crate::foundation::error::{MockupError, MockupResult};
use crate::raster::blend::{self, BlendMode};
use crate::raster::blur::blur_channels;
use crate::raster::pen::Pen;

/// Owned premultiplied RGBA8 pixel buffer.
///
/// Canvases and transient layers share this type; a layer joins a canvas only through one of the
/// `composite*` calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Integer pixel bounds `[x0, x1) x [y0, y1)` clamped to a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelBounds {
    pub(crate) x0: u32,
    pub(crate) y0: u32,
    pub(crate) x1: u32,
    pub(crate) y1: u32,
}

impl PixelBounds {
    /// Snap `rect` outward to whole pixels and clamp to `width` x `height`.
    pub(crate) fn clamp(rect: Rect, width: u32, height: u32) -> Self {
        let snap = |v: f64, max: u32| -> u32 {
            if v.is_nan() {
                return 0;
            }
            v.clamp(0.0, f64::from(max)) as u32
        };
        let x0 = snap(rect.x0.min(rect.x1).floor(), width);
        let y0 = snap(rect.y0.min(rect.y1).floor(), height);
        let x1 = snap(rect.x0.max(rect.x1).ceil(), width);
        let y1 = snap(rect.y0.max(rect.y1).ceil(), height);
        Self { x0, y0, x1, y1 }
    }

    pub(crate) fn is_empty(self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub(crate) fn width(self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub(crate) fn height(self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> MockupResult<Self> {
        let size = FrameSize::new(width, height)?;
        let len = (size.width as usize) * (size.height as usize) * 4;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Surface filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> MockupResult<Self> {
        let mut out = Self::new(width, height)?;
        let px = color.to_premul();
        for chunk in out.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        Ok(out)
    }

    /// Surface whose pixel at `(x, y)` is `f(x, y)`.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgba8,
    ) -> MockupResult<Self> {
        let mut out = Self::new(width, height)?;
        for (i, chunk) in out.data.chunks_exact_mut(4).enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            chunk.copy_from_slice(&f(x, y).to_premul());
        }
        Ok(out)
    }

    /// Opaque surface from an RGB image.
    pub fn from_rgb_image(img: &image::RgbImage) -> MockupResult<Self> {
        let mut out = Self::new(img.width(), img.height())?;
        for (dst, src) in out.data.chunks_exact_mut(4).zip(img.as_raw().chunks_exact(3)) {
            dst.copy_from_slice(&[src[0], src[1], src[2], 255]);
        }
        Ok(out)
    }

    pub(crate) fn from_premul(width: u32, height: u32, data: Vec<u8>) -> MockupResult<Self> {
        let size = FrameSize::new(width, height)?;
        if data.len() != (size.width as usize) * (size.height as usize) * 4 {
            return Err(MockupError::render(
                "premultiplied buffer does not match surface dimensions",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> FrameSize {
        FrameSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied row-major RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Straight color at `(x, y)`; transparent when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        if x >= self.width || y >= self.height {
            return Rgba8::TRANSPARENT;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Rgba8::from_premul([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    fn check_same_size(&self, other: &Surface, op: &str) -> MockupResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(MockupError::render(format!(
                "{op}: layer is {}x{} but canvas is {}x{}",
                other.width, other.height, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Source-over of a same-size layer onto this surface.
    pub fn composite(&mut self, layer: &Surface) -> MockupResult<()> {
        self.check_same_size(layer, "composite")?;
        blend::over_rows_in_place(&mut self.data, &layer.data, self.width, 0..self.height)
    }

    /// Source-over with a separable blend mode.
    pub fn composite_with(&mut self, layer: &Surface, mode: BlendMode) -> MockupResult<()> {
        self.check_same_size(layer, "composite_with")?;
        blend::blend_over_in_place(&mut self.data, &layer.data, mode)
    }

    /// Blend `layer` only where this surface has coverage, keeping this surface's alpha.
    pub fn composite_atop(&mut self, layer: &Surface, mode: BlendMode) -> MockupResult<()> {
        self.check_same_size(layer, "composite_atop")?;
        blend::blend_atop_in_place(&mut self.data, &layer.data, mode)
    }

    /// Copy of the pixels inside `rect` (snapped outward, clamped to the surface).
    pub fn crop(&self, rect: Rect) -> MockupResult<Surface> {
        let b = PixelBounds::clamp(rect, self.width, self.height);
        if b.is_empty() {
            return Err(MockupError::validation(format!(
                "crop rect {rect:?} does not intersect the {}x{} surface",
                self.width, self.height
            )));
        }
        let stride = self.width as usize * 4;
        let row_len = b.width() as usize * 4;
        let mut data = Vec::with_capacity(row_len * b.height() as usize);
        for y in b.y0..b.y1 {
            let start = y as usize * stride + b.x0 as usize * 4;
            data.extend_from_slice(&self.data[start..start + row_len]);
        }
        Surface::from_premul(b.width(), b.height(), data)
    }

    /// Replace pixels with `src` placed at `(x, y)`; parts falling outside are dropped.
    pub fn paste(&mut self, src: &Surface, x: i32, y: i32) {
        let dst_stride = self.width as usize * 4;
        let src_stride = src.width as usize * 4;
        for sy in 0..src.height as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            let sx0 = (-x).max(0);
            let sx1 = (self.width as i32 - x).min(src.width as i32);
            if sx0 >= sx1 {
                return;
            }
            let s = sy as usize * src_stride + sx0 as usize * 4;
            let d = dy as usize * dst_stride + (x + sx0) as usize * 4;
            let n = (sx1 - sx0) as usize * 4;
            self.data[d..d + n].copy_from_slice(&src.data[s..s + n]);
        }
    }

    /// Clear every pixel outside `rect`.
    pub fn clip_to(&mut self, rect: Rect) {
        let b = PixelBounds::clamp(rect, self.width, self.height);
        let stride = self.width as usize * 4;
        for (y, row) in self.data.chunks_exact_mut(stride).enumerate() {
            let y = y as u32;
            if b.is_empty() || y < b.y0 || y >= b.y1 {
                row.fill(0);
                continue;
            }
            row[..b.x0 as usize * 4].fill(0);
            row[b.x1 as usize * 4..].fill(0);
        }
    }

    /// Gaussian-blurred copy.
    pub fn blur(&self, sigma: f32) -> MockupResult<Surface> {
        let data = blur_channels(&self.data, self.width, self.height, 4, sigma)?;
        Surface::from_premul(self.width, self.height, data)
    }

    /// Draw with a [`Pen`] into a transient layer, then composite it onto this surface once.
    pub fn paint<R>(
        &mut self,
        f: impl FnOnce(&mut Pen) -> MockupResult<R>,
    ) -> MockupResult<R> {
        let mut pen = Pen::new(self.width, self.height)?;
        let out = f(&mut pen)?;
        pen.finish_onto(self)?;
        Ok(out)
    }

    /// Standalone layer drawn with a [`Pen`].
    pub fn layer(
        width: u32,
        height: u32,
        f: impl FnOnce(&mut Pen) -> MockupResult<()>,
    ) -> MockupResult<Surface> {
        let mut out = Surface::new(width, height)?;
        out.paint(f)?;
        Ok(out)
    }

    /// Drop alpha after un-premultiplying. Opaque pixels round-trip exactly.
    pub fn flatten(&self) -> image::RgbImage {
        let mut out = Vec::with_capacity((self.width as usize) * (self.height as usize) * 3);
        for px in self.data.chunks_exact(4) {
            let c = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        image::RgbImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }

    /// Straight-alpha RGBA image.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Flatten and write a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> MockupResult<()> {
        crate::output::save_png(&self.flatten(), path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
