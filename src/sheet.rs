//! Frosted-glass bottom sheet.

use crate::foundation::core::Rect;
use crate::foundation::error::{MockupError, MockupResult};
use crate::raster::surface::{PixelBounds, Surface};
use crate::theme::Theme;

/// Geometry of a glass sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStyle {
    /// Distance from the left, right and bottom frame edges.
    pub inset: f64,
    pub radius: f64,
    pub blur_sigma: f32,
    pub border_width: f64,
    pub handle_half_width: f64,
    /// Handle top, measured from the sheet top.
    pub handle_offset: f64,
    pub handle_height: f64,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            inset: 24.0,
            radius: 54.0,
            blur_sigma: 18.0,
            border_width: 2.0,
            handle_half_width: 70.0,
            handle_offset: 18.0,
            handle_height: 10.0,
        }
    }
}

impl SheetStyle {
    /// Frame region occupied by a sheet starting at `top_y`.
    pub fn frame(&self, canvas_width: u32, canvas_height: u32, top_y: f64) -> Rect {
        let (w, h) = (f64::from(canvas_width), f64::from(canvas_height));
        Rect::new(self.inset, top_y, w - self.inset, h - self.inset)
    }
}

/// [`glass_sheet_with`] using [`SheetStyle::default`].
pub fn glass_sheet(canvas: &Surface, theme: &Theme, top_y: f64) -> MockupResult<Surface> {
    glass_sheet_with(canvas, theme, top_y, &SheetStyle::default())
}

/// Blur the canvas under the sheet frame, then lay the translucent panel and its drag handle on
/// top. Pixels outside the frame are returned unchanged.
pub fn glass_sheet_with(
    canvas: &Surface,
    theme: &Theme,
    top_y: f64,
    style: &SheetStyle,
) -> MockupResult<Surface> {
    let (w, h) = (canvas.width(), canvas.height());
    let frame = style.frame(w, h, top_y);
    if !(frame.x0 < frame.x1 && frame.y0 < frame.y1) {
        return Err(MockupError::validation(format!(
            "sheet frame {frame:?} is empty on a {w}x{h} canvas"
        )));
    }

    // Crop, paste-back and clip all share these snapped bounds.
    let bounds = PixelBounds::clamp(frame, w, h);
    let mut out = canvas.clone();
    let blurred = canvas.crop(frame)?.blur(style.blur_sigma)?;
    out.paste(&blurred, bounds.x0 as i32, bounds.y0 as i32);

    let cx = (f64::from(w) / 2.0).floor();
    let hy = top_y + style.handle_offset;
    let mut overlay = Surface::layer(w, h, |pen| {
        pen.rounded_rect(
            frame,
            style.radius,
            Some(theme.sheet_fill),
            Some(theme.sheet_border),
            style.border_width,
        );
        pen.rounded_rect(
            Rect::new(
                cx - style.handle_half_width,
                hy,
                cx + style.handle_half_width,
                hy + style.handle_height,
            ),
            f64::MAX,
            Some(theme.sheet_handle),
            None,
            0.0,
        );
        Ok(())
    })?;
    overlay.clip_to(frame);
    out.composite(&overlay)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/sheet.rs"]
mod tests;
