//! Built-in bitmap face: ISO-8859-1 mono fonts from `embedded-graphics`, scaled by an integer
//! factor and emitted as solid rectangles.

use std::borrow::Cow;
use std::convert::Infallible;

use embedded_graphics::Drawable as _;
use embedded_graphics::mono_font::iso_8859_1::{FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};
use embedded_graphics::text::renderer::TextRenderer as _;
use embedded_graphics::text::{Baseline, Text};

use crate::foundation::core::Rect;

/// Chosen font plus the integer magnification that approximates a pixel size.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BitmapMetrics {
    font: &'static MonoFont<'static>,
    pub(crate) scale: u32,
}

impl BitmapMetrics {
    pub(crate) fn for_size(size_px: f32) -> Self {
        let (font, base) = if size_px < 15.0 {
            (&FONT_6X10, 10.0)
        } else {
            (&FONT_10X20, 20.0)
        };
        let scale = (size_px / base).round().max(1.0) as u32;
        Self { font, scale }
    }

    fn style(self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.font, BinaryColor::On)
    }

    /// Unscaled advance width of `text`.
    fn raw_width(self, text: &str) -> u32 {
        self.style()
            .measure_string(text, embedded_graphics::prelude::Point::zero(), Baseline::Top)
            .bounding_box
            .size
            .width
    }

    pub(crate) fn line_height(self) -> u32 {
        self.font.character_size.height * self.scale
    }

    pub(crate) fn width(self, text: &str) -> u32 {
        self.raw_width(&fold_to_latin1(text)) * self.scale
    }
}

/// Map typographic punctuation the mono fonts lack onto Latin-1 lookalikes.
pub(crate) fn fold_to_latin1(text: &str) -> Cow<'_, str> {
    if text.chars().all(|c| u32::from(c) < 0x100) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push('"'),
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2022}' => out.push('\u{B7}'),
            '\u{2026}' => out.push_str("..."),
            '\u{2192}' => out.push_str("->"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Collects lit glyph pixels.
struct GlyphCollector {
    size: Size,
    lit: Vec<(i32, i32)>,
}

impl OriginDimensions for GlyphCollector {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for GlyphCollector {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if color.is_on() {
                self.lit.push((p.x, p.y));
            }
        }
        Ok(())
    }
}

/// Rasterize `text` into scaled rectangles relative to its top-left corner.
///
/// Returns the rectangles and the scaled `(width, height)` of the line box.
pub(crate) fn rasterize(text: &str, metrics: BitmapMetrics) -> (Vec<Rect>, u32, u32) {
    let text = fold_to_latin1(text);
    let raw_w = metrics.raw_width(&text);
    let raw_h = metrics.font.character_size.height;
    let mut target = GlyphCollector {
        size: Size::new(raw_w, raw_h),
        lit: Vec::new(),
    };
    let drawn = Text::with_baseline(
        &text,
        embedded_graphics::prelude::Point::zero(),
        metrics.style(),
        Baseline::Top,
    )
    .draw(&mut target);
    if drawn.is_err() {
        return (Vec::new(), 0, 0);
    }

    let mut lit = target.lit;
    lit.sort_unstable_by_key(|&(x, y)| (y, x));
    lit.dedup();

    let s = f64::from(metrics.scale);
    let mut rects = Vec::new();
    let mut i = 0;
    while i < lit.len() {
        let (x0, y) = lit[i];
        let mut x1 = x0 + 1;
        i += 1;
        while i < lit.len() && lit[i] == (x1, y) {
            x1 += 1;
            i += 1;
        }
        rects.push(Rect::new(
            f64::from(x0) * s,
            f64::from(y) * s,
            f64::from(x1) * s,
            f64::from(y + 1) * s,
        ));
    }

    (rects, raw_w * metrics.scale, raw_h * metrics.scale)
}

#[cfg(test)]
#[path = "../../tests/unit/text/bitmap.rs"]
mod tests;
