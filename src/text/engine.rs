use std::collections::HashMap;

use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::{MockupError, MockupResult};
use crate::text::bitmap::{self, BitmapMetrics};
use crate::text::font::FontFace;
use crate::text::wrap::try_wrap;

/// Measured size of a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// A line of text ready to be drawn by a [`Pen`](crate::raster::pen::Pen).
pub enum Shaped {
    /// Glyph runs laid out by parley; brushes carry the color.
    Outline {
        layout: parley::Layout<Rgba8>,
        font: vello_cpu::peniko::FontData,
        extent: TextExtent,
    },
    /// Lit pixels of the built-in face as solid rectangles relative to the top-left corner.
    Bitmap {
        rects: Vec<Rect>,
        color: Rgba8,
        extent: TextExtent,
    },
}

impl Shaped {
    pub fn extent(&self) -> TextExtent {
        match self {
            Shaped::Outline { extent, .. } | Shaped::Bitmap { extent, .. } => *extent,
        }
    }

    pub fn width(&self) -> f32 {
        self.extent().width
    }

    pub fn height(&self) -> f32 {
        self.extent().height
    }
}

struct RegisteredFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// Shaping state for one render: parley contexts plus registered faces.
///
/// Not shared across threads; each render owns one.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    registered: HashMap<u64, RegisteredFace>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    fn register(&mut self, id: u64, bytes: &[u8], index: u32) -> MockupResult<&RegisteredFace> {
        if !self.registered.contains_key(&id) {
            let families = self
                .font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                MockupError::layout("no font families registered from font bytes")
            })?;
            let family = self
                .font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| MockupError::layout("registered font family has no name"))?
                .to_string();
            let font = vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(bytes.to_vec()),
                index,
            );
            self.registered.insert(id, RegisteredFace { family, font });
        }
        self.registered
            .get(&id)
            .ok_or_else(|| MockupError::layout("font registration vanished"))
    }

    fn layout_outline(
        &mut self,
        text: &str,
        id: u64,
        bytes: &[u8],
        index: u32,
        size_px: f32,
        color: Rgba8,
    ) -> MockupResult<(parley::Layout<Rgba8>, vello_cpu::peniko::FontData)> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MockupError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let face = self.register(id, bytes, index)?;
        let family = face.family.clone();
        let font = face.font.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(color));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok((layout, font))
    }

    /// Shape one line of text in `color`.
    pub fn shape(&mut self, text: &str, face: &FontFace, color: Rgba8) -> MockupResult<Shaped> {
        match face {
            FontFace::Builtin { size_px } => {
                let (rects, w, h) = bitmap::rasterize(text, BitmapMetrics::for_size(*size_px));
                Ok(Shaped::Bitmap {
                    rects,
                    color,
                    extent: TextExtent {
                        width: w as f32,
                        height: h as f32,
                    },
                })
            }
            FontFace::Outline {
                id,
                bytes,
                index,
                size_px,
            } => {
                let (layout, font) =
                    self.layout_outline(text, *id, bytes, *index, *size_px, color)?;
                let extent = TextExtent {
                    width: layout.width(),
                    height: layout.height(),
                };
                Ok(Shaped::Outline {
                    layout,
                    font,
                    extent,
                })
            }
        }
    }

    /// Width and height of one line.
    pub fn extent(&mut self, text: &str, face: &FontFace) -> MockupResult<TextExtent> {
        match face {
            FontFace::Builtin { size_px } => {
                let m = BitmapMetrics::for_size(*size_px);
                Ok(TextExtent {
                    width: m.width(text) as f32,
                    height: m.line_height() as f32,
                })
            }
            FontFace::Outline { .. } => Ok(self.shape(text, face, Rgba8::BLACK)?.extent()),
        }
    }

    /// Bounding-box width of one line.
    pub fn measure(&mut self, text: &str, face: &FontFace) -> MockupResult<f32> {
        Ok(self.extent(text, face)?.width)
    }

    /// Greedy wrap measured with `face`.
    pub fn wrap(
        &mut self,
        text: &str,
        face: &FontFace,
        max_width: f32,
    ) -> MockupResult<Vec<String>> {
        try_wrap(text, max_width, |s| self.measure(s, face))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
