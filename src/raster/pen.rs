use vello_cpu::kurbo::{self as ck, Shape as _};

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{MockupError, MockupResult};
use crate::raster::blend::over_rows_in_place;
use crate::raster::surface::{PixelBounds, Surface};
use crate::text::Shaped;

const FLATTEN_TOLERANCE: f64 = 0.1;

/// Vector drawing handle over a `vello_cpu` context sized to one surface.
///
/// Everything drawn through a pen lands in a transient layer which [`Surface::paint`]
/// composites onto its surface exactly once.
pub struct Pen {
    ctx: vello_cpu::RenderContext,
    width: u32,
    height: u32,
    dirty: Option<Rect>,
}

impl Pen {
    pub(crate) fn new(width: u32, height: u32) -> MockupResult<Self> {
        let w = u16::try_from(width)
            .map_err(|_| MockupError::validation("pen width must fit in u16"))?;
        let h = u16::try_from(height)
            .map_err(|_| MockupError::validation("pen height must fit in u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width,
            height,
            dirty: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn mark(&mut self, rect: Rect, pad: f64) {
        let r = rect.abs().inflate(pad + 2.0, pad + 2.0);
        self.dirty = Some(match self.dirty {
            Some(d) => d.union(r),
            None => r,
        });
    }

    fn use_color(&mut self, color: Rgba8) {
        self.ctx.set_transform(ck::Affine::IDENTITY);
        self.ctx.set_paint(color.to_cpu());
    }

    fn stroke(&mut self, path: &ck::BezPath, color: Rgba8, width: f64) {
        self.use_color(color);
        self.ctx.set_stroke(ck::Stroke::new(width));
        self.ctx.stroke_path(path);
    }

    fn fill(&mut self, path: &ck::BezPath, color: Rgba8) {
        self.use_color(color);
        self.ctx.fill_path(path);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.use_color(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
        self.mark(rect, 0.0);
    }

    /// Rectangle with circular corners; `radius` is clamped to half the shorter side and the
    /// outline is kept inside `rect`.
    pub fn rounded_rect(
        &mut self,
        rect: Rect,
        radius: f64,
        fill: Option<Rgba8>,
        outline: Option<Rgba8>,
        width: f64,
    ) {
        let rect = rect.abs();
        let radius = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
        if let Some(c) = fill.filter(|c| c.a > 0) {
            let shape = ck::RoundedRect::from_rect(rect_to_cpu(rect), radius);
            self.fill(&shape.to_path(FLATTEN_TOLERANCE), c);
        }
        if let Some(c) = outline.filter(|c| c.a > 0 && width > 0.0) {
            let half = width / 2.0;
            let inner = rect.inset(-half);
            if inner.width() > 0.0 && inner.height() > 0.0 {
                let shape =
                    ck::RoundedRect::from_rect(rect_to_cpu(inner), (radius - half).max(0.0));
                self.stroke(&shape.to_path(FLATTEN_TOLERANCE), c, width);
            }
        }
        self.mark(rect, width);
    }

    /// Ellipse inscribed in `rect`.
    pub fn ellipse(&mut self, rect: Rect, fill: Option<Rgba8>, outline: Option<Rgba8>, width: f64) {
        let rect = rect.abs();
        if let Some(c) = fill.filter(|c| c.a > 0) {
            let shape = ck::Ellipse::from_rect(rect_to_cpu(rect));
            self.fill(&shape.to_path(FLATTEN_TOLERANCE), c);
        }
        if let Some(c) = outline.filter(|c| c.a > 0 && width > 0.0) {
            let inner = rect.inset(-width / 2.0);
            if inner.width() > 0.0 && inner.height() > 0.0 {
                let shape = ck::Ellipse::from_rect(rect_to_cpu(inner));
                self.stroke(&shape.to_path(FLATTEN_TOLERANCE), c, width);
            }
        }
        self.mark(rect, width);
    }

    /// Arc of the ellipse inscribed in `rect`, angles in degrees clockwise from 3 o'clock.
    pub fn arc(&mut self, rect: Rect, start_deg: f64, end_deg: f64, color: Rgba8, width: f64) {
        if color.a == 0 || width <= 0.0 {
            return;
        }
        let inner = rect.abs().inset(-width / 2.0);
        if inner.width() <= 0.0 || inner.height() <= 0.0 {
            return;
        }
        let (start, sweep) = arc_angles(start_deg, end_deg);
        let c = inner.center();
        let arc = ck::Arc::new(
            ck::Point::new(c.x, c.y),
            ck::Vec2::new(inner.width() / 2.0, inner.height() / 2.0),
            start,
            sweep,
            0.0,
        );
        self.stroke(&arc.to_path(FLATTEN_TOLERANCE), color, width);
        self.mark(rect, width);
    }

    /// Open polyline.
    pub fn line(&mut self, points: &[Point], color: Rgba8, width: f64) {
        if points.len() < 2 || color.a == 0 || width <= 0.0 {
            return;
        }
        let path = polyline_to_cpu(points, false);
        self.stroke(&path, color, width);
        self.mark(bounds_of(points), width);
    }

    /// Closed polygon.
    pub fn polygon(
        &mut self,
        points: &[Point],
        fill: Option<Rgba8>,
        outline: Option<Rgba8>,
        width: f64,
    ) {
        if points.len() < 3 {
            return;
        }
        let path = polyline_to_cpu(points, true);
        if let Some(c) = fill.filter(|c| c.a > 0) {
            self.fill(&path, c);
        }
        if let Some(c) = outline.filter(|c| c.a > 0 && width > 0.0) {
            self.stroke(&path, c, width);
        }
        self.mark(bounds_of(points), width);
    }

    /// Draw shaped text with its top-left corner at `origin`.
    pub fn text(&mut self, shaped: &Shaped, origin: Point) {
        match shaped {
            Shaped::Bitmap { rects, color, .. } => {
                if color.a == 0 {
                    return;
                }
                self.use_color(*color);
                for r in rects {
                    self.ctx
                        .fill_rect(&rect_to_cpu(*r + origin.to_vec2()));
                }
            }
            Shaped::Outline { layout, font, .. } => {
                self.ctx
                    .set_transform(ck::Affine::translate((origin.x, origin.y)));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        self.ctx.set_paint(brush.to_cpu());
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        self.ctx
                            .glyph_run(font)
                            .font_size(run.run().font_size())
                            .fill_glyphs(glyphs);
                    }
                }
                self.ctx.set_transform(ck::Affine::IDENTITY);
            }
        }
        let (w, h) = (f64::from(shaped.width()), f64::from(shaped.height()));
        self.mark(Rect::from_origin_size(origin, (w, h)), h.max(8.0));
    }

    /// Rasterize everything drawn so far and source-over it onto `dst` (dirty rows only).
    pub(crate) fn finish_onto(mut self, dst: &mut Surface) -> MockupResult<()> {
        let Some(dirty) = self.dirty else {
            return Ok(());
        };
        if dst.width() != self.width || dst.height() != self.height {
            return Err(MockupError::render("pen and surface dimensions differ"));
        }
        let bounds = PixelBounds::clamp(dirty, self.width, self.height);
        if bounds.is_empty() {
            return Ok(());
        }

        // `vello_cpu` renders into a fresh buffer, so render into a temp pixmap and then
        // premul-over onto the destination.
        let mut pm = vello_cpu::Pixmap::new(self.width as u16, self.height as u16);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pm);
        over_rows_in_place(
            dst.as_bytes_mut(),
            pm.data_as_u8_slice(),
            self.width,
            bounds.y0..bounds.y1,
        )
    }
}

/// PIL arc convention to a kurbo `(start, sweep)` pair in radians.
pub(crate) fn arc_angles(start_deg: f64, end_deg: f64) -> (f64, f64) {
    let mut end = end_deg;
    while end < start_deg {
        end += 360.0;
    }
    let sweep = (end - start_deg).min(360.0);
    (start_deg.to_radians(), sweep.to_radians())
}

fn rect_to_cpu(r: Rect) -> ck::Rect {
    ck::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn polyline_to_cpu(points: &[Point], close: bool) -> ck::BezPath {
    let mut out = ck::BezPath::new();
    for (i, p) in points.iter().enumerate() {
        let p = ck::Point::new(p.x, p.y);
        if i == 0 {
            out.move_to(p);
        } else {
            out.line_to(p);
        }
    }
    if close {
        out.close_path();
    }
    out
}

fn bounds_of(points: &[Point]) -> Rect {
    points
        .iter()
        .fold(Rect::from_points(points[0], points[0]), |acc, p| {
            acc.union_pt(*p)
        })
}

#[cfg(test)]
#[path = "../../tests/unit/raster/pen.rs"]
mod tests;
