use std::f64::consts::PI;

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::MockupResult;
use crate::raster::surface::Surface;
use crate::text::FontRole;
use crate::widgets::{ElementKind, Ui};

pub const BUTTON_RADIUS: f64 = 28.0;
pub const PILL_PAD_X: f64 = 18.0;
pub const PILL_PAD_Y: f64 = 12.0;
pub const CHIP_GAP: f64 = 14.0;
pub const FIELD_HEIGHT: f64 = 96.0;
pub const RECORD_DOT_RADIUS: f64 = 32.0;
const FIELD_RADIUS: f64 = 26.0;
const STROKE: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Solid accent fill.
    #[default]
    Primary,
    /// Outline only.
    Ghost,
}

/// Which theme surface color a card uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardTone {
    #[default]
    Card,
    Panel,
}

impl Ui<'_> {
    /// Rounded button with its label centered on the measured text box.
    pub fn button(
        &mut self,
        canvas: &mut Surface,
        rect: Rect,
        label: &str,
        style: ButtonStyle,
    ) -> MockupResult<()> {
        let theme = self.theme;
        let (fill, outline, text_color, kind) = match style {
            ButtonStyle::Primary => (
                Some(theme.accent),
                None,
                theme.accent_text,
                ElementKind::PrimaryButton,
            ),
            ButtonStyle::Ghost => (
                None,
                Some(theme.ghost_border),
                theme.text,
                ElementKind::GhostButton,
            ),
        };
        let shaped = self.shape(label, FontRole::Body, text_color)?;
        let (tw, th) = (f64::from(shaped.width()), f64::from(shaped.height()));
        let origin = Point::new(
            ((rect.x0 + rect.x1 - tw) / 2.0).floor(),
            ((rect.y0 + rect.y1 - th) / 2.0).floor() - 2.0,
        );
        canvas.paint(|pen| {
            pen.rounded_rect(rect, BUTTON_RADIUS, fill, outline, STROKE);
            pen.text(&shaped, origin);
            Ok(())
        })?;
        self.record(kind, rect, Some(label));
        Ok(())
    }

    /// Auto-sized capsule around `label`. Returns its width.
    pub fn pill(&mut self, canvas: &mut Surface, origin: Point, label: &str) -> MockupResult<f64> {
        let shaped = self.shape(label, FontRole::BodySmall, self.theme.text)?;
        let w = f64::from(shaped.width()) + PILL_PAD_X * 2.0;
        let h = f64::from(shaped.height()) + PILL_PAD_Y * 2.0;
        let rect = Rect::from_origin_size(origin, (w, h));
        let (fill, border) = (self.theme.chip_fill, self.theme.chip_border);
        canvas.paint(|pen| {
            pen.rounded_rect(rect, f64::MAX, Some(fill), Some(border), STROKE);
            pen.text(
                &shaped,
                Point::new(origin.x + PILL_PAD_X, origin.y + PILL_PAD_Y - 1.0),
            );
            Ok(())
        })?;
        self.record(ElementKind::Pill, rect, Some(label));
        Ok(w)
    }

    /// Left-to-right run of pills with a fixed gap. Returns the x just past the last gap.
    pub fn chip_row(
        &mut self,
        canvas: &mut Surface,
        origin: Point,
        labels: &[&str],
    ) -> MockupResult<f64> {
        let mut x = origin.x;
        for label in labels {
            x += self.pill(canvas, Point::new(x, origin.y), label)? + CHIP_GAP;
        }
        Ok(x)
    }

    /// Unfocused input: translucent box with a muted placeholder.
    pub fn field(&mut self, canvas: &mut Surface, rect: Rect, label: &str) -> MockupResult<()> {
        let shaped = self.shape(label, FontRole::BodySmall, self.theme.text_muted)?;
        let (fill, border) = (self.theme.field_fill, self.theme.field_border);
        canvas.paint(|pen| {
            pen.rounded_rect(rect, FIELD_RADIUS, Some(fill), Some(border), STROKE);
            pen.text(&shaped, Point::new(rect.x0 + 28.0, rect.y0 + 30.0));
            Ok(())
        })?;
        self.record(ElementKind::Field, rect, Some(label));
        Ok(())
    }

    /// Bordered panel.
    pub fn card(
        &mut self,
        canvas: &mut Surface,
        rect: Rect,
        radius: f64,
        tone: CardTone,
    ) -> MockupResult<()> {
        let fill = match tone {
            CardTone::Card => self.theme.card,
            CardTone::Panel => self.theme.panel,
        };
        let border = self.theme.border;
        canvas.paint(|pen| {
            pen.rounded_rect(rect, radius, Some(fill), Some(border), STROKE);
            Ok(())
        })?;
        self.record(ElementKind::Card, rect, None);
        Ok(())
    }

    /// Ten-point wavy trend line across `rect`.
    pub fn sparkline(&mut self, canvas: &mut Surface, rect: Rect) -> MockupResult<()> {
        let points: Vec<Point> = (0..10)
            .map(|i| {
                let t = f64::from(i) / 9.0;
                let y = rect.y0
                    + rect.height()
                        * (0.55 + 0.25 * (t * PI * 2.3).sin() + 0.08 * (t * PI * 7.1).sin());
                Point::new((rect.x0 + rect.width() * t).trunc(), y.trunc())
            })
            .collect();
        let color = self.theme.accent_alt;
        canvas.paint(|pen| {
            pen.line(&points, color, 4.0);
            Ok(())
        })?;
        self.record(ElementKind::Sparkline, rect, None);
        Ok(())
    }

    /// Lemniscate-like mark `size` wide: two open arcs joined by a crossbar, in the accent
    /// color. Loops are `0.6 * size` tall.
    pub fn infinity_mark(
        &mut self,
        canvas: &mut Surface,
        center: Point,
        size: f64,
    ) -> MockupResult<()> {
        let (half_w, loop_d) = ((size / 2.0).trunc(), (size * 0.6).trunc());
        let r = (loop_d / 2.0).trunc();
        let (top, bottom) = (center.y - r, center.y + r);
        let left = Rect::new(center.x - half_w, top, center.x - half_w + loop_d, bottom);
        let right = Rect::new(center.x + half_w - loop_d, top, center.x + half_w, bottom);
        let stroke = (size / 30.0).max(1.0);
        let color = self.theme.accent;
        canvas.paint(|pen| {
            pen.arc(left, 40.0, 320.0, color, stroke);
            pen.arc(right, 220.0, 140.0, color, stroke);
            pen.line(
                &[Point::new(center.x - r, center.y), Point::new(center.x + r, center.y)],
                color,
                stroke,
            );
            Ok(())
        })?;
        self.record(ElementKind::InfinityMark, left.union(right), None);
        Ok(())
    }

    /// Round accent button with a white dot in the middle.
    pub fn record_button(
        &mut self,
        canvas: &mut Surface,
        center: Point,
        radius: f64,
    ) -> MockupResult<()> {
        let ring = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        let dot = ring.inset(RECORD_DOT_RADIUS - radius);
        let (fill, border) = (self.theme.accent, self.theme.border);
        canvas.paint(|pen| {
            pen.ellipse(ring, Some(fill), Some(border), STROKE);
            pen.ellipse(dot, Some(Rgba8::WHITE), None, 0.0);
            Ok(())
        })?;
        self.record(ElementKind::RecordButton, ring, None);
        Ok(())
    }

    /// Small ring followed by a caption, used for status hints such as "Local".
    pub fn meta_badge(
        &mut self,
        canvas: &mut Surface,
        ring: Rect,
        label: &str,
    ) -> MockupResult<()> {
        let shaped = self.shape(label, FontRole::Caption, self.theme.text)?;
        let color = self.theme.ring;
        let text_at = Point::new(ring.x1 + 10.0, ring.y0 + 4.0);
        canvas.paint(|pen| {
            pen.ellipse(ring, None, Some(color), STROKE);
            pen.text(&shaped, text_at);
            Ok(())
        })?;
        let rect = ring.union(Rect::from_origin_size(
            text_at,
            (f64::from(shaped.width()), f64::from(shaped.height())),
        ));
        self.record(ElementKind::MetaBadge, rect, Some(label));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/controls.rs"]
mod tests;
