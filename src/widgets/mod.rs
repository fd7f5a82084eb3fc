//! Theme-driven widgets drawn straight onto a canvas.
//!
//! [`Ui`] bundles the theme, the font set and a per-render [`TextEngine`], and records where
//! each element landed in a [`LayoutTrace`].

/// Top and bottom chrome: status bar and navigation bar.
pub mod chrome;
/// Buttons, pills, fields, cards and small decorations.
pub mod controls;

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::MockupResult;
use crate::raster::surface::Surface;
use crate::text::{FontRole, FontSet, Shaped, TextEngine, TextExtent};
use crate::theme::Theme;

pub use chrome::NavSlot;
pub use controls::{ButtonStyle, CardTone};

/// What kind of element a [`Placement`] records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Label,
    Paragraph,
    PrimaryButton,
    GhostButton,
    Pill,
    Field,
    Card,
    Sparkline,
    MetaBadge,
    InfinityMark,
    RecordButton,
    StatusBar,
    NavBar,
    Sheet,
    Scrim,
    Panel,
}

/// One placed element.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub kind: ElementKind,
    pub rect: Rect,
    pub label: Option<String>,
}

/// Ordered record of everything a screen placed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutTrace {
    pub placements: Vec<Placement>,
}

impl LayoutTrace {
    pub fn push(&mut self, kind: ElementKind, rect: Rect, label: Option<&str>) {
        self.placements.push(Placement {
            kind,
            rect,
            label: label.map(str::to_owned),
        });
    }

    pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.kind == kind)
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.of_kind(kind).count()
    }

    /// First element carrying `label`.
    pub fn find(&self, label: &str) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.label.as_deref() == Some(label))
    }
}

/// Drawing context for one screen render.
pub struct Ui<'a> {
    pub theme: &'a Theme,
    pub fonts: &'a FontSet,
    text: TextEngine,
    trace: LayoutTrace,
}

impl<'a> Ui<'a> {
    pub fn new(theme: &'a Theme, fonts: &'a FontSet) -> Self {
        Self {
            theme,
            fonts,
            text: TextEngine::new(),
            trace: LayoutTrace::default(),
        }
    }

    pub fn trace(&self) -> &LayoutTrace {
        &self.trace
    }

    pub fn into_trace(self) -> LayoutTrace {
        self.trace
    }

    pub(crate) fn record(&mut self, kind: ElementKind, rect: Rect, label: Option<&str>) {
        self.trace.push(kind, rect, label);
    }

    pub(crate) fn shape(
        &mut self,
        text: &str,
        role: FontRole,
        color: Rgba8,
    ) -> MockupResult<Shaped> {
        self.text.shape(text, self.fonts.face(role), color)
    }

    /// Bounding-box size of one line in `role`.
    pub fn measure(&mut self, text: &str, role: FontRole) -> MockupResult<TextExtent> {
        self.text.extent(text, self.fonts.face(role))
    }

    /// Greedy wrap of `text` in `role` against `max_width`.
    pub fn wrap(
        &mut self,
        text: &str,
        role: FontRole,
        max_width: f64,
    ) -> MockupResult<Vec<String>> {
        self.text.wrap(text, self.fonts.face(role), max_width as f32)
    }

    /// Single line of text with its top-left corner at `origin`.
    pub fn label(
        &mut self,
        canvas: &mut Surface,
        origin: Point,
        text: &str,
        role: FontRole,
        color: Rgba8,
    ) -> MockupResult<TextExtent> {
        let shaped = self.shape(text, role, color)?;
        let extent = shaped.extent();
        canvas.paint(|pen| {
            pen.text(&shaped, origin);
            Ok(())
        })?;
        self.record(
            ElementKind::Label,
            Rect::from_origin_size(origin, (f64::from(extent.width), f64::from(extent.height))),
            Some(text),
        );
        Ok(extent)
    }

    /// Wrapped text, one line every `line_height` pixels from `y`. Returns the y just below the
    /// last line.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph(
        &mut self,
        canvas: &mut Surface,
        x: f64,
        y: f64,
        text: &str,
        role: FontRole,
        color: Rgba8,
        max_width: f64,
        line_height: f64,
    ) -> MockupResult<f64> {
        let lines = self.wrap(text, role, max_width)?;
        let shaped = lines
            .iter()
            .map(|line| self.shape(line, role, color))
            .collect::<MockupResult<Vec<_>>>()?;
        canvas.paint(|pen| {
            for (i, s) in shaped.iter().enumerate() {
                pen.text(s, Point::new(x, y + i as f64 * line_height));
            }
            Ok(())
        })?;
        let end_y = y + lines.len() as f64 * line_height;
        self.record(
            ElementKind::Paragraph,
            Rect::new(x, y, x + max_width, end_y),
            Some(text),
        );
        Ok(end_y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/mod.rs"]
mod tests;
