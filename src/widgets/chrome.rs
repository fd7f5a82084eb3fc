use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::MockupResult;
use crate::raster::pen::Pen;
use crate::raster::surface::Surface;
use crate::text::FontRole;
use crate::widgets::{ElementKind, Ui};

pub const NAV_HEIGHT: f64 = 124.0;
const NAV_MARGIN: f64 = 24.0;
const NAV_RADIUS: f64 = 44.0;
const ICON_STROKE: f64 = 3.0;

/// The five fixed navigation destinations, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSlot {
    Home,
    Pin,
    Box,
    Lock,
    Person,
}

impl NavSlot {
    pub const ALL: [NavSlot; 5] = [
        NavSlot::Home,
        NavSlot::Pin,
        NavSlot::Box,
        NavSlot::Lock,
        NavSlot::Person,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            NavSlot::Home => "home",
            NavSlot::Pin => "pin",
            NavSlot::Box => "box",
            NavSlot::Lock => "lock",
            NavSlot::Person => "person",
        }
    }

    /// Outline icon centered on `(x, y)`.
    fn draw_icon(self, pen: &mut Pen, x: f64, y: f64, c: Rgba8) {
        let r = |x0: f64, y0: f64, x1: f64, y1: f64| Rect::new(x0, y0, x1, y1);
        match self {
            NavSlot::Home => {
                pen.polygon(
                    &[
                        Point::new(x - 22.0, y + 10.0),
                        Point::new(x, y - 16.0),
                        Point::new(x + 22.0, y + 10.0),
                    ],
                    None,
                    Some(c),
                    2.0,
                );
                pen.rounded_rect(
                    r(x - 16.0, y + 10.0, x + 16.0, y + 32.0),
                    0.0,
                    None,
                    Some(c),
                    ICON_STROKE,
                );
            }
            NavSlot::Pin => {
                pen.ellipse(r(x - 16.0, y - 16.0, x + 16.0, y + 16.0), None, Some(c), ICON_STROKE);
                pen.polygon(
                    &[
                        Point::new(x, y + 38.0),
                        Point::new(x - 10.0, y + 8.0),
                        Point::new(x + 10.0, y + 8.0),
                    ],
                    None,
                    Some(c),
                    2.0,
                );
                pen.ellipse(r(x - 4.0, y - 4.0, x + 4.0, y + 4.0), Some(c), None, 0.0);
            }
            NavSlot::Box => {
                pen.rounded_rect(
                    r(x - 18.0, y - 8.0, x + 18.0, y + 28.0),
                    6.0,
                    None,
                    Some(c),
                    ICON_STROKE,
                );
                pen.line(
                    &[Point::new(x - 22.0, y - 8.0), Point::new(x + 22.0, y - 8.0)],
                    c,
                    ICON_STROKE,
                );
                pen.line(
                    &[Point::new(x - 6.0, y + 4.0), Point::new(x + 6.0, y + 4.0)],
                    c,
                    ICON_STROKE,
                );
            }
            NavSlot::Lock => {
                pen.rounded_rect(
                    r(x - 18.0, y - 2.0, x + 18.0, y + 28.0),
                    10.0,
                    None,
                    Some(c),
                    ICON_STROKE,
                );
                pen.arc(r(x - 16.0, y - 26.0, x + 16.0, y + 6.0), 200.0, -20.0, c, ICON_STROKE);
                pen.ellipse(r(x - 3.0, y + 10.0, x + 3.0, y + 16.0), Some(c), None, 0.0);
            }
            NavSlot::Person => {
                pen.ellipse(r(x - 14.0, y - 16.0, x + 14.0, y + 12.0), None, Some(c), ICON_STROKE);
                pen.arc(r(x - 22.0, y + 6.0, x + 22.0, y + 46.0), 200.0, -20.0, c, ICON_STROKE);
            }
        }
    }
}

/// Horizontal centers of the five nav slots for a canvas `width` wide.
pub fn nav_slot_centers(width: f64) -> [f64; 5] {
    let span = width - 2.0 * NAV_MARGIN;
    std::array::from_fn(|i| (span * (i as f64 + 0.5) / 5.0).trunc() + NAV_MARGIN)
}

impl Ui<'_> {
    /// Floating tab bar along the bottom edge with `active` highlighted.
    pub fn nav_bar(&mut self, canvas: &mut Surface, active: NavSlot) -> MockupResult<()> {
        let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
        let top = h - NAV_HEIGHT - NAV_MARGIN;
        let rect = Rect::new(NAV_MARGIN, top, w - NAV_MARGIN, h - NAV_MARGIN);
        let theme = self.theme;
        let cy = top + 52.0;

        canvas.paint(|pen| {
            pen.rounded_rect(
                rect,
                NAV_RADIUS,
                Some(theme.nav_fill),
                Some(theme.nav_border),
                2.0,
            );
            for (slot, cx) in NavSlot::ALL.into_iter().zip(nav_slot_centers(w)) {
                let on = slot == active;
                let color = if on { theme.icon_active } else { theme.icon };
                slot.draw_icon(pen, cx, cy, color);
                if on {
                    pen.ellipse(
                        Rect::new(cx - 5.0, cy + 54.0, cx + 5.0, cy + 64.0),
                        Some(theme.accent),
                        None,
                        0.0,
                    );
                }
            }
            Ok(())
        })?;
        self.record(ElementKind::NavBar, rect, Some(active.name()));
        Ok(())
    }

    /// Decorative phone status bar: clock, signal bars, battery and wifi.
    pub fn status_bar(&mut self, canvas: &mut Surface) -> MockupResult<()> {
        let w = f64::from(canvas.width());
        let c = self.theme.text;
        let clock = self.shape("9:41", FontRole::Caption, c)?;

        let bx = w - 180.0;
        let by = 36.0;
        canvas.paint(|pen| {
            pen.text(&clock, Point::new(46.0, 34.0));

            for i in 0..4 {
                let x = bx - 64.0 + f64::from(i) * 12.0;
                let bar_h = 8.0 + f64::from(i) * 4.0;
                pen.fill_rect(Rect::new(x, by + 26.0 - bar_h, x + 7.0, by + 26.0), c);
            }

            pen.rounded_rect(Rect::new(bx, by, bx + 54.0, by + 26.0), 6.0, None, Some(c), 2.0);
            pen.fill_rect(Rect::new(bx + 56.0, by + 7.0, bx + 60.0, by + 19.0), c);
            pen.fill_rect(Rect::new(bx + 5.0, by + 5.0, bx + 40.0, by + 21.0), c);

            pen.arc(Rect::new(w - 108.0, 34.0, w - 56.0, 82.0), 200.0, 340.0, c, 3.0);
            pen.arc(Rect::new(w - 102.0, 40.0, w - 62.0, 80.0), 205.0, 335.0, c, 3.0);
            pen.ellipse(Rect::new(w - 82.0, 62.0, w - 76.0, 68.0), Some(c), None, 0.0);
            Ok(())
        })?;
        self.record(
            ElementKind::StatusBar,
            Rect::new(0.0, 0.0, w, 90.0),
            None,
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/chrome.rs"]
mod tests;
