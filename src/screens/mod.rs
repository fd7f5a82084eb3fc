//! Screen composition.
//!
//! Every [`Screen`] is a fixed sequence of widget calls against a theme and a font set: backdrop,
//! status bar, header block, optional glass sheet, sheet content, optional navigation. The result
//! is a [`Composed`] canvas plus the [`LayoutTrace`] of what was placed where.

/// Rendering many screens at once, optionally on a rayon pool.
pub mod batch;
mod flat;
mod photo;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::foundation::core::FrameSize;
use crate::foundation::error::{MockupError, MockupResult};
use crate::raster::surface::Surface;
use crate::text::FontSet;
use crate::theme::Theme;
use crate::widgets::LayoutTrace;

pub use batch::{BatchJob, BatchOpts, Rendered, render_batch};

/// Left and right content margin shared by the photographic screens.
pub const MARGIN: f64 = 56.0;

/// The closed set of screens glassmock knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Screen {
    Onboarding,
    Login,
    Dashboard,
    Session,
    Contract,
    /// Side menu drawn over a finished [`Screen::Session`].
    Menu,
    /// Voice recorder with a timer card and a record button.
    Mirror,
    /// Evidence, pattern and story cards with two route buttons.
    Case,
}

/// A composed screen: the canvas before flattening and the element placements.
#[derive(Clone, Debug)]
pub struct Composed {
    pub surface: Surface,
    pub trace: LayoutTrace,
}

impl Composed {
    pub fn into_image(self) -> image::RgbImage {
        self.surface.flatten()
    }
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::Onboarding,
        Screen::Login,
        Screen::Dashboard,
        Screen::Session,
        Screen::Contract,
        Screen::Menu,
        Screen::Mirror,
        Screen::Case,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Onboarding => "onboarding",
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
            Screen::Session => "session",
            Screen::Contract => "contract",
            Screen::Menu => "menu",
            Screen::Mirror => "mirror",
            Screen::Case => "case",
        }
    }

    /// Seed used by [`Screen::render`]. Flat screens ignore it.
    pub fn default_seed(self) -> u64 {
        match self {
            Screen::Onboarding => 11,
            Screen::Login => 12,
            Screen::Dashboard => 13,
            _ => 0,
        }
    }

    /// Whether the screen sits on a procedural photo backdrop.
    pub fn is_photographic(self) -> bool {
        matches!(self, Screen::Onboarding | Screen::Login | Screen::Dashboard)
    }

    /// Draw the screen at `size` without flattening it.
    #[tracing::instrument(level = "debug", skip(theme, fonts), fields(screen = self.name()))]
    pub fn compose(
        self,
        size: FrameSize,
        seed: u64,
        theme: &Theme,
        fonts: &FontSet,
    ) -> MockupResult<Composed> {
        let composed = match self {
            Screen::Onboarding => photo::onboarding(size, seed, theme, fonts)?,
            Screen::Login => photo::login(size, seed, theme, fonts)?,
            Screen::Dashboard => photo::dashboard(size, seed, theme, fonts)?,
            Screen::Session => flat::session(size, theme, fonts)?,
            Screen::Contract => flat::contract(size, theme, fonts)?,
            Screen::Menu => flat::menu(size, theme, fonts)?,
            Screen::Mirror => flat::mirror(size, theme, fonts)?,
            Screen::Case => flat::case(size, theme, fonts)?,
        };
        debug!(placements = composed.trace.placements.len(), "screen composed");
        Ok(composed)
    }

    /// Flattened RGB output using [`Screen::default_seed`].
    pub fn render(
        self,
        size: FrameSize,
        theme: &Theme,
        fonts: &FontSet,
    ) -> MockupResult<image::RgbImage> {
        self.render_seeded(size, self.default_seed(), theme, fonts)
    }

    pub fn render_seeded(
        self,
        size: FrameSize,
        seed: u64,
        theme: &Theme,
        fonts: &FontSet,
    ) -> MockupResult<image::RgbImage> {
        Ok(self.compose(size, seed, theme, fonts)?.into_image())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = MockupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = Screen::ALL.iter().map(|s| s.name()).collect();
                MockupError::validation(format!(
                    "unknown screen '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screens/mod.rs"]
mod tests;
