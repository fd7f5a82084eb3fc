use crate::foundation::core::Rgba8;
use crate::foundation::error::{MockupError, MockupResult};

const fn hex(v: u32) -> Rgba8 {
    Rgba8::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const fn white(a: u8) -> Rgba8 {
    Rgba8::rgba(255, 255, 255, a)
}

/// Three-stop sky used by photographic backdrops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkyPalette {
    pub top: Rgba8,
    pub mid: Rgba8,
    pub bottom: Rgba8,
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self {
            top: hex(0xB9E6FF),
            mid: hex(0x7FB7D9),
            bottom: hex(0x23374B),
        }
    }
}

/// Every color a component may use. Widgets never hard-code colors; swapping the theme re-skins
/// all screens.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    /// Short identifier used in output file names.
    pub name: String,
    #[serde(default)]
    pub sky: SkyPalette,
    pub background_top: Rgba8,
    pub background_bottom: Rgba8,
    pub panel: Rgba8,
    pub card: Rgba8,
    pub border: Rgba8,
    pub text: Rgba8,
    pub text_muted: Rgba8,
    pub accent: Rgba8,
    pub accent_alt: Rgba8,
    pub accent_text: Rgba8,
    pub sheet_fill: Rgba8,
    pub sheet_border: Rgba8,
    pub sheet_handle: Rgba8,
    pub chip_fill: Rgba8,
    pub chip_border: Rgba8,
    pub field_fill: Rgba8,
    pub field_border: Rgba8,
    pub ghost_border: Rgba8,
    pub nav_fill: Rgba8,
    pub nav_border: Rgba8,
    pub icon: Rgba8,
    pub icon_active: Rgba8,
    pub ring: Rgba8,
    pub scrim: Rgba8,
}

impl Theme {
    /// Light text on translucent dark glass over a photographic sky.
    pub fn glass() -> Self {
        let text = hex(0xF4F7FB);
        let text_muted = hex(0xC7D2DC);
        Self {
            name: "glass".to_owned(),
            sky: SkyPalette::default(),
            background_top: hex(0x23374B),
            background_bottom: Rgba8::rgb(10, 16, 26),
            panel: hex(0x1B2A3A),
            card: hex(0x243649),
            border: hex(0x3A5068),
            text,
            text_muted,
            accent: hex(0x7D5C6B),
            accent_alt: hex(0xB9E6FF),
            accent_text: Rgba8::WHITE,
            sheet_fill: Rgba8::rgba(8, 12, 18, 210),
            sheet_border: white(45),
            sheet_handle: white(70),
            chip_fill: white(26),
            chip_border: white(46),
            field_fill: white(28),
            field_border: white(55),
            ghost_border: white(60),
            nav_fill: Rgba8::rgba(8, 12, 18, 185),
            nav_border: white(35),
            icon: text_muted,
            icon_active: text,
            ring: white(80),
            scrim: Rgba8::rgba(0, 0, 0, 120),
        }
    }

    /// Warm paper tones.
    pub fn light() -> Self {
        let bg = hex(0xEAE6DF);
        let panel = hex(0xF4F1EB);
        let card = hex(0xFEFDFC);
        let border = hex(0xD7CEC3);
        let text = hex(0x542919);
        let text_muted = hex(0x7E6F62);
        Self {
            name: "light".to_owned(),
            sky: SkyPalette::default(),
            background_top: bg,
            background_bottom: bg,
            panel,
            card,
            border,
            text,
            text_muted,
            accent: hex(0x7D5C6B),
            accent_alt: hex(0xA39483),
            accent_text: Rgba8::WHITE,
            sheet_fill: panel.with_alpha(230),
            sheet_border: border,
            sheet_handle: border,
            chip_fill: card,
            chip_border: border,
            field_fill: card,
            field_border: border,
            ghost_border: border,
            nav_fill: panel.with_alpha(240),
            nav_border: border,
            icon: text_muted,
            icon_active: text,
            ring: border,
            scrim: Rgba8::rgba(0, 0, 0, 90),
        }
    }

    /// Slate chiaroscuro with an orange accent.
    pub fn dark() -> Self {
        let bg = hex(0x2C3E50);
        let panel = hex(0x243241);
        let card = hex(0x34495E);
        let border = hex(0x3E566C);
        let text = hex(0xFDF6E3);
        let text_muted = hex(0xB8C1C7);
        Self {
            name: "dark".to_owned(),
            sky: SkyPalette::default(),
            background_top: bg,
            background_bottom: bg,
            panel,
            card,
            border,
            text,
            text_muted,
            accent: hex(0xE67E22),
            accent_alt: hex(0xF1C40F),
            accent_text: Rgba8::WHITE,
            sheet_fill: panel.with_alpha(225),
            sheet_border: border,
            sheet_handle: border,
            chip_fill: card,
            chip_border: border,
            field_fill: card,
            field_border: border,
            ghost_border: border,
            nav_fill: panel.with_alpha(235),
            nav_border: border,
            icon: text_muted,
            icon_active: text,
            ring: border,
            scrim: Rgba8::rgba(0, 0, 0, 120),
        }
    }

    /// Built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "glass" => Some(Self::glass()),
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    pub fn from_json_reader(reader: impl std::io::Read) -> MockupResult<Self> {
        let theme: Self = serde_json::from_reader(reader)
            .map_err(|e| MockupError::validation(format!("invalid theme json: {e}")))?;
        if theme.name.trim().is_empty() {
            return Err(MockupError::validation("theme name must be non-empty"));
        }
        Ok(theme)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::glass()
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;
