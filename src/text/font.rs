use std::collections::BTreeMap;
use std::hash::Hasher as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{FontLoadError, MockupError, MockupResult};
use crate::foundation::math::Fnv1a64;

/// Semantic text styles used by every screen.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    Display,
    Title,
    Heading,
    Lead,
    Body,
    BodySmall,
    Caption,
    Overline,
}

impl FontRole {
    pub const ALL: [FontRole; 8] = [
        FontRole::Display,
        FontRole::Title,
        FontRole::Heading,
        FontRole::Lead,
        FontRole::Body,
        FontRole::BodySmall,
        FontRole::Caption,
        FontRole::Overline,
    ];

    /// Pixel size used when a manifest entry does not override it.
    pub fn default_size_px(self) -> f32 {
        match self {
            FontRole::Display => 62.0,
            FontRole::Title => 48.0,
            FontRole::Heading => 38.0,
            FontRole::Lead => 32.0,
            FontRole::Body => 28.0,
            FontRole::BodySmall => 24.0,
            FontRole::Caption => 20.0,
            FontRole::Overline => 18.0,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// A typeface at a fixed pixel size.
#[derive(Clone)]
pub enum FontFace {
    /// Outline font bytes (TTF/OTF/TTC) shaped with parley.
    Outline {
        /// Stable identity of (file, face index), used to cache registrations.
        id: u64,
        bytes: Arc<Vec<u8>>,
        index: u32,
        size_px: f32,
    },
    /// Bitmap face compiled into the crate; always available.
    Builtin { size_px: f32 },
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontFace::Outline {
                id, index, size_px, ..
            } => f
                .debug_struct("Outline")
                .field("id", &format_args!("{id:#018x}"))
                .field("index", index)
                .field("size_px", size_px)
                .finish_non_exhaustive(),
            FontFace::Builtin { size_px } => {
                f.debug_struct("Builtin").field("size_px", size_px).finish()
            }
        }
    }
}

impl FontFace {
    pub fn size_px(&self) -> f32 {
        match self {
            FontFace::Outline { size_px, .. } | FontFace::Builtin { size_px } => *size_px,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontFace::Builtin { .. })
    }
}

/// Load face `index` of the font file at `path` at `size_px`.
pub fn load_face(
    path: impl AsRef<Path>,
    size_px: f32,
    index: u32,
) -> Result<FontFace, FontLoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FontLoadError::Missing {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut ctx = parley::FontContext::default();
    let families = ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
    let has_index = families
        .iter()
        .flat_map(|(_, fonts)| fonts)
        .any(|font| font.index() == index);
    if !has_index {
        // Either nothing parsed or the collection has fewer faces than `index`.
        return Err(FontLoadError::Unparsable {
            path: path.to_path_buf(),
        });
    }

    let mut h = Fnv1a64::default();
    h.write(path.as_os_str().as_encoded_bytes());
    h.write_u32(index);
    h.write_u64(bytes.len() as u64);

    Ok(FontFace::Outline {
        id: h.finish(),
        bytes: Arc::new(bytes),
        index,
        size_px,
    })
}

/// One manifest entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_px: Option<f32>,
    #[serde(default)]
    pub index: u32,
}

/// Where each [`FontRole`] comes from.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FontManifest {
    pub roles: BTreeMap<FontRole, FontSpec>,
}

impl FontManifest {
    /// Stock macOS faces: Avenir Next for headings, SF for body and captions.
    pub fn system_default() -> Self {
        let avenir = PathBuf::from("/System/Library/Fonts/Avenir Next.ttc");
        let sf = PathBuf::from("/System/Library/Fonts/SFNS.ttf");
        let sf_compact = PathBuf::from("/System/Library/Fonts/SFCompact.ttf");
        let spec = |path: &PathBuf| FontSpec {
            path: path.clone(),
            size_px: None,
            index: 0,
        };

        let mut roles = BTreeMap::new();
        roles.insert(FontRole::Display, spec(&avenir));
        roles.insert(FontRole::Title, spec(&avenir));
        roles.insert(FontRole::Heading, spec(&avenir));
        roles.insert(FontRole::Lead, spec(&sf_compact));
        roles.insert(FontRole::Body, spec(&sf_compact));
        roles.insert(FontRole::BodySmall, spec(&sf));
        roles.insert(FontRole::Caption, spec(&sf));
        roles.insert(FontRole::Overline, spec(&sf));
        Self { roles }
    }

    pub fn from_json_reader(reader: impl std::io::Read) -> MockupResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| MockupError::validation(format!("invalid font manifest: {e}")))
    }
}

/// Faces for every role, loaded once and shared read-only across renders.
#[derive(Clone, Debug)]
pub struct FontSet {
    faces: [FontFace; 8],
}

impl FontSet {
    /// Built-in bitmap face for every role.
    pub fn builtin() -> Self {
        Self {
            faces: FontRole::ALL.map(|r| FontFace::Builtin {
                size_px: r.default_size_px(),
            }),
        }
    }

    /// Load every manifest entry, substituting the built-in face for any that fail.
    pub fn load(manifest: &FontManifest) -> Self {
        let mut out = Self::builtin();
        for (role, spec) in &manifest.roles {
            let size = spec.size_px.unwrap_or_else(|| role.default_size_px());
            match load_face(&spec.path, size, spec.index) {
                Ok(face) => out.faces[role.slot()] = face,
                Err(err) => {
                    tracing::warn!(role = ?role, error = %err, "using built-in font face");
                    out.faces[role.slot()] = FontFace::Builtin { size_px: size };
                }
            }
        }
        out
    }

    pub fn face(&self, role: FontRole) -> &FontFace {
        &self.faces[role.slot()]
    }

    pub fn with_face(mut self, role: FontRole, face: FontFace) -> Self {
        self.faces[role.slot()] = face;
        self
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
