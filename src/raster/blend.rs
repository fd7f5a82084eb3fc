use std::ops::Range;

use crate::foundation::error::{MockupError, MockupResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Separable blend modes applied to unpremultiplied channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Overlay,
}

impl BlendMode {
    fn apply(self, s: f32, d: f32) -> f32 {
        match self {
            BlendMode::Normal => s,
            BlendMode::Overlay => {
                if d <= 0.5 {
                    2.0 * s * d
                } else {
                    1.0 - 2.0 * (1.0 - s) * (1.0 - d)
                }
            }
        }
    }
}

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Source-over of `src` onto `dst` for the given rows of a `width`-pixel-wide buffer.
pub(crate) fn over_rows_in_place(
    dst: &mut [u8],
    src: &[u8],
    width: u32,
    rows: Range<u32>,
) -> MockupResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MockupError::render(
            "over_rows_in_place expects equal-length rgba8 buffers",
        ));
    }
    let stride = (width as usize) * 4;
    let start = (rows.start as usize).saturating_mul(stride).min(dst.len());
    let end = (rows.end as usize).saturating_mul(stride).min(dst.len());
    for (d, s) in dst[start..end]
        .chunks_exact_mut(4)
        .zip(src[start..end].chunks_exact(4))
    {
        if s[3] == 0 {
            continue;
        }
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> MockupResult<()> {
    let pixels = (dst.len() / 4) as u32;
    over_rows_in_place(dst, src, pixels.max(1), 0..1)
}

/// Source-over with a separable blend: the result keeps `src` where `dst` is clear and blends
/// where both are present.
pub(crate) fn blend_over_in_place(dst: &mut [u8], src: &[u8], mode: BlendMode) -> MockupResult<()> {
    if mode == BlendMode::Normal {
        return over_in_place(dst, src);
    }
    blend_in_place(dst, src, mode, false)
}

/// Source-atop with a separable blend: `src` only lands where `dst` has coverage and the
/// destination alpha is preserved.
pub(crate) fn blend_atop_in_place(dst: &mut [u8], src: &[u8], mode: BlendMode) -> MockupResult<()> {
    blend_in_place(dst, src, mode, true)
}

fn blend_in_place(dst: &mut [u8], src: &[u8], mode: BlendMode, atop: bool) -> MockupResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MockupError::render(
            "blend_in_place expects equal-length rgba8 buffers",
        ));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 || (atop && d[3] == 0) {
            continue;
        }

        let sa = s[3] as f32 / 255.0;
        let da = d[3] as f32 / 255.0;
        let inv_sa = 1.0 - sa;

        let mut out = [0f32; 4];
        for c in 0..3 {
            let sp = s[c] as f32 / 255.0;
            let dp = d[c] as f32 / 255.0;
            let sc = if sa > 0.0 { (sp / sa).clamp(0.0, 1.0) } else { 0.0 };
            let dc = if da > 0.0 { (dp / da).clamp(0.0, 1.0) } else { 0.0 };
            let b = mode.apply(sc, dc).clamp(0.0, 1.0);
            out[c] = if atop {
                sa * da * ((1.0 - da) * sc + da * b) + dp * inv_sa
            } else {
                sp * (1.0 - da) + dp * inv_sa + b * sa * da
            };
        }
        out[3] = if atop { da } else { sa + da * inv_sa };

        for c in 0..4 {
            d[c] = (out[c].clamp(0.0, 1.0) * 255.0).round() as u8;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blend.rs"]
mod tests;
