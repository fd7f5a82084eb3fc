use crate::foundation::error::{MockupError, MockupResult};

/// Below this sigma the exact Gaussian kernel is cheap enough; above it a three-box cascade
/// approximates it in constant time per pixel.
const EXACT_KERNEL_MAX_SIGMA: f32 = 2.0;

/// Gaussian blur of an interleaved 8-bit buffer with `channels` samples per pixel.
///
/// Works on premultiplied RGBA8 as well as single-channel masks. Edges are clamped, the
/// arithmetic is integer-only after kernel construction, so output is bit-stable.
pub(crate) fn blur_channels(
    src: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    sigma: f32,
) -> MockupResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| MockupError::render("blur buffer size overflow"))?;
    if channels == 0 || src.len() != expected_len {
        return Err(MockupError::render(
            "blur_channels expects src matching width*height*channels",
        ));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(MockupError::validation("blur sigma must be finite and >= 0"));
    }
    if sigma < 0.1 || width == 0 || height == 0 {
        return Ok(src.to_vec());
    }

    let geom = Geometry {
        width: width as usize,
        height: height as usize,
        channels,
    };
    let mut a = src.to_vec();
    let mut b = vec![0u8; expected_len];

    if sigma < EXACT_KERNEL_MAX_SIGMA {
        let taps = Taps::gaussian(sigma);
        geom.each_line(&a, &mut b, |s, d, line| taps.line(s, d, line));
        geom.each_column(&b, &mut a, |s, d, line| taps.line(s, d, line));
        return Ok(a);
    }

    for size in box_sizes_for_gauss(sigma, 3) {
        let r = (size - 1) / 2;
        geom.each_line(&a, &mut b, |s, d, line| box_line(s, d, line, r));
        geom.each_column(&b, &mut a, |s, d, line| box_line(s, d, line, r));
    }
    Ok(a)
}

/// A strided walk over one row or column of an interleaved buffer.
#[derive(Clone, Copy)]
struct Line {
    start: usize,
    step: usize,
    len: usize,
    channels: usize,
}

impl Line {
    #[inline]
    fn at(self, i: isize, c: usize) -> usize {
        let i = i.clamp(0, self.len as isize - 1) as usize;
        (self.start + i * self.step) * self.channels + c
    }
}

#[derive(Clone, Copy)]
struct Geometry {
    width: usize,
    height: usize,
    channels: usize,
}

impl Geometry {
    fn each_line(self, src: &[u8], dst: &mut [u8], mut f: impl FnMut(&[u8], &mut [u8], Line)) {
        for y in 0..self.height {
            let line = Line {
                start: y * self.width,
                step: 1,
                len: self.width,
                channels: self.channels,
            };
            f(src, dst, line);
        }
    }

    fn each_column(self, src: &[u8], dst: &mut [u8], mut f: impl FnMut(&[u8], &mut [u8], Line)) {
        for x in 0..self.width {
            let line = Line {
                start: x,
                step: self.width,
                len: self.height,
                channels: self.channels,
            };
            f(src, dst, line);
        }
    }
}

/// Symmetric Gaussian taps in Q16 fixed point, summing to exactly `1 << 16`.
struct Taps {
    weights: Vec<u32>,
}

impl Taps {
    const ONE: u64 = 1 << 16;

    /// `sigma` has already been checked by [`blur_channels`] to be finite and at least 0.1.
    fn gaussian(sigma: f32) -> Self {
        let radius = (sigma * 3.0).ceil() as i32;
        let two_s2 = 2.0 * f64::from(sigma).powi(2);
        let raw: Vec<f64> = (-radius..=radius)
            .map(|i| (-f64::from(i * i) / two_s2).exp())
            .collect();
        let total: f64 = raw.iter().sum();

        let mut weights: Vec<u32> = raw
            .iter()
            .map(|w| (w / total * Self::ONE as f64).round() as u32)
            .collect();
        // Rounding drift goes to the center tap so flat regions stay flat.
        let drift = Self::ONE as i64 - weights.iter().map(|&w| i64::from(w)).sum::<i64>();
        let mid = radius as usize;
        weights[mid] = (i64::from(weights[mid]) + drift).max(0) as u32;
        Self { weights }
    }

    fn radius(&self) -> isize {
        (self.weights.len() / 2) as isize
    }

    fn line(&self, src: &[u8], dst: &mut [u8], line: Line) {
        let r = self.radius();
        for i in 0..line.len as isize {
            for c in 0..line.channels {
                let acc: u64 = self
                    .weights
                    .iter()
                    .zip(i - r..)
                    .map(|(&w, si)| u64::from(w) * u64::from(src[line.at(si, c)]))
                    .sum();
                dst[line.at(i, c)] = ((acc + Self::ONE / 2) >> 16).min(255) as u8;
            }
        }
    }
}

/// Odd box widths whose repeated application approximates a Gaussian of `sigma`.
fn box_sizes_for_gauss(sigma: f32, n: usize) -> Vec<usize> {
    let sigma = f64::from(sigma);
    let nf = n as f64;
    let w_ideal = (12.0 * sigma * sigma / nf + 1.0).sqrt();
    let mut wl = w_ideal.floor() as i64;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wu = wl + 2;
    let wlf = wl as f64;
    let m_ideal = (12.0 * sigma * sigma - nf * wlf * wlf - 4.0 * nf * wlf - 3.0 * nf)
        / (-4.0 * wlf - 4.0);
    let m = m_ideal.round().max(0.0) as usize;
    (0..n)
        .map(|i| if i < m { wl as usize } else { wu as usize })
        .collect()
}

fn box_line(src: &[u8], dst: &mut [u8], line: Line, r: usize) {
    let r = r as isize;
    let size = (2 * r + 1) as u32;
    let half = size / 2;
    for c in 0..line.channels {
        let mut acc: u32 = (-r..=r).map(|i| u32::from(src[line.at(i, c)])).sum();
        for i in 0..line.len as isize {
            dst[line.at(i, c)] = ((acc + half) / size).min(255) as u8;
            acc += u32::from(src[line.at(i + r + 1, c)]);
            acc -= u32::from(src[line.at(i - r, c)]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
