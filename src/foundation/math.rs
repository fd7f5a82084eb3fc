use std::hash::Hasher;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

/// 64-bit FNV-1a. Integers are fed little-endian so hashes match on every platform.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    /// Start from the standard offset basis mixed with `seed`.
    pub(crate) fn seeded(seed: u64) -> Self {
        Self(FNV_OFFSET ^ seed)
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes.iter().fold(self.0, |h, &b| {
            (h ^ u64::from(b)).wrapping_mul(FNV_PRIME)
        });
    }

    fn write_u32(&mut self, v: u32) {
        self.write(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Stable 64-bit hash of a seed, a per-effect salt and a pixel position.
pub(crate) fn hash_xy(seed: u64, salt: u64, x: u32, y: u32) -> u64 {
    let mut h = Fnv1a64::seeded(seed);
    h.write_u64(salt);
    h.write_u32(x);
    h.write_u32(y);
    // FNV leaves the low bits weakly mixed; fold once.
    let v = h.finish();
    v ^ (v >> 29)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Channel interpolation with truncation toward zero.
pub(crate) fn lerp_u8_trunc(a: u8, b: u8, t: f64) -> u8 {
    let v = f64::from(a) * (1.0 - t) + f64::from(b) * t;
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
