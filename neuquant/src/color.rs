/// Packs 8-bit channels as `0xRRGGBB`.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Splits a packed pixel into real-valued channels. Bits above 24 are ignored.
#[inline]
pub fn unpack_rgb(p: u32) -> [f64; 3] {
    let r = (p >> 16) & 0xFF;
    let g = (p >> 8) & 0xFF;
    let b = p & 0xFF;
    [r as f64, g as f64, b as f64]
}

/// Rounds half up and clamps to a channel value.
#[inline]
pub fn round_channel(x: f64) -> u8 {
    (x + 0.5).floor().clamp(0.0, 255.0) as u8
}
