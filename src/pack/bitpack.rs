//! Continuous bit packing of monochrome glyph rasters.
//!
//! FreeType mono rasters pad every row out to `pitch_bytes`. The compiled
//! format does not: pixels are appended to one continuous MSB-first
//! bitstream, so a row may end mid-byte and the next row continues in the
//! same byte. Only the final byte is padded, with zeros in its unused
//! low-order bits. The runtime's draw loop consumes bits in exactly this
//! order.

use crate::rasterize::RawGlyphBitmap;

/// Repack a row-padded raster into the continuous bitstream.
///
/// The output is always `ceil(width*height/8)` bytes, and empty when either
/// dimension is zero. A computed source byte index outside `pixel_data`
/// reads as an off pixel, so malformed pitch/size combinations degrade
/// instead of panicking.
pub fn pack(raster: &RawGlyphBitmap) -> Vec<u8> {
    let width = raster.width_px as usize;
    let height = raster.height_px as usize;
    let pitch = raster.pitch_bytes as usize;

    let mut packed = Vec::with_capacity((width * height).div_ceil(8));
    let mut accumulator: u8 = 0;
    // Next output bit to fill, MSB-first.
    let mut bit: u8 = 7;

    for y in 0..height {
        let row_start = y * pitch;
        for x in 0..width {
            let on = raster
                .pixel_data
                .get(row_start + x / 8)
                .is_some_and(|byte| byte & (1 << (7 - (x % 8))) != 0);
            if on {
                accumulator |= 1 << bit;
            }
            if bit == 0 {
                packed.push(accumulator);
                accumulator = 0;
                bit = 7;
            } else {
                bit -= 1;
            }
        }
    }
    if bit != 7 {
        packed.push(accumulator);
    }
    packed
}
