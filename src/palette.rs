//! 16-colour indexed palette used by HUD bitmaps.
//!
//! Index 0 is transparent. Indices above 15 wrap into the table.

use crate::glyph::{Bitmap, TRANSPARENT};

pub const PALETTE_SIZE: usize = 16;

/// sRGB entries, arcade-console defaults.
const ARCADE: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00], // transparent
    [0xff, 0xff, 0xff], // white
    [0xff, 0x21, 0x21], // red
    [0xff, 0x93, 0xc4], // pink
    [0xff, 0x81, 0x35], // orange
    [0xff, 0xf6, 0x09], // yellow
    [0x24, 0x9c, 0xa3], // teal
    [0x78, 0xdc, 0x52], // green
    [0x00, 0x3f, 0xad], // blue
    [0x87, 0xf2, 0xff], // light blue
    [0x8e, 0x2e, 0xc4], // purple
    [0xa4, 0x83, 0x9f], // light purple
    [0x5c, 0x40, 0x6c], // dark purple
    [0xe5, 0xcd, 0xc4], // tan
    [0x91, 0x46, 0x3d], // brown
    [0x00, 0x00, 0x00], // black
];

/// RGBA for a palette index.
pub fn rgba(index: u8) -> [u8; 4] {
    let slot = index as usize % PALETTE_SIZE;
    if slot == TRANSPARENT as usize {
        return [0, 0, 0, 0];
    }
    let [r, g, b] = ARCADE[slot];
    [r, g, b, 255]
}

/// Expand a bitmap into tightly packed sRGB RGBA8 bytes.
pub fn to_rgba8(bitmap: &Bitmap) -> Vec<u8> {
    bitmap.pixels().iter().flat_map(|px| rgba(*px)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::compose;

    #[test]
    fn transparent_and_opaque_entries() {
        assert_eq!(rgba(0), [0, 0, 0, 0]);
        assert_eq!(rgba(1), [255, 255, 255, 255]);
        assert_eq!(rgba(15), [0, 0, 0, 255]);
        assert_eq!(rgba(18), rgba(2));
    }

    #[test]
    fn rgba_buffer_matches_bitmap_size() {
        let bmp = compose("10", 2);
        let bytes = to_rgba8(&bmp);
        assert_eq!(bytes.len(), bmp.width() * bmp.height() * 4);
        // top row of '1' is lit at column 2
        assert_eq!(&bytes[2 * 4..3 * 4], &[0xff, 0x21, 0x21, 0xff]);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 0]);
    }
}
