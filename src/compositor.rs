//! Turns numeric/time strings into a single HUD bitmap.

use crate::glyph::{Bitmap, Glyph, GLYPH_SIZE};

/// Compose `text` into one `5·n × 5` bitmap, `n` being the number of
/// recognised characters. Unknown characters are skipped and take no space,
/// so `"12s"` and `"12"` produce the same image.
pub fn compose(text: &str, color: u8) -> Bitmap {
    let tiles: Vec<Bitmap> = text
        .chars()
        .filter_map(Glyph::from_char)
        .map(|glyph| {
            let mut tile = glyph.template();
            tile.fill(color);
            tile
        })
        .collect();

    let mut combined = Bitmap::new(tiles.len() * GLYPH_SIZE, GLYPH_SIZE);
    for (i, tile) in tiles.iter().enumerate() {
        combined.blit(i * GLYPH_SIZE, 0, GLYPH_SIZE, GLYPH_SIZE, tile, 0, 0);
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::TRANSPARENT;

    #[test]
    fn width_tracks_recognised_chars() {
        assert_eq!(compose("12:30", 1).width(), 25);
        assert_eq!(compose("12:30", 1).height(), 5);
        assert_eq!(compose("3.5s", 1).width(), 15);
    }

    #[test]
    fn unrecognised_input_is_zero_width() {
        let bmp = compose("ab", 1);
        assert_eq!(bmp.width(), 0);
        assert!(bmp.is_empty());
        assert!(compose("", 7).is_empty());
    }

    #[test]
    fn tiles_are_placed_left_to_right_and_recolored() {
        let bmp = compose("1:", 4);
        // '1' has its top pixel at column 2.
        assert_eq!(bmp.get(2, 0), 4);
        // ':' dots land at columns 6 and 8 of the combined image.
        assert_eq!(bmp.get(6, 1), 4);
        assert_eq!(bmp.get(8, 3), 4);
        assert_eq!(bmp.get(5, 0), TRANSPARENT);
        let expected = Glyph::Digit(1).template().lit_count() + Glyph::Colon.template().lit_count();
        assert_eq!(bmp.lit_count(), expected);
    }

    #[test]
    fn skipped_chars_do_not_leave_gaps() {
        assert_eq!(compose("1x2", 3), compose("12", 3));
    }
}
