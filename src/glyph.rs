//! Indexed-colour bitmaps and the constant 5×5 glyph table used by the HUD.
//!
//! Pixels are palette indices; `0` is transparent/background and anything
//! else is a set (foreground) pixel.

/// Side length of every glyph tile, in pixels.
pub const GLYPH_SIZE: usize = 5;

/// Palette index used for unset pixels.
pub const TRANSPARENT: u8 = 0;

/// Fixed-size raster of palette indices, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a fully transparent bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize { self.width }
    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// `true` when the bitmap has no pixels at all (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(x, y)`, or transparent when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return TRANSPARENT;
        }
        self.pixels[y * self.width + x]
    }

    /// Set pixel safely; out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = value;
    }

    /// Recolor every set pixel to `color`. Transparent pixels stay transparent.
    pub fn fill(&mut self, color: u8) {
        for px in self.pixels.iter_mut().filter(|px| **px != TRANSPARENT) {
            *px = color;
        }
    }

    /// Copy a `w × h` region of `src` starting at `(src_x, src_y)` onto this
    /// bitmap at `(dst_x, dst_y)`. Parts falling outside either bitmap are clipped.
    pub fn blit(
        &mut self,
        dst_x: usize,
        dst_y: usize,
        w: usize,
        h: usize,
        src: &Bitmap,
        src_x: usize,
        src_y: usize,
    ) {
        for dy in 0..h {
            let (Some(sy), Some(ty)) = (src_y.checked_add(dy), dst_y.checked_add(dy)) else {
                break;
            };
            if sy >= src.height || ty >= self.height {
                break;
            }
            for dx in 0..w {
                let (Some(sx), Some(tx)) = (src_x.checked_add(dx), dst_x.checked_add(dx)) else {
                    break;
                };
                if sx >= src.width || tx >= self.width {
                    break;
                }
                self.pixels[ty * self.width + tx] = src.pixels[sy * src.width + sx];
            }
        }
    }

    /// Number of set pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|px| **px != TRANSPARENT).count()
    }

    /// Raw row-major palette indices.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Symbols the HUD can draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Digit(u8),
    Colon,
    Dot,
}

impl Glyph {
    /// Map a character to its glyph; `None` for anything the table lacks.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Glyph::digit(c as u8 - b'0'),
            ':' => Some(Glyph::Colon),
            '.' => Some(Glyph::Dot),
            _ => None,
        }
    }

    /// Digit glyph for `0..=9`, `None` otherwise.
    pub fn digit(d: u8) -> Option<Self> {
        (d < 10).then_some(Glyph::Digit(d))
    }

    /// Table row, `None` for a hand-built out-of-range digit.
    fn index(self) -> Option<usize> {
        match self {
            Glyph::Digit(d) if d < 10 => Some(d as usize),
            Glyph::Digit(_) => None,
            Glyph::Colon => Some(10),
            Glyph::Dot => Some(11),
        }
    }

    /// Fresh copy of the glyph's template, set pixels at palette index 1.
    /// An out-of-range `Digit` yields a blank tile.
    pub fn template(self) -> Bitmap {
        GlyphSet::template(self)
    }
}

type GlyphRows = [&'static [u8; GLYPH_SIZE]; GLYPH_SIZE];

/// Immutable glyph table. `#` marks a set pixel.
pub struct GlyphSet;

impl GlyphSet {
    const TABLE: [GlyphRows; 12] = [
        [b".###.", b"#...#", b"#...#", b"#...#", b".###."], // 0
        [b"..#..", b".##..", b"..#..", b"..#..", b".###."], // 1
        [b"####.", b"...#.", b".###.", b"#....", b"####."], // 2
        [b"####.", b"...#.", b".###.", b"...#.", b"####."], // 3
        [b"#..#.", b"#..#.", b"####.", b"...#.", b"...#."], // 4
        [b"####.", b"#....", b"###..", b"...#.", b"###.."], // 5
        [b".###.", b"#....", b"###..", b"#..#.", b".##.."], // 6
        [b"####.", b"...#.", b"..#..", b".#...", b".#..."], // 7
        [b".##..", b"#..#.", b".##..", b"#..#.", b".##.."], // 8
        [b".##..", b"#..#.", b".###.", b"...#.", b"###.."], // 9
        [b".....", b".#.#.", b".....", b".#.#.", b"....."], // :
        [b".....", b".....", b".....", b".....", b".##.."], // .
    ];

    /// Clone the template for `glyph` into a new bitmap.
    pub fn template(glyph: Glyph) -> Bitmap {
        let mut bmp = Bitmap::new(GLYPH_SIZE, GLYPH_SIZE);
        let Some(rows) = glyph.index().map(|i| &Self::TABLE[i]) else {
            return bmp;
        };
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell == b'#' {
                    bmp.set(x, y, 1);
                }
            }
        }
        bmp
    }
}
