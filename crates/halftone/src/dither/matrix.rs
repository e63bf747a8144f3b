//! Ordered dithering threshold matrices.

/// A square threshold matrix tiled across the image.
///
/// Cells hold ranks in `[0, N² - 1]`. The threshold at a pixel is
/// `cell * 255 / N²` with integer division, looked up at
/// `(y mod N, x mod N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdMatrix {
    /// Canonical registry name.
    pub name: &'static str,
    /// Side length N.
    pub size: usize,
    /// Row-major cells, `size * size` long.
    pub cells: &'static [u8],
}

impl ThresholdMatrix {
    /// Rank stored at the tile position of `(x, y)`.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> u8 {
        let n = self.size;
        self.cells[(y as usize % n) * n + (x as usize % n)]
    }

    /// Threshold level (0-255) at `(x, y)`.
    #[inline]
    pub fn threshold(&self, x: u32, y: u32) -> u8 {
        let levels = (self.size * self.size) as u32;
        (u32::from(self.cell(x, y)) * 255 / levels) as u8
    }
}

/// 2x2 Bayer matrix.
#[rustfmt::skip]
pub const BAYER_2X2: ThresholdMatrix = ThresholdMatrix {
    name: "bayer-2x2",
    size: 2,
    cells: &[
        0, 2,
        3, 1,
    ],
};

/// 4x4 Bayer matrix.
#[rustfmt::skip]
pub const BAYER_4X4: ThresholdMatrix = ThresholdMatrix {
    name: "bayer-4x4",
    size: 4,
    cells: &[
         0,  8,  2, 10,
        12,  4, 14,  6,
         3, 11,  1,  9,
        15,  7, 13,  5,
    ],
};

/// 8x8 Bayer matrix.
#[rustfmt::skip]
pub const BAYER_8X8: ThresholdMatrix = ThresholdMatrix {
    name: "bayer-8x8",
    size: 8,
    cells: &[
         0, 32,  8, 40,  2, 34, 10, 42,
        48, 16, 56, 24, 50, 18, 58, 26,
        12, 44,  4, 36, 14, 46,  6, 38,
        60, 28, 52, 20, 62, 30, 54, 22,
         3, 35, 11, 43,  1, 33,  9, 41,
        51, 19, 59, 27, 49, 17, 57, 25,
        15, 47,  7, 39, 13, 45,  5, 37,
        63, 31, 55, 23, 61, 29, 53, 21,
    ],
};

/// 4x4 clustered-dot matrix. Ranks grow outward from the tile center,
/// giving round dots instead of the dispersed Bayer texture.
#[rustfmt::skip]
pub const CLUSTERED_DOT_4X4: ThresholdMatrix = ThresholdMatrix {
    name: "clustered-dot-4x4",
    size: 4,
    cells: &[
        12,  5,  6, 13,
         4,  0,  1,  7,
        11,  3,  2,  8,
        15, 10,  9, 14,
    ],
};

/// Every threshold matrix, in registry order.
pub const ALL_MATRICES: [&ThresholdMatrix; 4] =
    [&BAYER_2X2, &BAYER_4X4, &BAYER_8X8, &CLUSTERED_DOT_4X4];
