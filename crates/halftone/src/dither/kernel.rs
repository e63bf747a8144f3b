//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of a pixel is shared
//! among its neighbors. Weights are stored as integer numerators over a
//! common divisor and converted to `f32` taps when a kernel is run.

/// An error diffusion kernel.
///
/// # Error Propagation
///
/// The fraction of error propagated is `sum(weights) / divisor`. Several
/// kernels propagate less than 100%: Atkinson (6/8), Knoll (120/136),
/// Sierra (23/32) and Sierra Lite (3/4). The lost error is part of each
/// algorithm's look and must not be normalized away.
///
/// # Scan Order
///
/// The engine visits pixels row-major, left to right. A kernel is *causal*
/// when every entry points at a pixel that has not been visited yet:
/// `dy > 0`, or `dy == 0` with `dx > 0`. Lattice-Boltzmann is the only
/// registered kernel that also pushes error backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffusionKernel {
    /// Canonical registry name.
    pub name: &'static str,

    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (positive = below)
    /// - `weight`: numerator, divided by `divisor`
    pub entries: &'static [(i32, i32, u8)],

    /// Shared divisor for all weights.
    pub divisor: u8,
}

impl DiffusionKernel {
    /// Entries as `(dx, dy, weight)` with the weight already divided.
    ///
    /// The division happens in `f64` and is rounded once to `f32`.
    pub fn taps(&self) -> impl Iterator<Item = (i32, i32, f32)> + '_ {
        let divisor = f64::from(self.divisor);
        self.entries
            .iter()
            .map(move |&(dx, dy, w)| (dx, dy, (f64::from(w) / divisor) as f32))
    }

    /// Fraction of the quantization error the kernel propagates.
    pub fn propagation(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        (f64::from(total) / f64::from(self.divisor)) as f32
    }

    /// Whether every entry targets a pixel later in row-major scan order.
    pub fn is_causal(&self) -> bool {
        self.entries
            .iter()
            .all(|&(dx, dy, _)| dy > 0 || (dy == 0 && dx > 0))
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    name: "floyd-steinberg",
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// "False" Floyd-Steinberg: half the error right, half below.
///
/// ```text
///    X   1
///    1
/// ```
pub const FALSE_FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    name: "false-floyd-steinberg",
    entries: &[(1, 0, 1), (0, 1, 1)],
    divisor: 2,
};

/// Atkinson dithering kernel.
///
/// Six neighbors at 1/8 each, 75% total propagation.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: DiffusionKernel = DiffusionKernel {
    name: "atkinson",
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Burkes dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: DiffusionKernel = DiffusionKernel {
    name: "burkes",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra dithering kernel, six-entry variant.
///
/// The third row of the textbook kernel is absent and the second row stops
/// at `dx = 1`, so 23/32 of the error propagates.
///
/// ```text
///            X   5   3
///    2   4   5   4
/// ```
pub const SIERRA: DiffusionKernel = DiffusionKernel {
    name: "sierra",
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
    ],
    divisor: 32,
};

/// Sierra Lite dithering kernel (3/4 propagation).
///
/// ```text
///        X   2
///    1
/// ```
pub const SIERRA_LITE: DiffusionKernel = DiffusionKernel {
    name: "sierra-lite",
    entries: &[(1, 0, 2), (-1, 1, 1)],
    divisor: 4,
};

/// Sierra Two-Row dithering kernel, four-entry variant.
///
/// ```text
///        X   4
///    3   5   4
/// ```
pub const SIERRA_TWO_ROW: DiffusionKernel = DiffusionKernel {
    name: "sierra-two-row",
    entries: &[(1, 0, 4), (-1, 1, 3), (0, 1, 5), (1, 1, 4)],
    divisor: 16,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel {
    name: "jarvis-judice-ninke",
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Stucki dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: DiffusionKernel = DiffusionKernel {
    name: "stucki",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Knoll dithering kernel.
///
/// 24 entries over four rows with a skewed footprint. The zero-weight
/// entries are kept so the topology stays 24 wide; they never change a
/// pixel. 120/136 of the error propagates.
///
/// ```text
///                X  12  10   7   5
///           12  12   8   5   3   0
///       10   8   5   3   2   0   0
///    7   5   3   2   1   0   0
/// ```
pub const KNOLL: DiffusionKernel = DiffusionKernel {
    name: "knoll",
    entries: &[
        (1, 0, 12),
        (2, 0, 10),
        (3, 0, 7),
        (4, 0, 5),
        (-1, 1, 12),
        (0, 1, 12),
        (1, 1, 8),
        (2, 1, 5),
        (3, 1, 3),
        (4, 1, 0),
        (-2, 2, 10),
        (-1, 2, 8),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 2),
        (3, 2, 0),
        (4, 2, 0),
        (-3, 3, 7),
        (-2, 3, 5),
        (-1, 3, 3),
        (0, 3, 2),
        (1, 3, 1),
        (2, 3, 0),
        (3, 3, 0),
    ],
    divisor: 136,
};

/// Lattice-Boltzmann kernel on a hexagonal neighborhood.
///
/// Error goes to six directions at 1/6 each, including left, up and
/// up-left. Those three targets were already quantized, so they are
/// modified after the fact and can end up with non-binary values.
///
/// ```text
///    1   1
///    1   X   1
///        1   1
/// ```
pub const LATTICE_BOLTZMANN: DiffusionKernel = DiffusionKernel {
    name: "lattice-boltzmann",
    entries: &[
        (1, 0, 1),
        (-1, 0, 1),
        (0, 1, 1),
        (0, -1, 1),
        (1, 1, 1),
        (-1, -1, 1),
    ],
    divisor: 6,
};

/// Every diffusion kernel, in registry order.
pub const ALL_KERNELS: [&DiffusionKernel; 11] = [
    &FLOYD_STEINBERG,
    &FALSE_FLOYD_STEINBERG,
    &ATKINSON,
    &BURKES,
    &SIERRA,
    &SIERRA_LITE,
    &SIERRA_TWO_ROW,
    &JARVIS_JUDICE_NINKE,
    &STUCKI,
    &KNOLL,
    &LATTICE_BOLTZMANN,
];
