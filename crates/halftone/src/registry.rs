//! Name-to-algorithm registry.
//!
//! The table is plain `static` data. Lookups normalize the requested name
//! (ASCII lowercase, `_` and spaces read as `-`) before comparing it with
//! canonical names and aliases.

use crate::dither::{
    DitherAlgorithm, ATKINSON, BAYER_2X2, BAYER_4X4, BAYER_8X8, BURKES, CLUSTERED_DOT_4X4,
    FALSE_FLOYD_STEINBERG, FLOYD_STEINBERG, JARVIS_JUDICE_NINKE, KNOLL, LATTICE_BOLTZMANN, SIERRA,
    SIERRA_LITE, SIERRA_TWO_ROW, STUCKI,
};

/// One registered algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Alternative spellings accepted by [`lookup`].
    pub aliases: &'static [&'static str],
    pub algorithm: DitherAlgorithm,
}

impl RegistryEntry {
    /// Canonical name, taken from the algorithm itself.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    fn matches(&self, normalized: &str) -> bool {
        self.name() == normalized || self.aliases.iter().any(|a| *a == normalized)
    }
}

const fn diffusion(
    kernel: &'static crate::dither::DiffusionKernel,
    aliases: &'static [&'static str],
) -> RegistryEntry {
    RegistryEntry {
        aliases,
        algorithm: DitherAlgorithm::ErrorDiffusion(kernel),
    }
}

const fn ordered(
    matrix: &'static crate::dither::ThresholdMatrix,
    aliases: &'static [&'static str],
) -> RegistryEntry {
    RegistryEntry {
        aliases,
        algorithm: DitherAlgorithm::OrderedThreshold(matrix),
    }
}

static ENTRIES: [RegistryEntry; 16] = [
    diffusion(&FLOYD_STEINBERG, &["floydsteinberg", "fs"]),
    diffusion(&FALSE_FLOYD_STEINBERG, &["falsefloydsteinberg"]),
    diffusion(&ATKINSON, &[]),
    diffusion(&BURKES, &[]),
    diffusion(&SIERRA, &["sierra-three-row", "sierra3"]),
    diffusion(&SIERRA_LITE, &["sierralite"]),
    diffusion(&SIERRA_TWO_ROW, &["sierratworow", "sierra2"]),
    diffusion(&JARVIS_JUDICE_NINKE, &["jjn", "jarvis"]),
    diffusion(&STUCKI, &[]),
    diffusion(&KNOLL, &[]),
    diffusion(&LATTICE_BOLTZMANN, &["lbm", "latticeboltzmann"]),
    ordered(&BAYER_2X2, &["bayer2x2", "bayer2"]),
    ordered(&BAYER_4X4, &["bayer4x4", "bayer4", "bayer"]),
    ordered(&BAYER_8X8, &["bayer8x8", "bayer8"]),
    ordered(&CLUSTERED_DOT_4X4, &["clustered-dot", "clustereddot4x4"]),
    RegistryEntry {
        aliases: &["checkered-small", "checkerboard"],
        algorithm: DitherAlgorithm::LuminanceThreshold,
    },
];

/// All registered algorithms in listing order.
pub fn entries() -> &'static [RegistryEntry] {
    &ENTRIES
}

/// Canonical names in listing order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(RegistryEntry::name)
}

/// Fold case and treat `_` and spaces as `-`.
pub fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Resolve a name or alias to its algorithm.
pub fn lookup(name: &str) -> Option<DitherAlgorithm> {
    let normalized = normalize(name);
    ENTRIES
        .iter()
        .find(|entry| entry.matches(&normalized))
        .map(|entry| entry.algorithm)
}
