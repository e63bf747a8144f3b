//! Cross-engine regression tests for halftone.
//!
//! Each test names the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::dither::{
        diffuse_sample, Dither, DitherAlgorithm, ATKINSON, FLOYD_STEINBERG, LATTICE_BOLTZMANN,
    };
    use crate::registry;
    use crate::{dither, resolve, DitherError, RasterBuffer};
    use pretty_assertions::assert_eq;

    /// 16x16 image with independent ramps in every channel, alpha included.
    fn gradient() -> RasterBuffer {
        let mut pixels = Vec::with_capacity(16 * 16 * 4);
        for y in 0..16u32 {
            for x in 0..16u32 {
                pixels.push((x * 16) as u8);
                pixels.push((y * 16) as u8);
                pixels.push(((x + y) * 8) as u8);
                pixels.push(((x * y) % 256) as u8);
            }
        }
        RasterBuffer::from_rgba(16, 16, pixels).unwrap()
    }

    // ========================================================================
    // Output shape and value domain
    // ========================================================================

    /// If this breaks, an engine is resizing or reallocating the raster.
    #[test]
    fn test_every_algorithm_preserves_dimensions() {
        for entry in registry::entries() {
            let out = dither(gradient(), entry.name()).unwrap();
            assert_eq!(out.dimensions(), (16, 16), "{}", entry.name());
            assert_eq!(out.pixels().len(), 16 * 16 * 4, "{}", entry.name());
        }
    }

    /// If this breaks, the quantizer or threshold comparison lets
    /// intermediate values through. Alpha is dithered too.
    #[test]
    fn test_binary_algorithms_only_emit_0_or_255() {
        for entry in registry::entries() {
            if !entry.algorithm.is_binary() {
                continue;
            }
            let out = dither(gradient(), entry.name()).unwrap();
            let stray = out.pixels().iter().find(|&&v| v != 0 && v != 255);
            assert_eq!(stray, None, "{} produced a non-binary sample", entry.name());
        }
    }

    /// Exactly two registered algorithms are exempt from the binary
    /// guarantee. If a new kernel sneaks in with backward taps this fails.
    #[test]
    fn test_binary_exemptions_are_known() {
        let exempt: Vec<_> = registry::entries()
            .iter()
            .filter(|e| !e.algorithm.is_binary())
            .map(|e| e.name())
            .collect();
        assert_eq!(exempt, vec!["lattice-boltzmann", "checkered"]);
    }

    /// Backward taps rewrite pixels that were already quantized, so the
    /// output may contain intermediate values. This is inherited behavior.
    #[test]
    fn test_lattice_boltzmann_can_leave_gray_samples() {
        let mut buffer = RasterBuffer::filled(2, 1, [100, 100, 100, 100]);
        LATTICE_BOLTZMANN.dither(&mut buffer);
        assert_eq!(buffer.pixels(), &[19, 19, 19, 19, 0, 0, 0, 0]);
    }

    /// If this breaks, the checkered engine is writing alpha or treating
    /// channels independently.
    #[test]
    fn test_checkered_keeps_alpha_and_grays_rgb() {
        let source = gradient();
        let out = dither(source.clone(), "checkered").unwrap();
        for (before, after) in source.pixels().chunks_exact(4).zip(out.pixels().chunks_exact(4)) {
            assert_eq!(after[3], before[3]);
            assert!(after[0] == 0 || after[0] == 255);
            assert_eq!(after[0], after[1]);
            assert_eq!(after[1], after[2]);
        }
    }

    // ========================================================================
    // Ordered engine structure
    // ========================================================================

    /// If this breaks, the matrix lookup is not wrapping with `x mod N`,
    /// `y mod N`.
    #[test]
    fn test_ordered_output_is_periodic() {
        for name in ["bayer-2x2", "bayer-4x4", "bayer-8x8", "clustered-dot-4x4"] {
            let n = match resolve(name).unwrap() {
                DitherAlgorithm::OrderedThreshold(matrix) => matrix.size as u32,
                other => panic!("{} resolved to {:?}", name, other),
            };
            let out = dither(RasterBuffer::filled(24, 24, [130, 60, 200, 255]), name).unwrap();
            for y in 0..24 - n {
                for x in 0..24 - n {
                    for c in 0..4 {
                        assert_eq!(out.get(x, y, c), out.get(x + n, y, c), "{}", name);
                        assert_eq!(out.get(x, y, c), out.get(x, y + n, c), "{}", name);
                    }
                }
            }
        }
    }

    /// Worked example: 4x4 Bayer over a uniform 200 image.
    #[test]
    fn test_bayer_4x4_uniform_200() {
        let out = dither(RasterBuffer::filled(4, 4, [200, 200, 200, 255]), "bayer-4x4").unwrap();
        assert_eq!(out.get(0, 0, 0), Some(255));
        assert_eq!(out.get(1, 1, 0), Some(255));
        // cell 15, threshold 239
        assert_eq!(out.get(0, 3, 0), Some(0));
        assert_eq!(out.get(0, 3, 3), Some(255));
    }

    // ========================================================================
    // Idempotence
    // ========================================================================

    /// Threshold engines have no cross-pixel state, so a second pass over
    /// their own output must be a no-op.
    #[test]
    fn test_threshold_engines_are_idempotent() {
        for name in [
            "bayer-2x2",
            "bayer-4x4",
            "bayer-8x8",
            "clustered-dot-4x4",
            "checkered",
        ] {
            let once = dither(gradient(), name).unwrap();
            let twice = dither(once.clone(), name).unwrap();
            assert_eq!(once, twice, "{}", name);
        }
    }

    /// Error diffusion is not idempotent in general: backward taps leave
    /// gray samples that a second pass quantizes differently.
    #[test]
    fn test_error_diffusion_is_not_idempotent() {
        let once = dither(RasterBuffer::filled(2, 1, [100, 100, 100, 100]), "lattice-boltzmann")
            .unwrap();
        let twice = dither(once.clone(), "lattice-boltzmann").unwrap();
        assert_ne!(once, twice);
        assert_eq!(twice.pixels(), &[0; 8]);
    }

    // ========================================================================
    // Error diffusion contracts
    // ========================================================================

    /// If this breaks, Atkinson's deliberate 25% error loss was normalized
    /// away.
    #[test]
    fn test_atkinson_propagates_three_quarters() {
        assert_eq!(ATKINSON.propagation(), 0.75);

        let mut buffer = RasterBuffer::filled(7, 7, [0, 0, 0, 0]);
        buffer.set(3, 3, 2, 120).unwrap();
        let taps: Vec<_> = ATKINSON.taps().collect();
        let error = diffuse_sample(&mut buffer, &taps, 3, 3, 2).unwrap();

        let spread: u32 = buffer.pixels().iter().map(|&v| u32::from(v)).sum();
        assert_eq!(error, 120);
        assert_eq!(spread, 90);
    }

    /// A lone pixel has no in-bounds neighbor, so every kernel reduces to a
    /// plain 128 threshold.
    #[test]
    fn test_single_pixel_is_plain_threshold() {
        for entry in registry::entries() {
            if !matches!(entry.algorithm, DitherAlgorithm::ErrorDiffusion(_)) {
                continue;
            }
            let buffer = RasterBuffer::from_rgba(1, 1, vec![12, 127, 128, 240]).unwrap();
            let out = dither(buffer, entry.name()).unwrap();
            assert_eq!(out.pixels(), &[0, 0, 255, 255], "{}", entry.name());
        }
    }

    /// Uniform 128 under Floyd-Steinberg: 128 is not below the threshold,
    /// so the top-left pixel saturates. Its error of -127 then pushes the
    /// right and lower neighbors to black, and opaque alpha carries no
    /// error at all.
    #[test]
    fn test_floyd_steinberg_uniform_128() {
        let out = dither(
            RasterBuffer::filled(2, 2, [128, 128, 128, 255]),
            "floyd-steinberg",
        )
        .unwrap();
        assert_eq!(
            out.pixels(),
            &[
                255, 255, 255, 255, //
                0, 0, 0, 255, //
                0, 0, 0, 255, //
                255, 255, 255, 255, //
            ]
        );
    }

    /// If this breaks, the engine diffuses into a deferred error buffer
    /// instead of writing clamped values back in place.
    #[test]
    fn test_saturation_is_visible_to_later_pixels() {
        let mut buffer = RasterBuffer::from_rgba(
            3,
            1,
            vec![127, 0, 0, 255, 250, 0, 0, 255, 110, 0, 0, 255],
        )
        .unwrap();
        FLOYD_STEINBERG.dither(&mut buffer);
        let red: Vec<u8> = buffer.pixels().chunks_exact(4).map(|p| p[0]).collect();
        assert_eq!(red, vec![0, 255, 0]);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = dither(gradient(), "checkered-medium").unwrap_err();
        assert_eq!(
            err,
            DitherError::UnknownAlgorithm("checkered-medium".to_string())
        );
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_lookup_is_separator_insensitive() {
        let a = dither(gradient(), "Jarvis Judice Ninke").unwrap();
        let b = dither(gradient(), "jjn").unwrap();
        assert_eq!(a, b);
    }
}
