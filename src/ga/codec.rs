//! Chromosome codec: bit slices to bounded reals.
//!
//! A chromosome of `bits_per_param × parameter_count` bits is split into
//! equal slices. Each slice is read most-significant-bit first as an
//! unsigned integer `v ∈ [0, 2^bits − 1]` and rescaled linearly:
//!
//! ```text
//! x = min + v · (max − min) / (2^bits − 1)
//! ```
//!
//! Every correctly sized bit string decodes to an in-bounds vector; the
//! all-zero slice maps to `min` and the all-one slice to `max`.

use super::error::GaError;
use super::types::{Chromosome, ParameterVector};

/// Largest supported slice width.
pub const MAX_BITS_PER_PARAM: usize = 32;

/// Linear de-quantizing codec for fixed-width parameter slices.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{BinaryCodec, Chromosome};
///
/// let codec = BinaryCodec::new(4, 2, 0.0, 15.0).unwrap();
/// let c = Chromosome::from_bits(vec![
///     false, false, true, true, // 3
///     true, true, true, true,   // 15
/// ]);
/// assert_eq!(codec.decode(&c).unwrap(), vec![3.0, 15.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCodec {
    bits_per_param: usize,
    parameter_count: usize,
    min_value: f64,
    max_value: f64,
    chromosome_length: usize,
    max_int: u64,
}

impl BinaryCodec {
    /// Creates a codec, rejecting widths and bounds it cannot decode.
    ///
    /// Bounds must be finite, ordered, and `max − min` must itself be finite.
    pub fn new(
        bits_per_param: usize,
        parameter_count: usize,
        min_value: f64,
        max_value: f64,
    ) -> Result<Self, GaError> {
        if bits_per_param == 0 || bits_per_param > MAX_BITS_PER_PARAM {
            return Err(GaError::InvalidBitsPerParam {
                bits: bits_per_param,
            });
        }
        if parameter_count == 0 {
            return Err(GaError::InvalidParameterCount);
        }
        let chromosome_length = bits_per_param.checked_mul(parameter_count).ok_or(
            GaError::ChromosomeTooLong {
                bits_per_param,
                parameter_count,
            },
        )?;
        if !min_value.is_finite()
            || !max_value.is_finite()
            || min_value > max_value
            || !(max_value - min_value).is_finite()
        {
            return Err(GaError::InvalidBounds {
                min: min_value,
                max: max_value,
            });
        }
        Ok(Self {
            bits_per_param,
            parameter_count,
            min_value,
            max_value,
            chromosome_length,
            max_int: (1u64 << bits_per_param) - 1,
        })
    }

    /// Bits per parameter slice.
    pub fn bits_per_param(&self) -> usize {
        self.bits_per_param
    }

    /// Number of parameter slices.
    pub fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    /// Total chromosome length in bits.
    pub fn chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    /// Decodes a whole chromosome into its parameter vector.
    ///
    /// Returns [`GaError::LengthMismatch`] if the chromosome is not exactly
    /// [`chromosome_length`](Self::chromosome_length) bits long.
    pub fn decode(&self, chromosome: &Chromosome) -> Result<ParameterVector, GaError> {
        let expected = self.chromosome_length();
        if chromosome.len() != expected {
            return Err(GaError::LengthMismatch {
                expected,
                actual: chromosome.len(),
            });
        }
        Ok(chromosome
            .bits()
            .chunks_exact(self.bits_per_param)
            .map(|slice| self.decode_slot(slice))
            .collect())
    }

    /// Decodes one `bits_per_param`-wide slice.
    ///
    /// # Panics
    /// Panics if `slice` has the wrong width.
    pub fn decode_slot(&self, slice: &[bool]) -> f64 {
        assert_eq!(
            slice.len(),
            self.bits_per_param,
            "slice width must equal bits_per_param"
        );
        let v = slice
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));

        // Endpoints are exact so that all-zero and all-one slices hit the bounds.
        if v == 0 {
            return self.min_value;
        }
        if v == self.max_int {
            return self.max_value;
        }
        let span = self.max_value - self.min_value;
        let scaled = v as f64 * span;
        // Multiply first for exact integer grids; divide first near f64::MAX.
        let offset = if scaled.is_finite() {
            scaled / self.max_int as f64
        } else {
            span * (v as f64 / self.max_int as f64)
        };
        (self.min_value + offset).clamp(self.min_value, self.max_value)
    }

    /// Encodes parameters to the nearest representable chromosome.
    ///
    /// Values outside the bounds are clamped. Not needed by the engine, but
    /// useful for seeding known solutions and for inspection.
    ///
    /// # Panics
    /// Panics if `params.len() != parameter_count`.
    pub fn encode(&self, params: &[f64]) -> Chromosome {
        assert_eq!(
            params.len(),
            self.parameter_count,
            "parameter vector length must equal parameter_count"
        );
        let span = self.max_value - self.min_value;
        let mut bits = Vec::with_capacity(self.chromosome_length());
        for &x in params {
            let v = if span > 0.0 {
                let t = ((x - self.min_value) / span).clamp(0.0, 1.0);
                (t * self.max_int as f64).round() as u64
            } else {
                0
            };
            for shift in (0..self.bits_per_param).rev() {
                bits.push((v >> shift) & 1 == 1);
            }
        }
        Chromosome::from_bits(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn curve_codec() -> BinaryCodec {
        BinaryCodec::new(5, 3, 0.0, 3.0).unwrap()
    }

    #[test]
    fn test_all_zero_decodes_to_min() {
        let codec = BinaryCodec::new(8, 9, -10.0, 10.0).unwrap();
        let c = Chromosome::from_bits(vec![false; 72]);
        assert_eq!(codec.decode(&c).unwrap(), vec![-10.0; 9]);
    }

    #[test]
    fn test_all_one_decodes_to_max() {
        let codec = BinaryCodec::new(8, 9, -10.0, 10.0).unwrap();
        let c = Chromosome::from_bits(vec![true; 72]);
        assert_eq!(codec.decode(&c).unwrap(), vec![10.0; 9]);
    }

    #[test]
    fn test_msb_first() {
        let codec = BinaryCodec::new(5, 1, 0.0, 31.0).unwrap();
        let c = Chromosome::from_bits(vec![true, false, false, false, false]);
        assert_eq!(codec.decode(&c).unwrap(), vec![16.0]);
        let c = Chromosome::from_bits(vec![false, false, false, false, true]);
        assert_eq!(codec.decode(&c).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_slices_are_independent() {
        let codec = curve_codec();
        let mut bits = vec![false; 15];
        // Middle slot = 0b11111
        for b in &mut bits[5..10] {
            *b = true;
        }
        let params = codec.decode(&Chromosome::from_bits(bits)).unwrap();
        assert_eq!(params, vec![0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let codec = curve_codec();
        let err = codec
            .decode(&Chromosome::from_bits(vec![true; 14]))
            .unwrap_err();
        assert_eq!(
            err,
            GaError::LengthMismatch {
                expected: 15,
                actual: 14
            }
        );
    }

    #[test]
    fn test_zero_bits_rejected() {
        assert_eq!(
            BinaryCodec::new(0, 3, 0.0, 1.0).unwrap_err(),
            GaError::InvalidBitsPerParam { bits: 0 }
        );
        assert!(BinaryCodec::new(33, 3, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_bad_bounds_rejected() {
        assert!(BinaryCodec::new(4, 1, 2.0, 1.0).is_err());
        assert!(BinaryCodec::new(4, 1, f64::NAN, 1.0).is_err());
        assert!(BinaryCodec::new(4, 1, 0.0, f64::INFINITY).is_err());
        assert!(BinaryCodec::new(4, 0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_overflowing_span_rejected() {
        assert_eq!(
            BinaryCodec::new(8, 2, -1e308, 1e308).unwrap_err(),
            GaError::InvalidBounds {
                min: -1e308,
                max: 1e308
            }
        );
        // Half the range still fits
        let codec = BinaryCodec::new(8, 1, -1e307, 1e307).unwrap();
        let x = codec.decode_slot(&[true, false, false, false, false, false, false, false]);
        assert!(x > 0.0 && x < 1e307);
    }

    #[test]
    fn test_overflowing_length_rejected() {
        assert_eq!(
            BinaryCodec::new(32, usize::MAX / 16, 0.0, 1.0).unwrap_err(),
            GaError::ChromosomeTooLong {
                bits_per_param: 32,
                parameter_count: usize::MAX / 16
            }
        );
        assert!(BinaryCodec::new(1, usize::MAX, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_degenerate_bounds_decode_constant() {
        let codec = BinaryCodec::new(3, 2, 4.0, 4.0).unwrap();
        let c = Chromosome::from_bits(vec![true, false, true, false, true, true]);
        assert_eq!(codec.decode(&c).unwrap(), vec![4.0, 4.0]);
    }

    #[test]
    fn test_encode_exact_grid_points() {
        let codec = BinaryCodec::new(4, 2, 0.0, 15.0).unwrap();
        let c = codec.encode(&[3.0, 15.0]);
        assert_eq!(codec.decode(&c).unwrap(), vec![3.0, 15.0]);
    }

    #[test]
    fn test_encode_clamps() {
        let codec = BinaryCodec::new(4, 2, 0.0, 15.0).unwrap();
        let c = codec.encode(&[-5.0, 99.0]);
        assert_eq!(codec.decode(&c).unwrap(), vec![0.0, 15.0]);
    }

    proptest! {
        #[test]
        fn prop_decode_within_bounds(
            bits in proptest::collection::vec(any::<bool>(), 24),
            min in -1e3f64..1e3,
            width in 0.0f64..1e3,
        ) {
            let codec = BinaryCodec::new(6, 4, min, min + width).unwrap();
            let params = codec.decode(&Chromosome::from_bits(bits)).unwrap();
            prop_assert_eq!(params.len(), 4);
            for x in params {
                prop_assert!(x >= min && x <= min + width, "{} outside [{}, {}]", x, min, min + width);
            }
        }

        #[test]
        fn prop_decode_is_deterministic(bits in proptest::collection::vec(any::<bool>(), 15)) {
            let codec = curve_codec();
            let c = Chromosome::from_bits(bits);
            prop_assert_eq!(codec.decode(&c).unwrap(), codec.decode(&c).unwrap());
        }
    }
}
