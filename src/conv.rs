//! Rate-1/3 convolutional encoder
//!
//! The [`conv_encode`] function implements the constraint-length-7 convolutional encoder
//! of Section 5.1.3.1 of 3GPP TS 36.212, with the generator polynomials held in a
//! [`ConvCodeSpec`]. With termination enabled, six zero tail bits are appended so that
//! the encoder ends in the all-zero state, which the Viterbi decoder relies on.
//!
//! # Examples
//!
//! ```
//! use lte_fec::{conv_encode, Bit, ConvCodeSpec};
//! use Bit::One;
//!
//! let spec = ConvCodeSpec::lte();
//! let code_bits = conv_encode(&[One], &spec, true);
//! assert_eq!(code_bits.len(), 21);
//! assert_eq!(code_bits[.. 3], [One, One, One]);
//! ```

use serde::{Deserialize, Serialize};

use crate::common::index_from_bit;
use crate::{Bit, Error};

/// Constraint length of the code (number of input bits influencing one output bit)
const CONSTRAINT_LEN: usize = 7;

/// Number of code bits produced per input bit
pub(crate) const NUM_OUTPUT_BITS: usize = 3;

/// Generator polynomials of the LTE convolutional code, in octal
const LTE_GENERATORS: [usize; NUM_OUTPUT_BITS] = [0o133, 0o171, 0o165];

/// Specification of a rate-1/3, constraint-length-7 convolutional code
///
/// The three generator polynomials are 7-bit integers in which bit 6 taps the newest
/// input bit and bit 0 taps the oldest memory cell. They are conventionally written as
/// octal literals, e.g. `[0o133, 0o171, 0o165]` for the LTE code.
#[derive(Clone, Eq, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct ConvCodeSpec {
    /// Generator polynomials as 7-bit integers
    generators: [usize; NUM_OUTPUT_BITS],
}

impl ConvCodeSpec {
    /// Returns code specification for given generator polynomials.
    ///
    /// # Parameters
    ///
    /// - `generators`: Generator polynomials as 7-bit integers, ordered `[G0, G1, G2]`.
    ///   Code bits are emitted in that order at each step.
    ///
    /// # Errors
    ///
    /// Returns an error if any generator polynomial is `0` or does not fit in 7 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use lte_fec::ConvCodeSpec;
    ///
    /// let spec = ConvCodeSpec::new([0o133, 0o171, 0o165])?;
    /// assert_eq!(spec, ConvCodeSpec::lte());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(generators: [usize; NUM_OUTPUT_BITS]) -> Result<Self, Error> {
        let limit = 1 << CONSTRAINT_LEN;
        if generators.iter().any(|&g| g == 0 || g >= limit) {
            return Err(Error::InvalidInput(format!(
                "For constraint length of {CONSTRAINT_LEN}, each generator polynomial \
                must be in the range [1, {limit})",
            )));
        }
        Ok(Self { generators })
    }

    /// Returns the code specification used in LTE (generators 133, 171, 165 octal).
    #[must_use]
    pub fn lte() -> Self {
        Self {
            generators: LTE_GENERATORS,
        }
    }

    /// Returns the constraint length of the code.
    #[must_use]
    pub fn constraint_len(&self) -> usize {
        CONSTRAINT_LEN
    }

    /// Returns the number of encoder memory cells.
    #[must_use]
    pub fn memory(&self) -> usize {
        CONSTRAINT_LEN - 1
    }

    /// Returns the number of encoder states.
    #[must_use]
    pub fn num_states(&self) -> usize {
        1 << self.memory()
    }

    /// Generates the output bits for one input bit and returns the successor state.
    ///
    /// The 7-bit register is `(u << 6) | state`, with the input bit at position 6 and
    /// the oldest memory cell at position 0. Each output bit is the parity of the
    /// register masked by one generator, and the successor state shifts the input bit
    /// into position 5.
    pub(crate) fn step(&self, state: usize, input: Bit) -> (usize, [Bit; NUM_OUTPUT_BITS]) {
        let memory = self.memory();
        let reg = (index_from_bit(input) << memory) | state;
        let output_bits = [
            parity(reg & self.generators[0]),
            parity(reg & self.generators[1]),
            parity(reg & self.generators[2]),
        ];
        let next_state =
            ((index_from_bit(input) << (memory - 1)) | (state >> 1)) & (self.num_states() - 1);
        (next_state, output_bits)
    }
}

/// Returns XOR of bits in the binary representation of given integer.
fn parity(num: usize) -> Bit {
    match num.count_ones() % 2 {
        0 => Bit::Zero,
        _ => Bit::One,
    }
}

/// Returns code bits from the rate-1/3 convolutional encoder for given information bits.
///
/// # Parameters
///
/// - `info_bits`: Information bits to be encoded. The encoder always starts in the
///   all-zero state.
///
/// - `spec`: Code specification holding the generator polynomials.
///
/// - `terminate`: If `true`, six zero tail bits are appended to the input so that the
///   encoder also ends in the all-zero state.
///
/// # Returns
///
/// - `code_bits`: Code bits, three per input bit in generator order `G0, G1, G2`. The
///   length is `3 * (info_bits.len() + 6)` with termination and `3 * info_bits.len()`
///   without.
///
/// # Examples
///
/// ```
/// use lte_fec::{conv_encode, Bit, ConvCodeSpec};
///
/// let spec = ConvCodeSpec::lte();
/// let code_bits = conv_encode(&[Bit::Zero; 10], &spec, true);
/// assert_eq!(code_bits, vec![Bit::Zero; 48]);
/// ```
#[must_use]
pub fn conv_encode(info_bits: &[Bit], spec: &ConvCodeSpec, terminate: bool) -> Vec<Bit> {
    let num_tail_bits = if terminate { spec.memory() } else { 0 };
    let mut code_bits = Vec::with_capacity(NUM_OUTPUT_BITS * (info_bits.len() + num_tail_bits));
    let mut state = 0;
    for &bit in info_bits {
        let (next_state, output_bits) = spec.step(state, bit);
        code_bits.extend(output_bits);
        state = next_state;
    }
    for _ in 0 .. num_tail_bits {
        let (next_state, output_bits) = spec.step(state, Bit::Zero);
        code_bits.extend(output_bits);
        state = next_state;
    }
    code_bits
}

#[cfg(test)]
mod tests_of_conv_code_spec {
    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn test_new() {
        // Invalid input
        assert!(ConvCodeSpec::new([0o0, 0o171, 0o165]).is_err());
        assert!(ConvCodeSpec::new([0o133, 0o200, 0o165]).is_err());
        assert!(ConvCodeSpec::new([0o133, 0o171, 0o400]).is_err());
        // Valid input
        let spec = ConvCodeSpec::new([0o133, 0o171, 0o165]).unwrap();
        assert_eq!(spec.generators, [0b101_1011, 0b111_1001, 0b111_0101]);
    }

    #[test]
    fn test_lte() {
        let spec = ConvCodeSpec::lte();
        assert_eq!(spec.constraint_len(), 7);
        assert_eq!(spec.memory(), 6);
        assert_eq!(spec.num_states(), 64);
        assert_eq!(spec.generators, [0o133, 0o171, 0o165]);
    }

    #[test]
    fn test_step_from_zero_state() {
        let spec = ConvCodeSpec::lte();
        // All three generators tap bit 6, so an input of `One` from the zero state
        // raises all three output bits.
        assert_eq!(spec.step(0, Zero), (0, [Zero, Zero, Zero]));
        assert_eq!(spec.step(0, One), (0b10_0000, [One, One, One]));
    }

    #[test]
    fn test_step_state_update() {
        let spec = ConvCodeSpec::lte();
        for state in 0 .. spec.num_states() {
            let (next_for_zero, _) = spec.step(state, Zero);
            let (next_for_one, _) = spec.step(state, One);
            assert_eq!(next_for_zero, state >> 1);
            assert_eq!(next_for_one, 0b10_0000 | (state >> 1));
        }
    }

    #[test]
    fn test_step_output_bits() {
        let spec = ConvCodeSpec::lte();
        assert_eq!(spec.step(0b01_0101, Zero).1, [Zero, Zero, One]);
        assert_eq!(spec.step(0b01_0101, One).1, [One, One, Zero]);
        assert_eq!(spec.step(0b11_1111, Zero).1, [Zero, Zero, Zero]);
        assert_eq!(spec.step(0b11_1111, One).1, [One, One, One]);
    }
}


#[cfg(test)]
mod tests_of_properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_bits(max_num_bits: usize) -> impl Strategy<Value = Vec<Bit>> {
        proptest::collection::vec(
            prop_oneof![Just(Bit::Zero), Just(Bit::One)],
            0 .. max_num_bits,
        )
    }

    proptest! {
        #[test]
        fn test_code_length_law(info_bits in arb_bits(300)) {
            let spec = ConvCodeSpec::lte();
            prop_assert_eq!(
                conv_encode(&info_bits, &spec, false).len(),
                3 * info_bits.len()
            );
            prop_assert_eq!(
                conv_encode(&info_bits, &spec, true).len(),
                3 * (info_bits.len() + 6)
            );
        }

        #[test]
        fn test_terminated_output_extends_unterminated(info_bits in arb_bits(100)) {
            let spec = ConvCodeSpec::lte();
            let unterminated = conv_encode(&info_bits, &spec, false);
            let terminated = conv_encode(&info_bits, &spec, true);
            prop_assert_eq!(&terminated[.. unterminated.len()], &unterminated[..]);
        }
    }
}
