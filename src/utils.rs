//! Collection of useful functions for exercising the coding chain
//!
//! # Examples
//!
//! ```
//! use lte_fec::utils;
//!
//! let mut rng = rand::rng();
//! let num_bits = 40;
//! let bits = utils::random_bits(num_bits, &mut rng);
//! let received = utils::bsc_channel(&bits, 0.05, &mut rng)?;
//! let err_count = utils::error_count(&received, &bits);
//! assert!(err_count <= num_bits);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use rand::{prelude::ThreadRng, Rng};

use crate::{Bit, Error};

/// Returns given number of random bits.
///
/// # Parameters
///
/// - `num_bits`: Number of random bits to be generated.
///
/// - `rng`: Random number generator to be used.
///
/// # Returns
///
/// - `bits`: Random bits.
pub fn random_bits(num_bits: usize, rng: &mut ThreadRng) -> Vec<Bit> {
    (0 .. num_bits)
        .map(|_| {
            if rng.random_bool(0.5) {
                Bit::One
            } else {
                Bit::Zero
            }
        })
        .collect()
}

/// Returns copy of a bit sequence with the bits at given positions flipped.
///
/// # Parameters
///
/// - `bits`: Bit sequence to which the error pattern must be applied.
///
/// - `positions`: Zero-based indices of the bits to flip. A position listed twice is
///   flipped twice, i.e. left unchanged.
///
/// # Returns
///
/// - `flipped`: Bit sequence with the error pattern applied.
///
/// # Errors
///
/// Returns an error if any position is out of range for the sequence.
///
/// # Examples
///
/// ```
/// use lte_fec::{utils, Bit};
/// use Bit::{One, Zero};
///
/// let flipped = utils::flip_bits(&[Zero, Zero, One], &[0, 2])?;
/// assert_eq!(flipped, [One, Zero, Zero]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn flip_bits(bits: &[Bit], positions: &[usize]) -> Result<Vec<Bit>, Error> {
    let mut flipped = bits.to_vec();
    for &position in positions {
        if position >= bits.len() {
            return Err(Error::InvalidInput(format!(
                "Bit position {position} is out of range for sequence of length {}",
                bits.len()
            )));
        }
        flipped[position] = flipped[position].flipped();
    }
    Ok(flipped)
}

/// Returns binary symmetric channel output corresponding to given input bits.
///
/// # Parameters
///
/// - `bits`: Bits to be transmitted over the channel.
///
/// - `crossover_prob`: Probability with which each bit is flipped, independently of all
///   others. Must be in the range `[0.0, 1.0]`.
///
/// - `rng`: Random number generator to be used.
///
/// # Returns
///
/// - `received`: Bits at the channel output.
///
/// # Errors
///
/// Returns an error if `crossover_prob` is not in the range `[0.0, 1.0]`.
pub fn bsc_channel(
    bits: &[Bit],
    crossover_prob: f64,
    rng: &mut ThreadRng,
) -> Result<Vec<Bit>, Error> {
    if !(0.0 ..= 1.0).contains(&crossover_prob) {
        return Err(Error::InvalidInput(format!(
            "Crossover probability must be in the range [0, 1], found {crossover_prob}",
        )));
    }
    Ok(bits
        .iter()
        .map(|&bit| {
            if rng.random_bool(crossover_prob) {
                bit.flipped()
            } else {
                bit
            }
        })
        .collect())
}

/// Returns number of errors in a sequence with respect to a reference sequence.
///
/// # Parameters
///
/// - `seq`: Sequence in which errors must be counted.
///
/// - `ref_seq`: Reference sequence to which the given sequence is compared.
///
/// # Returns
///
/// - `err_count`: Number of positions in which the two sequences differ. If they are of
///   different lengths, then the longer sequence is effectively truncated to the length
///   of the shorter one.
pub fn error_count<T: PartialEq>(seq: &[T], ref_seq: &[T]) -> usize {
    ref_seq
        .iter()
        .zip(seq.iter())
        .filter(|&(x, y)| x != y)
        .count()
}

/// Returns bit sequence corresponding to given byte-per-bit values.
///
/// # Parameters
///
/// - `ints`: Values to be converted, one byte per bit.
///
/// # Returns
///
/// - `bits`: Converted bit sequence.
///
/// # Errors
///
/// Returns an error if any value is neither `0` nor `1`.
///
/// # Examples
///
/// ```
/// use lte_fec::{utils, Bit};
/// use Bit::{One, Zero};
///
/// assert_eq!(utils::bits_from_ints(&[1, 0, 1])?, [One, Zero, One]);
/// assert!(utils::bits_from_ints(&[1, 0, 2]).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn bits_from_ints(ints: &[u8]) -> Result<Vec<Bit>, Error> {
    ints.iter().map(|&value| Bit::try_from(value)).collect()
}

/// Returns byte-per-bit values corresponding to given bit sequence.
///
/// # Parameters
///
/// - `bits`: Bits to be converted.
///
/// # Returns
///
/// - `ints`: Converted values, one byte per bit.
#[must_use]
pub fn ints_from_bits(bits: &[Bit]) -> Vec<u8> {
    bits.iter().map(|&bit| u8::from(bit)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn test_random_bits() {
        let mut rng = rand::rng();
        let num_bits = 0;
        assert!(random_bits(num_bits, &mut rng).is_empty());
        let num_bits = 10000;
        let bits = random_bits(num_bits, &mut rng);
        let num_zeros = bits.iter().filter(|&b| *b == Zero).count();
        let num_ones = bits.iter().filter(|&b| *b == One).count();
        assert!(num_zeros > 9 * num_bits / 20 && num_ones > 9 * num_bits / 20);
    }

    #[test]
    fn test_flip_bits() {
        let bits = [Zero, One, One, Zero];
        // Invalid input
        assert!(flip_bits(&bits, &[4]).is_err());
        assert!(flip_bits(&[], &[0]).is_err());
        // Valid input
        assert_eq!(flip_bits(&bits, &[]).unwrap(), bits);
        assert_eq!(flip_bits(&bits, &[0, 3]).unwrap(), [One, One, One, One]);
        assert_eq!(flip_bits(&bits, &[1, 1]).unwrap(), bits);
    }

    #[test]
    fn test_bsc_channel() {
        let mut rng = rand::rng();
        let bits = random_bits(1000, &mut rng);
        // Invalid input
        assert!(bsc_channel(&bits, -0.1, &mut rng).is_err());
        assert!(bsc_channel(&bits, 1.1, &mut rng).is_err());
        // Valid input
        assert_eq!(bsc_channel(&bits, 0.0, &mut rng).unwrap(), bits);
        let received = bsc_channel(&bits, 1.0, &mut rng).unwrap();
        assert_eq!(error_count(&received, &bits), bits.len());
    }

    #[test]
    fn test_error_count() {
        assert_eq!(error_count(&[], &[One, Zero]), 0);
        assert_eq!(error_count(&[One, Zero], &[]), 0);
        // Longer `seq`
        let ref_seq = [One, Zero, Zero, One, One, One, Zero, Zero];
        let seq = [One, One, Zero, Zero, One, One, Zero, Zero, Zero, One];
        assert_eq!(error_count(&seq, &ref_seq), 2);
        // Shorter `seq`
        let ref_seq = [One, Zero, Zero, One, One, One, Zero, Zero, Zero, One];
        let seq = [One, One, Zero, Zero, One, One, Zero, Zero];
        assert_eq!(error_count(&seq, &ref_seq), 2);
    }

    #[test]
    fn test_bits_from_ints() {
        // Invalid input
        assert!(bits_from_ints(&[0, 1, 2]).is_err());
        // Valid input
        assert!(bits_from_ints(&[]).unwrap().is_empty());
        assert_eq!(bits_from_ints(&[1, 0, 1]).unwrap(), [One, Zero, One]);
    }

    #[test]
    fn test_ints_from_bits() {
        assert!(ints_from_bits(&[]).is_empty());
        assert_eq!(ints_from_bits(&[One, Zero, One]), [1, 0, 1]);
    }
}
