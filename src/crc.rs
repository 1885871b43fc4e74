//! CRC attachment and verification
//!
//! The [`crc_attach`] and [`crc_check`] functions implement the cyclic redundancy check
//! defined in Section 5.1.1 of 3GPP TS 36.212, for each of the four generator polynomials
//! listed there. The [`CrcAlgorithm`] enum selects the polynomial. Parity bits are the
//! coefficients of the remainder of `M(x) * x^width` modulo the generator polynomial,
//! appended MSB first, so that the whole attached block is divisible by the generator.
//!
//! # Examples
//!
//! ```
//! use lte_fec::{crc_attach, crc_check, Bit, CrcAlgorithm};
//! use Bit::{One, Zero};
//!
//! let payload = [One, Zero, Zero, One, Zero, Zero, Zero, Zero];
//! let bits_with_crc = crc_attach(&payload, CrcAlgorithm::Crc8);
//! let (payload_hat, crc_ok) = crc_check(&bits_with_crc, CrcAlgorithm::Crc8);
//! assert!(crc_ok);
//! assert_eq!(payload_hat, payload);
//! ```

use serde::{Deserialize, Serialize};

use crate::common::{bit_from_index, index_from_bit};
use crate::Bit;

/// Enumeration of supported CRC algorithms
#[derive(Clone, Eq, Hash, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub enum CrcAlgorithm {
    /// 24-bit CRC with generator polynomial `gCRC24A` (transport block CRC)
    Crc24A,
    /// 24-bit CRC with generator polynomial `gCRC24B` (code block segment CRC)
    Crc24B,
    /// 16-bit CRC with generator polynomial `gCRC16`
    Crc16,
    /// 8-bit CRC with generator polynomial `gCRC8`
    Crc8,
}

impl CrcAlgorithm {
    /// Returns the number of parity bits.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            CrcAlgorithm::Crc24A | CrcAlgorithm::Crc24B => 24,
            CrcAlgorithm::Crc16 => 16,
            CrcAlgorithm::Crc8 => 8,
        }
    }

    /// Returns the generator polynomial as a width-bit integer; bit `i` holds the
    /// coefficient of `x^i`, and the leading coefficient of `x^width` is implicit.
    #[must_use]
    pub fn generator(self) -> usize {
        match self {
            // gCRC24A(D) = D^24 + D^23 + D^18 + D^17 + D^14 + D^11 + D^10 + D^7 + D^6
            //              + D^5 + D^4 + D^3 + D + 1
            CrcAlgorithm::Crc24A => 0x0086_4CFB,
            // gCRC24B(D) = D^24 + D^23 + D^6 + D^5 + D + 1
            CrcAlgorithm::Crc24B => 0x0080_0063,
            // gCRC16(D) = D^16 + D^12 + D^5 + 1
            CrcAlgorithm::Crc16 => 0x1021,
            // gCRC8(D) = D^8 + D^7 + D^4 + D^3 + D + 1
            CrcAlgorithm::Crc8 => 0x9B,
        }
    }

    /// Returns the name of the variant.
    fn name(self) -> &'static str {
        match self {
            CrcAlgorithm::Crc24A => "CRC-24A",
            CrcAlgorithm::Crc24B => "CRC-24B",
            CrcAlgorithm::Crc16 => "CRC-16",
            CrcAlgorithm::Crc8 => "CRC-8",
        }
    }

    /// Returns the mask that keeps the shift register to `width` bits.
    fn mask(self) -> usize {
        (1 << self.width()) - 1
    }
}

impl std::fmt::Display for CrcAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns given payload followed by its CRC parity bits.
///
/// # Parameters
///
/// - `payload`: Bits over which the CRC must be computed.
///
/// - `algo`: CRC algorithm to be used.
///
/// # Returns
///
/// - `bits_with_crc`: Payload bits followed by `algo.width()` parity bits, MSB of the
///   remainder first. An empty payload is valid and yields `algo.width()` zero bits.
///
/// # Examples
///
/// ```
/// use lte_fec::{crc_attach, Bit, CrcAlgorithm};
/// use Bit::{One, Zero};
///
/// let payload = [One, Zero, Zero, One, Zero, Zero, Zero, Zero];
/// let bits_with_crc = crc_attach(&payload, CrcAlgorithm::Crc8);
/// assert_eq!(
///     bits_with_crc[8 ..],
///     [One, One, Zero, One, Zero, One, Zero, Zero]
/// );
/// ```
#[must_use]
pub fn crc_attach(payload: &[Bit], algo: CrcAlgorithm) -> Vec<Bit> {
    let width = algo.width();
    let mut reg = 0;
    for &bit in payload {
        reg = advance(reg, bit, algo);
    }
    // The payload is followed through the register by `width` zero bits, which turns the
    // register contents into the remainder of the zero-padded message.
    for _ in 0 .. width {
        reg = advance(reg, Bit::Zero, algo);
    }
    let mut bits_with_crc = Vec::with_capacity(payload.len() + width);
    bits_with_crc.extend_from_slice(payload);
    for i in 0 .. width {
        bits_with_crc.push(bit_from_index((reg >> (width - 1 - i)) & 1));
    }
    bits_with_crc
}

/// Strips the CRC parity bits from a block and reports whether the check passed.
///
/// # Parameters
///
/// - `bits_with_crc`: Payload bits followed by `algo.width()` parity bits.
///
/// - `algo`: CRC algorithm to be used.
///
/// # Returns
///
/// - `payload`: Input minus its last `algo.width()` bits, whether or not the check
///   passed. If the input is shorter than `algo.width()` bits, it is returned unchanged.
///
/// - `crc_ok`: `true` iff the remainder over the whole input is zero. A failed check is
///   a data outcome, not an error; the caller decides whether to consume the payload.
///
/// # Examples
///
/// ```
/// use lte_fec::{crc_attach, crc_check, Bit, CrcAlgorithm};
/// use Bit::{One, Zero};
///
/// let bits_with_crc = crc_attach(&[One, Zero, One], CrcAlgorithm::Crc16);
/// let (payload, crc_ok) = crc_check(&bits_with_crc, CrcAlgorithm::Crc16);
/// assert!(crc_ok);
/// assert_eq!(payload, [One, Zero, One]);
///
/// let corrupted: Vec<Bit> = bits_with_crc
///     .iter()
///     .enumerate()
///     .map(|(i, &b)| if i == 0 { b.flipped() } else { b })
///     .collect();
/// let (_, crc_ok) = crc_check(&corrupted, CrcAlgorithm::Crc16);
/// assert!(!crc_ok);
/// ```
#[must_use]
pub fn crc_check(bits_with_crc: &[Bit], algo: CrcAlgorithm) -> (Vec<Bit>, bool) {
    let width = algo.width();
    if bits_with_crc.len() < width {
        return (bits_with_crc.to_vec(), false);
    }
    let mut reg = 0;
    for &bit in bits_with_crc {
        reg = advance(reg, bit, algo);
    }
    let payload = bits_with_crc[.. bits_with_crc.len() - width].to_vec();
    (payload, reg == 0)
}

/// Advances the CRC shift register by one input bit.
fn advance(reg: usize, bit: Bit, algo: CrcAlgorithm) -> usize {
    let width = algo.width();
    let msb = (reg >> (width - 1)) & 1;
    let mut next = (reg << 1) & algo.mask();
    if msb != index_from_bit(bit) {
        next ^= algo.generator();
    }
    next
}

#[cfg(test)]
mod tests_of_crc_algorithm {
    use super::*;

    const ALL_ALGORITHMS: [CrcAlgorithm; 4] = [
        CrcAlgorithm::Crc24A,
        CrcAlgorithm::Crc24B,
        CrcAlgorithm::Crc16,
        CrcAlgorithm::Crc8,
    ];

    #[test]
    fn test_width() {
        assert_eq!(CrcAlgorithm::Crc24A.width(), 24);
        assert_eq!(CrcAlgorithm::Crc24B.width(), 24);
        assert_eq!(CrcAlgorithm::Crc16.width(), 16);
        assert_eq!(CrcAlgorithm::Crc8.width(), 8);
    }

    #[test]
    fn test_generator() {
        assert_eq!(CrcAlgorithm::Crc24A.generator(), 0x0086_4CFB);
        assert_eq!(CrcAlgorithm::Crc24B.generator(), 0x0080_0063);
        assert_eq!(CrcAlgorithm::Crc16.generator(), 0x1021);
        assert_eq!(CrcAlgorithm::Crc8.generator(), 0x9B);
    }

    #[test]
    fn test_generator_fits_width() {
        for algo in ALL_ALGORITHMS {
            assert!(algo.generator() <= algo.mask());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CrcAlgorithm::Crc24A.to_string(), "CRC-24A");
        assert_eq!(CrcAlgorithm::Crc24B.to_string(), "CRC-24B");
        assert_eq!(CrcAlgorithm::Crc16.to_string(), "CRC-16");
        assert_eq!(CrcAlgorithm::Crc8.to_string(), "CRC-8");
    }
}
