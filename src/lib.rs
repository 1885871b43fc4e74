//! # LTE channel coding (3GPP TS 36.212)
//!
//! This crate implements the forward-error-correction chain used for control channels
//! in the 4G LTE standard for wireless broadband communication (see
//! [3GPP TS 36.212](https://www.3gpp.org/ftp/Specs/archive/36_series/36.212/)): cyclic
//! redundancy check attachment and verification, followed by a rate-1/3,
//! constraint-length-7 convolutional code with zero-tail termination, decoded by a
//! hard-decision Viterbi decoder over a pre-computed 64-state trellis.
//!
//! The [`crc_attach`] and [`crc_check`] functions handle CRC attachment and
//! verification for the four generator polynomials of TS 36.212 Section 5.1.1, selected
//! through the [`CrcAlgorithm`] enum. The [`conv_encode`] function encodes with the
//! generator polynomials held in a [`ConvCodeSpec`], and [`conv_decode_terminated`]
//! (or a reusable [`ViterbiDecoder`]) recovers the information bits. The [`Bit`] enum
//! represents binary symbol values. The code below illustrates the whole chain.
//!
//! # Examples
//!
//! ```
//! use lte_fec::{
//!     conv_decode_terminated, conv_encode, crc_attach, crc_check, Bit, ConvCodeSpec,
//!     CrcAlgorithm,
//! };
//! use Bit::{One, Zero};
//!
//! let spec = ConvCodeSpec::lte(); // Generators (133, 171, 165) in octal
//!
//! // Transmit direction
//! let payload = [One, Zero, Zero, One];
//! let frame = crc_attach(&payload, CrcAlgorithm::Crc24A);
//! let code_bits = conv_encode(&frame, &spec, true);
//! assert_eq!(code_bits.len(), 3 * (frame.len() + 6));
//!
//! // A channel error within the correction radius of the code is transparent.
//! let mut received = code_bits.clone();
//! received[5] = received[5].flipped();
//!
//! // Receive direction
//! let frame_hat = conv_decode_terminated(&received, &spec, true);
//! let (payload_hat, crc_ok) = crc_check(&frame_hat, CrcAlgorithm::Crc24A);
//! assert!(crc_ok);
//! assert_eq!(payload_hat, payload);
//! ```
//!
//! The [`utils`] module has some useful functions for exercising the chain, such as
//! random bit generation and a binary symmetric channel.

#![warn(
    clippy::complexity,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_allocation,
    unused_import_braces,
    unused_qualifications
)]

mod common;
mod conv;
mod crc;
mod trellis;
pub mod utils;
mod viterbi;

pub use common::{Bit, Error};
pub use conv::{conv_encode, ConvCodeSpec};
pub use crc::{crc_attach, crc_check, CrcAlgorithm};
pub use viterbi::{conv_decode_terminated, ViterbiDecoder};
