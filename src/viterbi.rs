//! Hard-decision Viterbi decoder for the zero-terminated convolutional code
//!
//! The decoder recovers the maximum-likelihood information sequence from hard-decision
//! code bits under the Hamming metric. A forward add-compare-select pass accumulates
//! path metrics over the 64 trellis states and records the surviving predecessor of
//! each state at each step; a traceback pass then walks the predecessors backward from
//! state 0, which the encoder's zero tail guarantees to be the correct terminal state.
//!
//! # Examples
//!
//! ```
//! use lte_fec::{conv_decode_terminated, conv_encode, Bit, ConvCodeSpec};
//! use Bit::{One, Zero};
//!
//! let spec = ConvCodeSpec::lte();
//! let info_bits = [One, Zero, One, One, Zero, Zero, One, Zero];
//! let code_bits = conv_encode(&info_bits, &spec, true);
//! let info_bits_hat = conv_decode_terminated(&code_bits, &spec, true);
//! assert_eq!(info_bits_hat, info_bits);
//! ```

use crate::common::index_from_bit;
use crate::conv::NUM_OUTPUT_BITS;
use crate::trellis::{Trellis, NUM_STATES};
use crate::{Bit, ConvCodeSpec};

/// Cumulative path metrics for all trellis states
#[derive(Debug)]
struct PathMetrics {
    /// Metric for each state at the current time instant
    val: Vec<i64>,
    /// Metric for each state at the next time instant
    next_val: Vec<i64>,
}

impl PathMetrics {
    /// Returns path metrics for a decoder starting in state 0.
    ///
    /// Unreached states carry `sentinel`, which must exceed the largest metric any
    /// real path can accumulate so that a reached state always wins the comparison.
    fn new(sentinel: i64) -> Self {
        let mut val = vec![sentinel; NUM_STATES];
        val[0] = 0;
        Self {
            val,
            next_val: vec![0; NUM_STATES],
        }
    }

    /// Makes the metrics computed for the next time instant current.
    fn advance(&mut self) {
        std::mem::swap(&mut self.val, &mut self.next_val);
    }
}

/// Surviving predecessor of each state at each time instant
#[derive(Debug)]
struct PrevStateTable {
    /// Predecessor state indices, one row of [`NUM_STATES`] entries per time instant
    entries: Vec<u8>,
}

impl PrevStateTable {
    /// Returns an all-zero table for given number of time instants.
    fn new(num_steps: usize) -> Self {
        Self {
            entries: vec![0; num_steps * NUM_STATES],
        }
    }

    /// Records the surviving predecessor of a state at a time instant.
    fn set(&mut self, step: usize, state: usize, pred: u8) {
        self.entries[step * NUM_STATES + state] = pred;
    }

    /// Returns the surviving predecessor of a state at a time instant.
    fn get(&self, step: usize, state: usize) -> usize {
        usize::from(self.entries[step * NUM_STATES + state])
    }
}

/// Hard-decision maximum-likelihood decoder for a zero-terminated convolutional code
///
/// Binding a [`ConvCodeSpec`] compiles the trellis tables once; the decoder can then be
/// shared by reference and used for any number of [`decode`](ViterbiDecoder::decode)
/// calls, each of which owns its own scratch state.
#[derive(Debug)]
pub struct ViterbiDecoder {
    /// Code specification the decoder was built for
    spec: ConvCodeSpec,
    /// Pre-computed trellis tables
    trellis: Trellis,
}

impl ViterbiDecoder {
    /// Returns decoder for given code specification.
    ///
    /// # Examples
    ///
    /// ```
    /// use lte_fec::{ConvCodeSpec, ViterbiDecoder};
    ///
    /// let decoder = ViterbiDecoder::new(&ConvCodeSpec::lte());
    /// assert!(decoder.decode(&[], true).is_empty());
    /// ```
    #[must_use]
    pub fn new(spec: &ConvCodeSpec) -> Self {
        Self {
            spec: *spec,
            trellis: Trellis::new(spec),
        }
    }

    /// Returns information bit decisions for given hard-decision code bits.
    ///
    /// # Parameters
    ///
    /// - `code_bits`: Received code bits from an encoder run with termination. Any
    ///   trailing bits beyond the last group of three are discarded silently.
    ///
    /// - `drop_tail`: If `true`, the six decisions produced by the tail bits are
    ///   removed, leaving only the caller's information bits.
    ///
    /// # Returns
    ///
    /// - `info_bits_hat`: Maximum-likelihood information bit decisions; one per group
    ///   of three code bits, minus the six tail decisions if `drop_tail` is set.
    ///   Decoding never fails: an input shorter than three bits yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use lte_fec::{conv_encode, Bit, ConvCodeSpec, ViterbiDecoder};
    /// use Bit::{One, Zero};
    ///
    /// let spec = ConvCodeSpec::lte();
    /// let decoder = ViterbiDecoder::new(&spec);
    /// let info_bits = [Zero, One, One, Zero, One];
    /// let code_bits = conv_encode(&info_bits, &spec, true);
    /// assert_eq!(decoder.decode(&code_bits, true), info_bits);
    /// ```
    #[must_use]
    pub fn decode(&self, code_bits: &[Bit], drop_tail: bool) -> Vec<Bit> {
        let num_steps = code_bits.len() / NUM_OUTPUT_BITS;
        if num_steps == 0 {
            return Vec::new();
        }
        let prev_state = self.forward_pass(code_bits, num_steps);
        let mut info_bits_hat = self.traceback(&prev_state, num_steps);
        if drop_tail {
            info_bits_hat.truncate(num_steps.saturating_sub(self.spec.memory()));
        }
        info_bits_hat
    }

    /// Runs the add-compare-select recursion and returns the predecessor table.
    // OK to cast: `num_steps` is bounded by the input length.
    #[allow(clippy::cast_possible_wrap)]
    fn forward_pass(&self, code_bits: &[Bit], num_steps: usize) -> PrevStateTable {
        let sentinel = 3 * num_steps as i64 + 1;
        let mut metrics = PathMetrics::new(sentinel);
        let mut prev_state = PrevStateTable::new(num_steps);
        for step in 0 .. num_steps {
            let received = &code_bits[NUM_OUTPUT_BITS * step .. NUM_OUTPUT_BITS * (step + 1)];
            for state in 0 .. NUM_STATES {
                let input_index = index_from_bit(self.trellis.u_for_state[state]);
                let pred0 = usize::from(self.trellis.pred0[state]);
                let pred1 = usize::from(self.trellis.pred1[state]);
                let cand0 = metrics.val[pred0]
                    + branch_distance(&self.trellis.out_bits[pred0][input_index], received);
                let cand1 = metrics.val[pred1]
                    + branch_distance(&self.trellis.out_bits[pred1][input_index], received);
                // Strict comparison: on a tie the even predecessor survives.
                if cand1 < cand0 {
                    metrics.next_val[state] = cand1;
                    prev_state.set(step, state, self.trellis.pred1[state]);
                } else {
                    metrics.next_val[state] = cand0;
                    prev_state.set(step, state, self.trellis.pred0[state]);
                }
            }
            metrics.advance();
        }
        prev_state
    }

    /// Walks the predecessor table backward from state 0 and emits bit decisions.
    fn traceback(&self, prev_state: &PrevStateTable, num_steps: usize) -> Vec<Bit> {
        let mut info_bits_hat = vec![Bit::Zero; num_steps];
        let mut state = 0;
        for step in (0 .. num_steps).rev() {
            info_bits_hat[step] = self.trellis.u_for_state[state];
            state = prev_state.get(step, state);
        }
        info_bits_hat
    }
}

/// Returns Hamming distance between a branch's output bits and the received bits.
// OK to cast: the distance is at most 3.
#[allow(clippy::cast_possible_wrap)]
fn branch_distance(branch_bits: &[Bit; NUM_OUTPUT_BITS], received: &[Bit]) -> i64 {
    branch_bits
        .iter()
        .zip(received.iter())
        .filter(|&(x, y)| x != y)
        .count() as i64
}

/// Returns information bit decisions from the hard-decision Viterbi decoder.
///
/// One-shot form of [`ViterbiDecoder::decode`] that builds the trellis on every call;
/// callers decoding many frames with the same code should hold a [`ViterbiDecoder`]
/// instead.
///
/// # Parameters
///
/// - `code_bits`: Received code bits from an encoder run with termination.
///
/// - `spec`: Code specification holding the generator polynomials.
///
/// - `drop_tail`: If `true`, the six decisions produced by the tail bits are removed.
///
/// # Returns
///
/// - `info_bits_hat`: Maximum-likelihood information bit decisions.
///
/// # Examples
///
/// ```
/// use lte_fec::{conv_decode_terminated, conv_encode, Bit, ConvCodeSpec};
/// use Bit::{One, Zero};
///
/// let spec = ConvCodeSpec::lte();
/// let code_bits = conv_encode(&[One, One, Zero, One], &spec, true);
/// assert_eq!(
///     conv_decode_terminated(&code_bits, &spec, true),
///     [One, One, Zero, One]
/// );
/// ```
#[must_use]
pub fn conv_decode_terminated(code_bits: &[Bit], spec: &ConvCodeSpec, drop_tail: bool) -> Vec<Bit> {
    ViterbiDecoder::new(spec).decode(code_bits, drop_tail)
}
