//! Period helpers for the Lissajous scope.
//!
//! Two oscillators at a frequency ratio `num:den` trace a closed figure once
//! each has completed a whole number of cycles. These helpers compute how
//! long the scope must draw before the trace repeats.

use std::f64::consts::TAU;

/// Greatest common divisor. `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple. Any zero operand gives 0.
///
/// Saturates at `u64::MAX` when the true multiple does not fit.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).checked_mul(b).unwrap_or(u64::MAX)
}

/// Reduces `num/den` to lowest terms. Degenerate ratios collapse to 1:1.
pub fn reduce_ratio(num: u64, den: u64) -> (u64, u64) {
    if num == 0 || den == 0 {
        return (1, 1);
    }
    let g = gcd(num, den);
    (num / g, den / g)
}

/// Cycles completed on each axis before the figure closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LissajousPeriod {
    pub x_cycles: u64,
    pub y_cycles: u64,
}

impl LissajousPeriod {
    /// Number of samples needed to draw one full trace.
    ///
    /// The faster axis sets the sampling density; `max_samples` caps very
    /// complex ratios.
    pub fn sample_count(&self, samples_per_cycle: usize, max_samples: usize) -> usize {
        let cycles = self.x_cycles.max(self.y_cycles) as usize;
        cycles.saturating_mul(samples_per_cycle).min(max_samples)
    }
}

/// Closing period of a two-voice Lissajous figure at ratio `num:den`.
pub fn lissajous_period(num: u64, den: u64) -> LissajousPeriod {
    let (x_cycles, y_cycles) = reduce_ratio(num, den);
    LissajousPeriod { x_cycles, y_cycles }
}

/// Phase span, in radians of the lowest voice, after which every voice in
/// a chord has completed a whole number of cycles.
///
/// Each ratio is taken relative to the same root. The chord repeats after
/// `lcm` of all reduced denominators root cycles. Chords whose span does
/// not fit in a `u64` report the saturated span.
pub fn closing_phase(ratios: &[(u64, u64)]) -> f64 {
    let root_cycles = ratios
        .iter()
        .map(|&(num, den)| reduce_ratio(num, den).1)
        .fold(1, lcm);
    TAU * root_cycles as f64
}
