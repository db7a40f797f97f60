// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use std::f64::consts::PI;

/// A sine oscillator sampled at a fixed sample rate.
///
/// Every sample is computed from its index, so there is no phase error
/// accumulating over the length of a tone.
#[derive(Debug, Clone)]
pub struct Oscillator {
    sample_rate: f64,
    frequency: f64,
}

impl Oscillator {
    pub fn new(sample_rate: f64, frequency: f64) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }

    /// Value of the wave at the given sample index.
    ///
    /// # Examples
    ///
    /// ```
    /// use pentatone::synth::oscillator::Oscillator;
    ///
    /// let osc = Oscillator::new(4.0, 1.0); // 4 samples per period
    /// assert_eq!(osc.sample_at(0), 0.0);
    /// assert_eq!(osc.sample_at(1), 1.0);
    /// ```
    pub fn sample_at(&self, index: usize) -> f64 {
        let time = index as f64 / self.sample_rate;
        (2.0 * PI * self.frequency * time).sin()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stays_in_range() {
        let osc = Oscillator::new(44100.0, 261.63);
        for index in 0..10_000 {
            let sample = osc.sample_at(index);
            assert!(sample >= -1.0 && sample <= 1.0);
        }
    }

    #[test]
    fn period_repeats() {
        // 100 samples per period
        let osc = Oscillator::new(8000.0, 80.0);
        for index in 0..100 {
            assert!((osc.sample_at(index) - osc.sample_at(index + 100)).abs() < 1e-9);
        }
    }
}
