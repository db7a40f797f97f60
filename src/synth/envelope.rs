// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

/// An exponential fade starting at full amplitude.
/// The amplitude after `t` seconds is `exp(-rate * t)`.
///
/// # Example
///
/// ```
/// use pentatone::synth::envelope::*;
/// let e = Decay { rate: 2.0 };
/// assert_eq!(e.eval(0.0), 1.0);
/// assert_eq!(e.eval(0.5), (-1.0f64).exp());
///
/// let flat = Decay { rate: 0.0 };
/// assert_eq!(flat.eval(10.0), 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Decay {
    /// Decay per second, larger values fade faster.
    pub rate: f64,
}

impl Decay {
    pub fn eval(&self, seconds: f64) -> f64 {
        (-self.rate * seconds).exp()
    }
}
