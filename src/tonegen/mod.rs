// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Implementation of the tone generator (tonegen).

use std::path::Path;

use structopt::StructOpt;

use crate::render::{self, RenderError, Rendering};
use crate::scale::Scale;
use crate::wave::ToneSettings;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tonegen",
    about = "Render the notes of the five-tone scale as decaying sine waves"
)]
pub struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: usize,
}

impl Opt {
    pub fn log_level(&self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Render the default scale into the current directory.
pub fn run() -> Result<Rendering, RenderError> {
    let scale = Scale::default();
    let settings = ToneSettings::default();
    render::render_scale(&scale, &settings, Path::new("."))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity() {
        let quiet = Opt::from_iter(&["tonegen"]);
        assert_eq!(quiet.log_level(), log::Level::Info);
        let debug = Opt::from_iter(&["tonegen", "-v"]);
        assert_eq!(debug.log_level(), log::Level::Debug);
        let trace = Opt::from_iter(&["tonegen", "-vvv"]);
        assert_eq!(trace.log_level(), log::Level::Trace);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Opt::from_iter_safe(&["tonegen", "--output", "x.wav"]).is_err());
    }
}
