// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `tonegen` writes one wav file per note and octave plus one file with all of them in pitch order.

use std::process;

use log::error;
use structopt::StructOpt;

use pentatone::tonegen::{self, Opt};

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = simple_logger::init_with_level(opt.log_level()) {
        eprintln!("could not set up logging: {}", err);
    }

    if let Err(err) = tonegen::run() {
        error!("{}", err);
        process::exit(1);
    }
}
