// pentatone -- decaying sine tones for a five-tone scale
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

pub mod note;
pub mod output;
pub mod render;
pub mod scale;
pub mod synth;
pub mod tonegen;
pub mod wave;
