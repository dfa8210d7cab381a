//! The baca prelude.
//!
//! The purpose of this module is to alleviate imports of common baca types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use baca::prelude::*;
//! ```

pub use super::{
    // all public types to enumerate constellations
    constellation::{circuit::ConstellationCircuit, constellate, Constellation},
    // all public types to space pitch collections
    spacing::{space_down, space_up, ChordalSpacingSpecifier, Direction},
    // all public basic types
    Error,
    IndexPattern,
    Pitch,
    PitchClass,
    PitchClassSegment,
    PitchCollection,
    PitchRange,
    PitchSegment,
    Result,
};
