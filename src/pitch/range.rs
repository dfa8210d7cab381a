//! Pitch ranges with inclusive or exclusive bounds.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;

use super::parser;
use crate::{Error, Pitch, PitchSegment, Result};

// --------------------------------------------------------------------------------------------------

// map of well known instrument ranges with a few aliases (sounding pitch)
lazy_static! {
    static ref NAMED_RANGES: HashMap<&'static str, &'static str> = {
        HashMap::from([
            ("piano", "[A0, C8]"),
            ("harp", "[B0, G#7]"),
            ("violin", "[G3, G7]"),
            ("viola", "[C3, D6]"),
            ("cello", "[C2, G5]"),
            ("violoncello", "[C2, G5]"),
            ("contrabass", "[C1, G4]"),
            ("bass", "[C1, G4]"),
            ("flute", "[C4, D7]"),
            ("oboe", "[Bb3, A6]"),
            ("bassoon", "[Bb1, Eb5]"),
            ("horn", "[B1, F5]"),
            ("trumpet", "[F#3, D6]"),
            ("trombone", "[E2, Eb5]"),
            ("tuba", "[D1, F4]"),
            ("guitar", "[E2, E5]"),
            ("marimba", "[F2, C7]"),
            ("vibraphone", "[F3, F6]"),
        ])
    };
}

/// return list of all known named range names.
pub fn range_names() -> String {
    let mut names = NAMED_RANGES.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names.join(", ")
}

// --------------------------------------------------------------------------------------------------

/// A range of absolute pitches, e.g. the playable range of an instrument.
///
/// Ranges are written in bracket notation: `[C4, C#7]` includes both bounds, `[A0, C8)`
/// excludes the upper one. Well known instrument names such as `"piano"` resolve to their
/// ranges too.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PitchRange {
    start: Pitch,
    start_inclusive: bool,
    stop: Pitch,
    stop_inclusive: bool,
}

impl Default for PitchRange {
    /// The piano range `[A0, C8]`.
    fn default() -> Self {
        Self {
            start: Pitch::from(-39),
            start_inclusive: true,
            stop: Pitch::from(48),
            stop_inclusive: true,
        }
    }
}

impl PitchRange {
    /// Create a new closed range `[start, stop]`.
    pub fn new<S: Into<Pitch>, E: Into<Pitch>>(start: S, stop: E) -> Result<Self> {
        Self::with_bounds(start.into(), true, stop.into(), true)
    }

    /// Create a new range with explicit inclusive or exclusive bounds.
    pub fn with_bounds(
        start: Pitch,
        start_inclusive: bool,
        stop: Pitch,
        stop_inclusive: bool,
    ) -> Result<Self> {
        let is_empty = if start_inclusive && stop_inclusive {
            start > stop
        } else {
            start >= stop
        };
        if is_empty {
            return Err(Error::InvalidArgument(format!(
                "pitch range start '{}' must be below its stop '{}'",
                start, stop
            )));
        }
        Ok(Self {
            start,
            start_inclusive,
            stop,
            stop_inclusive,
        })
    }

    /// Look up a well known instrument range by name.
    pub fn named(name: &str) -> Result<Self> {
        let range = NAMED_RANGES
            .get(name.trim().to_ascii_lowercase().as_str())
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown pitch range '{}'. Valid names are: {}",
                    name,
                    range_names()
                ))
            })?;
        Self::try_from(*range)
    }

    /// Lowest pitch of the range.
    pub fn start(&self) -> Pitch {
        self.start
    }

    /// Highest pitch of the range.
    pub fn stop(&self) -> Pitch {
        self.stop
    }

    /// true when the lower bound is part of the range.
    pub fn is_start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    /// true when the upper bound is part of the range.
    pub fn is_stop_inclusive(&self) -> bool {
        self.stop_inclusive
    }

    /// Returns true when the given pitch lies within the range.
    pub fn contains<P: Into<Pitch>>(&self, pitch: P) -> bool {
        let pitch = pitch.into();
        self.is_above_start(pitch) && self.is_below_stop(pitch)
    }

    /// Returns true when all given pitches lie within the range.
    pub fn contains_all(&self, pitches: &[Pitch]) -> bool {
        pitches.iter().all(|pitch| self.contains(*pitch))
    }

    /// All octave transpositions of the given pitches which fit into the range, from the lowest
    /// to the highest one. An empty cell has exactly one, empty, transposition.
    pub fn octave_transpositions(&self, pitches: &[Pitch]) -> Vec<PitchSegment> {
        let (Some(lowest), Some(highest)) = (pitches.iter().min(), pitches.iter().max()) else {
            return vec![PitchSegment::default()];
        };
        // start with the lowest octave shift that brings the lowest pitch to or below our start
        let mut octaves = ((self.start.number() - lowest.number()) / 12)
            .floor()
            .to_integer();
        let mut transpositions = Vec::new();
        while self.is_below_stop(highest.transposed(octaves * 12)) {
            let transposition = pitches
                .iter()
                .map(|pitch| pitch.transposed(octaves * 12))
                .collect::<Vec<_>>();
            if self.contains_all(&transposition) {
                transpositions.push(PitchSegment::from(transposition));
            }
            octaves += 1;
        }
        transpositions
    }

    fn is_above_start(&self, pitch: Pitch) -> bool {
        if self.start_inclusive {
            pitch >= self.start
        } else {
            pitch > self.start
        }
    }

    fn is_below_stop(&self, pitch: Pitch) -> bool {
        if self.stop_inclusive {
            pitch <= self.stop
        } else {
            pitch < self.stop
        }
    }
}

impl TryFrom<&str> for PitchRange {
    type Error = Error;

    /// Try converting the given bracket notation or instrument name to a pitch range.
    fn try_from(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('[') || trimmed.starts_with('(') {
            let (start, start_inclusive, stop, stop_inclusive) = parser::parse_range(trimmed)?;
            Self::with_bounds(start, start_inclusive, stop, stop_inclusive)
        } else {
            Self::named(trimmed)
        }
    }
}

impl FromStr for PitchRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl Display for PitchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.start_inclusive { "[" } else { "(" },
            self.start,
            self.stop,
            if self.stop_inclusive { "]" } else { ")" }
        )
    }
}

// --------------------------------------------------------------------------------------------------
