//! Numbered pitches and pitch-classes with quarter-tone resolution.

use std::{fmt::Display, str::FromStr};

use derive_more::Into;
use num_rational::Rational32;
use num_traits::{Signed, Zero};

use crate::{Error, Result};

mod parser;

pub mod range;
pub mod segment;

// -------------------------------------------------------------------------------------------------

/// Pitch names for all 24 quarter-tone steps of an octave, using mixed accidental spelling.
/// `+` marks a quarter-tone sharp, `~` a quarter-tone flat.
const PITCH_NAMES: [&str; 24] = [
    "C", "C+", "C#", "D~", "D", "D+", "Eb", "E~", "E", "E+", "F", "F+", //
    "F#", "G~", "G", "G+", "Ab", "A~", "A", "A+", "Bb", "B~", "B", "B+",
];

/// Octave number of pitch 0 (middle C).
pub const MIDDLE_C_OCTAVE: i32 = 4;

/// Round the given number to the nearest quarter-tone.
fn quantize(number: Rational32) -> Rational32 {
    (number * 2).round() / 2
}

/// Format a pitch or pitch-class number the way numbered pitches are usually written:
/// integers without fraction, quarter-tones with a `.5` suffix.
pub(crate) fn format_number(number: Rational32) -> String {
    if number.is_integer() {
        number.to_integer().to_string()
    } else {
        let sign = if number.is_negative() { "-" } else { "" };
        format!("{}{}.5", sign, number.abs().trunc().to_integer())
    }
}

// -------------------------------------------------------------------------------------------------

/// A numbered pitch: semitones above (or below) middle C, which is pitch 0 = `C4`.
///
/// Values are quantized to quarter-tones, so `Pitch::from(2.5)` is a quarter-tone above `D4`.
///
/// Pitches can also be created from names in the form `C4` (plain), `C#4` (sharps), `Db4`
/// (flats), `C+4` / `D~4` (quarter-tone sharp / flat). A missing octave means octave 4.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct Pitch(Rational32);

impl Pitch {
    /// Create a new pitch from the given semitone number, rounded to a quarter-tone.
    pub fn new(number: Rational32) -> Self {
        Self(quantize(number))
    }

    /// Create a pitch from a pitch-class in the given octave: `(pc, 4)` lies in `[0, 12)`.
    pub fn from_pitch_class_and_octave(pitch_class: PitchClass, octave: i32) -> Self {
        Self(pitch_class.number() + Rational32::from_integer((octave - MIDDLE_C_OCTAVE) * 12))
    }

    /// Semitone number relative to middle C.
    pub fn number(&self) -> Rational32 {
        self.0
    }

    /// The pitch-class of this pitch.
    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::new(self.0)
    }

    /// The pitch's octave number, where middle C starts octave 4.
    pub fn octave(&self) -> i32 {
        (self.0 / 12).floor().to_integer() + MIDDLE_C_OCTAVE
    }

    /// Return a new pitch, transposed by the given number of semitones.
    #[must_use]
    pub fn transposed<N: Into<Rational32>>(&self, semitones: N) -> Self {
        Self::new(self.0 + semitones.into())
    }

    /// Number formatted as `6`, `-13` or `2.5`.
    pub fn number_string(&self) -> String {
        format_number(self.0)
    }
}

impl From<Rational32> for Pitch {
    fn from(number: Rational32) -> Self {
        Self::new(number)
    }
}

impl From<i32> for Pitch {
    fn from(number: i32) -> Self {
        Self(Rational32::from_integer(number))
    }
}

impl From<f64> for Pitch {
    fn from(number: f64) -> Self {
        Self(Rational32::new((number * 2.0).round() as i32, 2))
    }
}

impl TryFrom<&str> for Pitch {
    type Error = Error;

    /// Try converting the given pitch name to a Pitch value.
    fn try_from(s: &str) -> Result<Self> {
        parser::parse_pitch(s)
    }
}

impl FromStr for Pitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s)
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = (self.pitch_class().number() * 2).to_integer() as usize;
        write!(f, "{}{}", PITCH_NAMES[step], self.octave())
    }
}

// -------------------------------------------------------------------------------------------------

/// A pitch number reduced modulo 12, always in range `[0, 12)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Into)]
pub struct PitchClass(Rational32);

impl PitchClass {
    /// Create a new pitch-class from any pitch number, wrapping it into `[0, 12)`.
    pub fn new(number: Rational32) -> Self {
        let twelve = Rational32::from_integer(12);
        let mut number = quantize(number) % twelve;
        if number < Rational32::zero() {
            number += twelve;
        }
        Self(number)
    }

    /// Pitch-class number in range `[0, 12)`.
    pub fn number(&self) -> Rational32 {
        self.0
    }

    /// Return a new pitch-class, transposed by the given number of semitones.
    #[must_use]
    pub fn transposed<N: Into<Rational32>>(&self, semitones: N) -> Self {
        Self::new(self.0 + semitones.into())
    }
}

impl From<Rational32> for PitchClass {
    fn from(number: Rational32) -> Self {
        Self::new(number)
    }
}

impl From<i32> for PitchClass {
    fn from(number: i32) -> Self {
        Self::new(Rational32::from_integer(number))
    }
}

impl From<f64> for PitchClass {
    fn from(number: f64) -> Self {
        Self::new(Rational32::new((number * 2.0).round() as i32, 2))
    }
}

impl From<Pitch> for PitchClass {
    fn from(pitch: Pitch) -> Self {
        pitch.pitch_class()
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_number(self.0))
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pitch_numbers() {
        assert_eq!(Pitch::from(0).octave(), 4);
        assert_eq!(Pitch::from(11).octave(), 4);
        assert_eq!(Pitch::from(12).octave(), 5);
        assert_eq!(Pitch::from(-1).octave(), 3);
        assert_eq!(Pitch::from(-13).octave(), 2);
        assert_eq!(Pitch::from(-13).pitch_class(), PitchClass::from(11));
        assert_eq!(Pitch::from(2.5).number(), Rational32::new(5, 2));
        assert_eq!(Pitch::from(2.4), Pitch::from(2.5));
        assert_eq!(Pitch::from(7).transposed(-12), Pitch::from(-5));
        assert_eq!(
            Pitch::from_pitch_class_and_octave(PitchClass::from(9), 2),
            Pitch::from(-15)
        );
    }

    #[test]
    fn pitch_classes() {
        assert_eq!(PitchClass::from(-1), PitchClass::from(11));
        assert_eq!(PitchClass::from(24), PitchClass::from(0));
        assert_eq!(PitchClass::from(-0.5), PitchClass::from(11.5));
        assert_eq!(PitchClass::from(10).transposed(3), PitchClass::from(1));
        assert_eq!(PitchClass::from(6).to_string(), "6");
        assert_eq!(PitchClass::from(6.5).to_string(), "6.5");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(Pitch::from(-13).number_string(), "-13");
        assert_eq!(Pitch::from(-2.5).number_string(), "-2.5");
        assert_eq!(Pitch::from(0.5).number_string(), "0.5");
    }

    #[test]
    fn pitch_serialization() {
        assert_eq!(Pitch::from(0).to_string(), "C4");
        assert_eq!(Pitch::from(1).to_string(), "C#4");
        assert_eq!(Pitch::from(3).to_string(), "Eb4");
        assert_eq!(Pitch::from(-6).to_string(), "F#3");
        assert_eq!(Pitch::from(-39).to_string(), "A0");
        assert_eq!(Pitch::from(48).to_string(), "C8");
        assert_eq!(Pitch::from(1.5).to_string(), "D~4");
        assert_eq!(Pitch::from(11.5).to_string(), "B+4");
    }

    #[test]
    fn pitch_deserialization() -> Result<()> {
        assert!(Pitch::try_from("x4").is_err());
        assert!(Pitch::try_from("c.2").is_err());
        assert!(Pitch::try_from("c##b2").is_err());
        assert!(Pitch::try_from("C12").is_err());
        assert!(Pitch::try_from("").is_err());

        assert_eq!(Pitch::try_from("C4")?, Pitch::from(0));
        assert_eq!(Pitch::try_from("c")?, Pitch::from(0));
        assert_eq!(Pitch::try_from("C#7")?, Pitch::from(37));
        assert_eq!(Pitch::try_from("A0")?, Pitch::from(-39));
        assert_eq!(Pitch::try_from("C8")?, Pitch::from(48));
        assert_eq!(Pitch::try_from("Cb4")?, Pitch::from(-1));
        assert_eq!(Pitch::try_from("bb2")?, Pitch::from(-14));
        assert_eq!(Pitch::try_from("F##3")?, Pitch::from(-5));
        assert_eq!(Pitch::try_from("D~4")?, Pitch::from(1.5));
        assert_eq!(Pitch::try_from("C#+4")?, Pitch::from(1.5));
        assert_eq!(Pitch::try_from("B-1")?, Pitch::from(-49));
        assert_eq!(" G5 ".parse::<Pitch>()?, Pitch::from(19));

        for number in -20..20 {
            let pitch = Pitch::from(number as f64 / 2.0);
            assert_eq!(Pitch::try_from(pitch.to_string().as_str())?, pitch);
        }
        Ok(())
    }
}
