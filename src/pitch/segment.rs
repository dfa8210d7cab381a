//! Ordered pitch and pitch-class collections.

use std::fmt::Display;

use derive_more::{Deref, Into};
use itertools::Itertools;

use crate::{Pitch, PitchClass};

// --------------------------------------------------------------------------------------------------

/// An ordered sequence of pitches, e.g. a cell, a chord or a melodic line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deref, Into)]
pub struct PitchSegment(Vec<Pitch>);

impl PitchSegment {
    /// Create a new segment from the given pitches, keeping their order.
    pub fn new(pitches: Vec<Pitch>) -> Self {
        Self(pitches)
    }

    /// Copy of the segment with all pitches in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut pitches = self.0.clone();
        pitches.sort();
        Self(pitches)
    }

    /// Copy of the segment with all pitches transposed by the given number of semitones.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self(self.0.iter().map(|pitch| pitch.transposed(semitones)).collect())
    }

    /// Pitch-classes of all pitches, in segment order.
    pub fn pitch_classes(&self) -> PitchClassSegment {
        self.0.iter().map(Pitch::pitch_class).collect()
    }
}

impl<P: Into<Pitch>> From<Vec<P>> for PitchSegment {
    fn from(pitches: Vec<P>) -> Self {
        Self(pitches.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<Pitch>> FromIterator<P> for PitchSegment {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for PitchSegment {
    type Item = Pitch;
    type IntoIter = std::vec::IntoIter<Pitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PitchSegment {
    type Item = &'a Pitch;
    type IntoIter = std::slice::Iter<'a, Pitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Displays pitch numbers, e.g. `[0, 2, 4.5]`.
impl Display for PitchSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().map(Pitch::number_string).join(", "))
    }
}

// --------------------------------------------------------------------------------------------------

/// An ordered sequence of pitch-classes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deref, Into)]
pub struct PitchClassSegment(Vec<PitchClass>);

impl PitchClassSegment {
    /// Create a new segment from the given pitch-classes, keeping their order.
    pub fn new(pitch_classes: Vec<PitchClass>) -> Self {
        Self(pitch_classes)
    }

    /// Distinct pitch-classes of the segment in ascending order.
    pub fn distinct(&self) -> Vec<PitchClass> {
        let mut pitch_classes = self.0.clone();
        pitch_classes.sort();
        pitch_classes.dedup();
        pitch_classes
    }
}

impl<P: Into<PitchClass>> From<Vec<P>> for PitchClassSegment {
    fn from(pitch_classes: Vec<P>) -> Self {
        Self(pitch_classes.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PitchClass>> FromIterator<P> for PitchClassSegment {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for PitchClassSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

// --------------------------------------------------------------------------------------------------

/// Either a pitch or a pitch-class segment, as passed to and returned by
/// [`ChordalSpacingSpecifier`](crate::ChordalSpacingSpecifier).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PitchCollection {
    Pitches(PitchSegment),
    PitchClasses(PitchClassSegment),
}

impl PitchCollection {
    /// Pitch-classes of the collection, in collection order.
    pub fn pitch_classes(&self) -> PitchClassSegment {
        match self {
            PitchCollection::Pitches(pitches) => pitches.pitch_classes(),
            PitchCollection::PitchClasses(pitch_classes) => pitch_classes.clone(),
        }
    }

    /// The pitches of the collection, if this is a pitch segment.
    pub fn pitches(&self) -> Option<&PitchSegment> {
        match self {
            PitchCollection::Pitches(pitches) => Some(pitches),
            PitchCollection::PitchClasses(_) => None,
        }
    }
}

impl From<PitchSegment> for PitchCollection {
    fn from(pitches: PitchSegment) -> Self {
        PitchCollection::Pitches(pitches)
    }
}

impl From<PitchClassSegment> for PitchCollection {
    fn from(pitch_classes: PitchClassSegment) -> Self {
        PitchCollection::PitchClasses(pitch_classes)
    }
}

impl Display for PitchCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PitchCollection::Pitches(pitches) => pitches.fmt(f),
            PitchCollection::PitchClasses(pitch_classes) => pitch_classes.fmt(f),
        }
    }
}

// --------------------------------------------------------------------------------------------------
