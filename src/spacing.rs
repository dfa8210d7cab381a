//! Chordal spacing: realize pitch-class collections as tightly spaced concrete voicings.

use num_rational::Rational32;

use crate::{
    pitch::MIDDLE_C_OCTAVE, Error, IndexPattern, Pitch, PitchClass, PitchClassSegment,
    PitchCollection, PitchSegment, Result,
};

// -------------------------------------------------------------------------------------------------

/// Maximum number of steps a chromatic walk may take before giving up.
const MAX_WALK_ITERATIONS: usize = 999;

/// Number of quarter-tone steps in an octave. Walks scan all of them, so quarter-tone
/// pitch-classes are picked up as well as semitone ones.
const QUARTER_TONES_PER_OCTAVE: i32 = 24;

// -------------------------------------------------------------------------------------------------

/// Voicing direction of a [`ChordalSpacingSpecifier`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Start at the bass and stack upwards.
    #[default]
    Up,
    /// Start at the soprano and stack downwards.
    Down,
}

// -------------------------------------------------------------------------------------------------

/// Order the given pitch-classes by walking upwards around the chromatic circle, starting at
/// `start`: each step picks the nearest remaining pitch-class above the previously picked one.
/// The returned list starts with `start`.
pub fn sort_pitch_classes_ascending(
    start: PitchClass,
    pitch_classes: &[PitchClass],
) -> Result<Vec<PitchClass>> {
    walk_pitch_classes(start, pitch_classes, Direction::Up)
}

/// Order the given pitch-classes by walking downwards around the chromatic circle, starting at
/// `start`: each step picks the nearest remaining pitch-class below the previously picked one.
/// The returned list starts with `start`.
pub fn sort_pitch_classes_descending(
    start: PitchClass,
    pitch_classes: &[PitchClass],
) -> Result<Vec<PitchClass>> {
    walk_pitch_classes(start, pitch_classes, Direction::Down)
}

fn walk_pitch_classes(
    start: PitchClass,
    pitch_classes: &[PitchClass],
    direction: Direction,
) -> Result<Vec<PitchClass>> {
    let step = match direction {
        Direction::Up => Rational32::new(1, 2),
        Direction::Down => Rational32::new(-1, 2),
    };
    let mut pool = pitch_classes.to_vec();
    let mut result = Vec::with_capacity(pool.len() + 1);
    result.push(start);
    let mut current = start;
    let mut iterations = 0;
    while !pool.is_empty() {
        iterations += 1;
        if iterations > MAX_WALK_ITERATIONS {
            return Err(Error::InternalConsistency(format!(
                "chromatic walk from {} got stuck with {} pitch-classes left",
                start,
                pool.len()
            )));
        }
        for offset in 0..QUARTER_TONES_PER_OCTAVE {
            let candidate = current.transposed(step * offset);
            if let Some(position) = pool.iter().position(|pc| *pc == candidate) {
                pool.remove(position);
                result.push(candidate);
                current = candidate;
                break;
            }
        }
    }
    Ok(result)
}

// -------------------------------------------------------------------------------------------------

/// Distinct pitch-classes of the given collection, after checking that the requested bass and
/// soprano are part of it.
fn checked_pitch_classes(
    pitch_classes: &[PitchClass],
    bass: Option<PitchClass>,
    soprano: Option<PitchClass>,
) -> Result<Vec<PitchClass>> {
    let mut distinct = pitch_classes.to_vec();
    distinct.sort();
    distinct.dedup();
    for (role, pitch_class) in [("bass", bass), ("soprano", soprano)] {
        if let Some(pitch_class) = pitch_class {
            if !distinct.contains(&pitch_class) {
                return Err(Error::MissingPitchClass {
                    role,
                    pitch_class,
                    available: PitchClassSegment::new(distinct),
                });
            }
        }
    }
    Ok(distinct)
}

/// Pitch-classes other than the explicit bass and soprano.
fn inner_pitch_classes(
    pitch_classes: &[PitchClass],
    bass: Option<PitchClass>,
    soprano: Option<PitchClass>,
) -> Vec<PitchClass> {
    pitch_classes
        .iter()
        .filter(|pc| Some(**pc) != bass && Some(**pc) != soprano)
        .copied()
        .collect()
}

/// Space the given pitch-classes upwards: the bass (or the lowest inner pitch-class) lands in
/// octave 4 and every following pitch is the nearest one at or above its predecessor. The
/// soprano, when given, ends the voicing.
pub fn space_up(
    pitch_classes: &[PitchClass],
    bass: Option<PitchClass>,
    soprano: Option<PitchClass>,
) -> Result<PitchSegment> {
    let pitch_classes = checked_pitch_classes(pitch_classes, bass, soprano)?;
    let mut inner = inner_pitch_classes(&pitch_classes, bass, soprano);
    let mut soprano = soprano;
    let anchor = if let Some(bass) = bass {
        bass
    } else if !inner.is_empty() {
        inner.remove(0)
    } else if let Some(soprano) = soprano.take() {
        soprano
    } else {
        return Ok(PitchSegment::default());
    };
    let mut ordered = sort_pitch_classes_ascending(anchor, &inner)?;
    if let Some(soprano) = soprano {
        ordered.push(soprano);
    }
    let mut pitches: Vec<Pitch> = Vec::with_capacity(ordered.len());
    for pitch_class in ordered {
        let pitch = match pitches.last() {
            None => Pitch::from_pitch_class_and_octave(pitch_class, MIDDLE_C_OCTAVE),
            Some(previous) => {
                let candidate = Pitch::from_pitch_class_and_octave(pitch_class, previous.octave());
                if candidate >= *previous {
                    candidate
                } else {
                    Pitch::from_pitch_class_and_octave(pitch_class, previous.octave() + 1)
                }
            }
        };
        pitches.push(pitch);
    }
    log::trace!("spaced {:?} upwards to {}", pitch_classes, PitchSegment::new(pitches.clone()));
    Ok(PitchSegment::new(pitches))
}

/// Space the given pitch-classes downwards: the soprano (or the lowest inner pitch-class) comes
/// first and every following pitch is the nearest one at or below its predecessor. The bass,
/// when given, ends the voicing. The result is transposed by octaves so that its lowest pitch
/// lies in octave 4 or above.
pub fn space_down(
    pitch_classes: &[PitchClass],
    bass: Option<PitchClass>,
    soprano: Option<PitchClass>,
) -> Result<PitchSegment> {
    let pitch_classes = checked_pitch_classes(pitch_classes, bass, soprano)?;
    let mut inner = inner_pitch_classes(&pitch_classes, bass, soprano);
    let mut bass = bass;
    let anchor = if let Some(soprano) = soprano {
        soprano
    } else if !inner.is_empty() {
        inner.remove(0)
    } else if let Some(bass) = bass.take() {
        bass
    } else {
        return Ok(PitchSegment::default());
    };
    let mut ordered = sort_pitch_classes_descending(anchor, &inner)?;
    if let Some(bass) = bass {
        ordered.push(bass);
    }
    let mut pitches: Vec<Pitch> = Vec::with_capacity(ordered.len());
    for pitch_class in ordered {
        let pitch = match pitches.last() {
            None => Pitch::from_pitch_class_and_octave(pitch_class, MIDDLE_C_OCTAVE),
            Some(previous) => {
                let candidate = Pitch::from_pitch_class_and_octave(pitch_class, previous.octave());
                if candidate <= *previous {
                    candidate
                } else {
                    Pitch::from_pitch_class_and_octave(pitch_class, previous.octave() - 1)
                }
            }
        };
        pitches.push(pitch);
    }
    let mut segment = PitchSegment::new(pitches);
    while segment
        .last()
        .is_some_and(|lowest| lowest.octave() < MIDDLE_C_OCTAVE)
    {
        segment = segment.transposed(12);
    }
    log::trace!("spaced {:?} downwards to {}", pitch_classes, segment);
    Ok(segment)
}

// -------------------------------------------------------------------------------------------------

/// Realizes pitch-class collections as tightly spaced chords, with an optional fixed bass and
/// soprano pitch-class.
///
/// # Examples:
///
/// ```rust
/// use baca::{ChordalSpacingSpecifier, PitchClassSegment, PitchSegment};
/// let specifier = ChordalSpacingSpecifier::new().with_bass(6).with_soprano(7);
/// let collection = PitchClassSegment::from(vec![-6, -3, -5, -1, -7]).into();
/// assert_eq!(
///     specifier.space(&collection).unwrap(),
///     PitchSegment::from(vec![6, 9, 11, 17, 19])
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChordalSpacingSpecifier {
    bass: Option<PitchClass>,
    soprano: Option<PitchClass>,
    direction: Direction,
    pattern: Option<IndexPattern>,
}

impl ChordalSpacingSpecifier {
    /// Create a new specifier which spaces all collections upwards without bass or soprano.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new specifier with the given bass pitch-class.
    #[must_use]
    pub fn with_bass<P: Into<PitchClass>>(mut self, bass: P) -> Self {
        self.bass = Some(bass.into());
        self
    }

    /// Return a new specifier with the given soprano pitch-class.
    #[must_use]
    pub fn with_soprano<P: Into<PitchClass>>(mut self, soprano: P) -> Self {
        self.soprano = Some(soprano.into());
        self
    }

    /// Return a new specifier with the given voicing direction.
    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Return a new specifier which only spaces collections selected by the given pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: IndexPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn bass(&self) -> Option<PitchClass> {
        self.bass
    }

    pub fn soprano(&self) -> Option<PitchClass> {
        self.soprano
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pattern(&self) -> Option<&IndexPattern> {
        self.pattern.as_ref()
    }

    /// Space a single collection, ignoring the pattern.
    pub fn space(&self, collection: &PitchCollection) -> Result<PitchSegment> {
        let pitch_classes = collection.pitch_classes();
        match self.direction {
            Direction::Up => space_up(&pitch_classes, self.bass, self.soprano),
            Direction::Down => space_down(&pitch_classes, self.bass, self.soprano),
        }
    }

    /// Space all collections selected by the pattern (all of them, when there is no pattern).
    /// Unselected collections are passed through unchanged.
    pub fn apply(&self, collections: &[PitchCollection]) -> Result<Vec<PitchCollection>> {
        let total_length = collections.len();
        collections
            .iter()
            .enumerate()
            .map(|(index, collection)| {
                let selected = self
                    .pattern
                    .as_ref()
                    .map_or(true, |pattern| pattern.matches_index(index, total_length));
                if selected {
                    Ok(PitchCollection::Pitches(self.space(collection)?))
                } else {
                    Ok(collection.clone())
                }
            })
            .collect()
    }
}

// --------------------------------------------------------------------------------------------------
