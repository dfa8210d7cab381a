//! Constellations: all octave-transposition combinations of a set of pitch cells.

use std::ops::Deref;

use itertools::Itertools;

use crate::{Error, Pitch, PitchRange, PitchSegment, Result};

pub mod circuit;

// -------------------------------------------------------------------------------------------------

/// Enumerates all candidate chords of the given cells within the pitch range.
///
/// Each cell is transposed by octaves into every position where all its pitches fit into the
/// range. The outer product of these transpositions, with the last cell varying fastest, gives
/// one candidate per combination: the chosen transpositions flattened and sorted ascending.
///
/// # Examples:
///
/// ```rust
/// use baca::{constellate, Pitch, PitchRange, PitchSegment};
/// let cells = vec![
///     PitchSegment::from(vec![0, 2, 10]),
///     PitchSegment::from(vec![16, 19, 20]),
/// ];
/// let range = PitchRange::try_from("[C4, C#7]").unwrap();
/// let chords = constellate(&cells, &range);
/// assert_eq!(chords.len(), 9);
/// assert_eq!(chords[0], PitchSegment::from(vec![0, 2, 4, 7, 8, 10]));
/// ```
pub fn constellate(cells: &[PitchSegment], range: &PitchRange) -> Vec<PitchSegment> {
    cells
        .iter()
        .map(|cell| range.octave_transpositions(cell))
        .multi_cartesian_product()
        .map(|combination| {
            let mut pitches = combination
                .into_iter()
                .flatten()
                .collect::<Vec<Pitch>>();
            pitches.sort();
            PitchSegment::new(pitches)
        })
        .collect()
}

// -------------------------------------------------------------------------------------------------

/// The enumerated candidate chords of one set of generator cells, as part of a
/// [`ConstellationCircuit`](circuit::ConstellationCircuit).
///
/// Dereferences to the list of candidate chords, so chords can be accessed with 0-based indices
/// and slices. [`get_chord`](Self::get_chord) and [`get_number_of_chord`](Self::get_number_of_chord)
/// use 1-based chord numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constellation {
    index: usize,
    cells: Vec<PitchSegment>,
    pitch_range: PitchRange,
    chords: Vec<PitchSegment>,
}

impl Constellation {
    /// Create a new constellation at the given index of its circuit, enumerating all its chords.
    pub(crate) fn new(index: usize, cells: Vec<PitchSegment>, pitch_range: PitchRange) -> Self {
        let chords = constellate(&cells, &pitch_range);
        log::debug!(
            "constellation {} with {} cells has {} chords in range {}",
            index + 1,
            cells.len(),
            chords.len(),
            pitch_range
        );
        Self {
            index,
            cells,
            pitch_range,
            chords,
        }
    }

    /// 1-based position of the constellation within its circuit.
    pub fn constellation_number(&self) -> usize {
        self.index + 1
    }

    /// 0-based position of the constellation within its circuit.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The partitioned generator pitches.
    pub fn cells(&self) -> &[PitchSegment] {
        &self.cells
    }

    /// All generator pitches, flattened and sorted ascending.
    pub fn generator_pitches(&self) -> PitchSegment {
        self.cells.iter().flatten().copied().collect::<PitchSegment>().sorted()
    }

    /// The range all chords were enumerated in.
    pub fn pitch_range(&self) -> &PitchRange {
        &self.pitch_range
    }

    /// All candidate chords.
    pub fn chords(&self) -> &[PitchSegment] {
        &self.chords
    }

    /// Access a chord by 0-based index, counting from the end for negative indices.
    pub fn at(&self, index: isize) -> Option<&PitchSegment> {
        let index = if index < 0 {
            self.chords.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        self.chords.get(index)
    }

    /// Chord with the given 1-based number.
    pub fn get_chord(&self, chord_number: usize) -> Result<&PitchSegment> {
        if chord_number == 0 {
            return Err(Error::InvalidArgument(
                "chord numbers start at 1".to_string(),
            ));
        }
        self.chords
            .get(chord_number - 1)
            .ok_or(Error::OutOfRange {
                what: "chord",
                number: chord_number,
                len: self.chords.len(),
            })
    }

    /// 1-based number of the given chord.
    ///
    /// The query is sorted before it is compared to the candidates, which are sorted too. So a
    /// chord matches regardless of the order its pitches are passed in, and `[7, 0, 4]` finds the
    /// same candidate as `[0, 4, 7]`.
    pub fn get_number_of_chord<I, P>(&self, chord: I) -> Result<usize>
    where
        I: IntoIterator<Item = P>,
        P: Into<Pitch>,
    {
        let chord = chord.into_iter().collect::<PitchSegment>().sorted();
        self.chords
            .iter()
            .position(|candidate| *candidate == chord)
            .map(|index| index + 1)
            .ok_or(Error::ChordNotFound {
                chord,
                constellation: self.constellation_number(),
            })
    }

    /// Returns true when the given pitches, in any order, form one of the candidate chords.
    pub fn contains<I, P>(&self, pitches: I) -> bool
    where
        I: IntoIterator<Item = P>,
        P: Into<Pitch>,
    {
        let pitches = pitches.into_iter().collect::<PitchSegment>().sorted();
        self.chords.contains(&pitches)
    }
}

impl Deref for Constellation {
    type Target = [PitchSegment];

    fn deref(&self) -> &Self::Target {
        &self.chords
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&[i32]]) -> Vec<PitchSegment> {
        values
            .iter()
            .map(|numbers| PitchSegment::from(numbers.to_vec()))
            .collect()
    }

    #[test]
    fn constellate_cells() -> Result<()> {
        let range = PitchRange::try_from("[C4, C#7]")?;
        let chords = constellate(&cells(&[&[0, 2, 10], &[16, 19, 20]]), &range);
        assert_eq!(chords.len(), 9);
        assert_eq!(
            chords[..4].to_vec(),
            cells(&[
                &[0, 2, 4, 7, 8, 10],
                &[0, 2, 10, 16, 19, 20],
                &[0, 2, 10, 28, 31, 32],
                &[4, 7, 8, 12, 14, 22],
            ])
        );
        for chord in &chords {
            assert_eq!(chord.len(), 6);
            assert!(range.contains_all(chord));
            assert!(chord.windows(2).all(|w| w[0] <= w[1]));
        }

        // single pitch cells
        let chords = constellate(&cells(&[&[0], &[7]]), &PitchRange::new(0, 23)?);
        assert_eq!(chords, cells(&[&[0, 7], &[0, 19], &[7, 12], &[12, 19]]));

        // no cells yield a single empty chord
        assert_eq!(constellate(&[], &range), cells(&[&[]]));

        // cells which do not fit into the range yield no chords
        assert!(constellate(&cells(&[&[0], &[0, 40]]), &range).is_empty());
        Ok(())
    }

    #[test]
    fn constellate_in_exclusive_range() -> Result<()> {
        let range = PitchRange::try_from("(C3, G6)")?;
        let cells = cells(&[&[0, 4], &[7, 11, 14]]);
        let chords = constellate(&cells, &range);
        assert_eq!(chords.len(), 9);
        assert_eq!(chords[0], PitchSegment::from(vec![-5, -1, 0, 2, 4]));
        assert_eq!(chords[8], PitchSegment::from(vec![19, 23, 24, 26, 28]));
        for chord in &chords {
            assert_eq!(chord.len(), 5);
            assert!(range.contains_all(chord));
            assert!(!chord.contains(&Pitch::from(-12)) && !chord.contains(&Pitch::from(31)));
            assert!(chord.windows(2).all(|w| w[0] <= w[1]));
        }
        Ok(())
    }

    #[test]
    fn chord_lookup() -> Result<()> {
        let range = PitchRange::try_from("[C4, C#7]")?;
        let constellation = Constellation::new(0, cells(&[&[0, 2, 10], &[16, 19, 20]]), range);
        assert_eq!(constellation.len(), 9);
        assert_eq!(constellation.constellation_number(), 1);
        assert_eq!(
            constellation.generator_pitches(),
            PitchSegment::from(vec![0, 2, 10, 16, 19, 20])
        );

        assert_eq!(
            constellation.get_chord(1)?,
            &PitchSegment::from(vec![0, 2, 4, 7, 8, 10])
        );
        assert_eq!(constellation.get_chord(9)?, &constellation[8]);
        assert_eq!(constellation.at(-1), Some(&constellation[8]));
        assert_eq!(constellation.at(-10), None);
        assert_eq!(constellation.at(9), None);
        assert!(matches!(
            constellation.get_chord(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            constellation.get_chord(10),
            Err(Error::OutOfRange { number: 10, len: 9, .. })
        ));

        for number in 1..=constellation.len() {
            let chord = constellation.get_chord(number)?.clone();
            assert_eq!(constellation.get_number_of_chord(chord)?, number);
        }
        assert_eq!(constellation.get_number_of_chord([10, 8, 7, 4, 2, 0])?, 1);
        assert_eq!(
            constellation.get_number_of_chord([0, 1, 2]),
            Err(Error::ChordNotFound {
                chord: PitchSegment::from(vec![0, 1, 2]),
                constellation: 1
            })
        );

        assert!(constellation.contains([0, 2, 4, 7, 8, 10]));
        assert!(constellation.contains([8, 10, 0, 2, 4, 7]));
        assert!(!constellation.contains([0, 2, 4]));
        Ok(())
    }
}
