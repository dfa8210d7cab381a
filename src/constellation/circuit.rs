//! Ordered, cyclic collections of constellations sharing one pitch range.

use std::ops::Deref;

use crate::{Constellation, Error, Pitch, PitchRange, PitchSegment, Result};

// -------------------------------------------------------------------------------------------------

/// An ordered list of [`Constellation`]s, all enumerated within the same pitch range.
///
/// The circuit owns its constellations. Each constellation only knows its own index, which the
/// circuit uses for cyclic navigation: the constellation after the last one is the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstellationCircuit {
    pitch_range: PitchRange,
    constellations: Vec<Constellation>,
}

impl ConstellationCircuit {
    /// Create a new circuit from a list of cell groups, one group per constellation.
    pub fn new<P: Into<Pitch>>(groups: Vec<Vec<Vec<P>>>, pitch_range: PitchRange) -> Self {
        let constellations = groups
            .into_iter()
            .enumerate()
            .map(|(index, cells)| {
                let cells = cells.into_iter().map(PitchSegment::from).collect();
                Constellation::new(index, cells, pitch_range)
            })
            .collect::<Vec<_>>();
        log::debug!(
            "created constellation circuit with {} constellations in range {}",
            constellations.len(),
            pitch_range
        );
        Self {
            pitch_range,
            constellations,
        }
    }

    /// Create a new circuit from a list of cell groups in the piano range.
    pub fn with_default_range<P: Into<Pitch>>(groups: Vec<Vec<Vec<P>>>) -> Self {
        Self::new(groups, PitchRange::default())
    }

    /// The range all constellations were enumerated in.
    pub fn pitch_range(&self) -> &PitchRange {
        &self.pitch_range
    }

    /// All constellations in circuit order.
    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    /// Constellation with the given 1-based number.
    pub fn get(&self, constellation_number: usize) -> Result<&Constellation> {
        if constellation_number == 0 {
            return Err(Error::InvalidArgument(
                "constellation numbers start at 1".to_string(),
            ));
        }
        self.constellations
            .get(constellation_number - 1)
            .ok_or(Error::OutOfRange {
                what: "constellation",
                number: constellation_number,
                len: self.constellations.len(),
            })
    }

    /// Chord with the given 1-based chord number in the constellation with the given 1-based
    /// constellation number.
    pub fn get_chord(&self, constellation_number: usize, chord_number: usize) -> Result<&PitchSegment> {
        self.get(constellation_number)?.get_chord(chord_number)
    }

    /// Index of the given constellation in this circuit.
    fn index_of(&self, constellation: &Constellation) -> Result<usize> {
        let index = constellation.index();
        if self.constellations.get(index) == Some(constellation) {
            Ok(index)
        } else {
            Err(Error::ForeignConstellation {
                constellation: constellation.constellation_number(),
            })
        }
    }

    /// The constellation following the given one, wrapping around at the end.
    ///
    /// Fails with [`Error::ForeignConstellation`] when the constellation is not part of this
    /// circuit.
    pub fn next(&self, constellation: &Constellation) -> Result<&Constellation> {
        let index = self.index_of(constellation)?;
        Ok(&self.constellations[(index + 1) % self.constellations.len()])
    }

    /// The constellation preceding the given one, wrapping around at the start.
    ///
    /// Fails with [`Error::ForeignConstellation`] when the constellation is not part of this
    /// circuit.
    pub fn prev(&self, constellation: &Constellation) -> Result<&Constellation> {
        let index = self.index_of(constellation)?;
        let len = self.constellations.len();
        Ok(&self.constellations[(index + len - 1) % len])
    }

    /// The pivot chord of a constellation: the generator pitches of the next constellation.
    pub fn pivot_chord(&self, constellation: &Constellation) -> Result<PitchSegment> {
        Ok(self.next(constellation)?.generator_pitches())
    }

    /// Generator pitches of all constellations, in circuit order.
    pub fn generator_chords(&self) -> Vec<PitchSegment> {
        self.constellations
            .iter()
            .map(Constellation::generator_pitches)
            .collect()
    }

    /// Pivot chords of all constellations, in circuit order.
    pub fn pivot_chords(&self) -> Result<Vec<PitchSegment>> {
        self.constellations
            .iter()
            .map(|constellation| self.pivot_chord(constellation))
            .collect()
    }
}

impl Deref for ConstellationCircuit {
    type Target = [Constellation];

    fn deref(&self) -> &Self::Target {
        &self.constellations
    }
}

// --------------------------------------------------------------------------------------------------
