//! Computer-assisted composition helpers: pitch constellations, chordal spacing, and LilyPond
//! fragments to look at the results.

pub mod error;
pub use error::{Error, Result};

pub mod pitch;
pub use pitch::{range::PitchRange, segment::PitchClassSegment, segment::PitchCollection};
pub use pitch::{segment::PitchSegment, Pitch, PitchClass};

pub mod pattern;
pub use pattern::IndexPattern;

pub mod spacing;
pub use spacing::{space_down, space_up, ChordalSpacingSpecifier, Direction};

pub mod constellation;
pub use constellation::{circuit::ConstellationCircuit, constellate, Constellation};

pub mod lilypond;

pub mod prelude;

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn space_circuit_chords() -> Result<()> {
        let circuit = ConstellationCircuit::new(
            vec![
                vec![vec![0, 2, 10], vec![16, 19, 20]],
                vec![vec![3, 7], vec![8, 11, 13]],
            ],
            PitchRange::try_from("[C4, C#7]")?,
        );
        // re-voice the generator chords of all constellations
        let collections = circuit
            .generator_chords()
            .into_iter()
            .map(PitchCollection::from)
            .collect::<Vec<_>>();
        let specifier = ChordalSpacingSpecifier::new()
            .with_direction(Direction::Down)
            .with_pattern(IndexPattern::last(1));
        let spaced = specifier.apply(&collections)?;
        assert_eq!(spaced[0], collections[0]);
        assert_eq!(
            spaced[1],
            PitchCollection::from(PitchSegment::from(vec![13, 11, 8, 7, 3]))
        );

        // chord numbers round-trip through the circuit
        let chord = circuit.get_chord(1, 5)?.clone();
        assert_eq!(circuit.get(1)?.get_number_of_chord(chord)?, 5);
        Ok(())
    }
}
