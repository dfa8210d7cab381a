//! LilyPond source fragments for pitches, chords and constellation circuits.
//!
//! Fragments use absolute pitches and english note names, so complete scores created here start
//! with `\language "english"`. Engraving is left to LilyPond.

use std::fmt::Write;

use crate::{Constellation, ConstellationCircuit, Pitch, PitchSegment, Result};

// -------------------------------------------------------------------------------------------------

/// LilyPond version written into score headers.
pub const LILYPOND_VERSION: &str = "2.24.0";

/// Note names for all 24 quarter-tone steps of an octave, mixed sharp/flat spelling.
const LY_PITCH_NAMES: [&str; 24] = [
    "c", "cqs", "cs", "dqf", "d", "dqs", "ef", "eqf", "e", "eqs", "f", "fqs", //
    "fs", "gqf", "g", "gqs", "af", "aqf", "a", "aqs", "bf", "bqf", "b", "bqs",
];

/// Colors of the cells in colored generator chords, cycled per cell.
const CELL_COLORS: [&str; 3] = ["red", "blue", "green"];

/// Default duration of illustrated chords.
const CHORD_DURATION: &str = "4";

// -------------------------------------------------------------------------------------------------

/// Absolute LilyPond name of the given pitch: middle C is `c'`, the C below it `c`.
pub fn pitch_name(pitch: Pitch) -> String {
    let step = (pitch.pitch_class().number() * 2).to_integer() as usize;
    let octave = pitch.octave() - 3;
    let mut name = LY_PITCH_NAMES[step].to_string();
    if octave > 0 {
        name.push_str(&"'".repeat(octave as usize));
    } else if octave < 0 {
        name.push_str(&",".repeat(octave.unsigned_abs() as usize));
    }
    name
}

fn note_with_color(pitch: Pitch, color: Option<&str>) -> String {
    match color {
        Some(color) => format!("\\tweak color #{} {}", color, pitch_name(pitch)),
        None => pitch_name(pitch),
    }
}

fn colored_notes(notes: &[(Pitch, Option<&str>)], duration: &str) -> String {
    match notes {
        [] => format!("r{}", duration),
        [(pitch, color)] => format!("{}{}", note_with_color(*pitch, *color), duration),
        _ => {
            let names = notes
                .iter()
                .map(|(pitch, color)| note_with_color(*pitch, *color))
                .collect::<Vec<_>>();
            format!("<{}>{}", names.join(" "), duration)
        }
    }
}

/// A chord with the given LilyPond duration, e.g. `<c' e' g'>4`. Single pitches become plain
/// notes, empty chords rests.
pub fn chord(pitches: &[Pitch], duration: &str) -> String {
    let notes = pitches.iter().map(|pitch| (*pitch, None)).collect::<Vec<_>>();
    colored_notes(&notes, duration)
}

/// A chord built from all pitches of the given cells, each cell's notes tweaked with its own
/// color (red, blue, green, red, ...).
pub fn colored_chord(cells: &[PitchSegment], duration: &str) -> String {
    colored_notes(&cell_notes(cells), duration)
}

fn cell_notes(cells: &[PitchSegment]) -> Vec<(Pitch, Option<&'static str>)> {
    let mut notes = cells
        .iter()
        .enumerate()
        .flat_map(|(index, cell)| {
            let color = CELL_COLORS[index % CELL_COLORS.len()];
            cell.iter().map(move |pitch| (*pitch, Some(color)))
        })
        .collect::<Vec<_>>();
    notes.sort_by_key(|(pitch, _)| *pitch);
    notes
}

// -------------------------------------------------------------------------------------------------

/// One chord of a piano staff illustration with an optional markup label above it.
struct StaffEvent {
    notes: Vec<(Pitch, Option<&'static str>)>,
    label: Option<String>,
}

impl StaffEvent {
    fn new(pitches: &[Pitch], label: Option<String>) -> Self {
        let notes = pitches.iter().map(|pitch| (*pitch, None)).collect();
        Self { notes, label }
    }
}

fn render_piano_staff(events: &[StaffEvent]) -> String {
    let mut treble = Vec::with_capacity(events.len());
    let mut bass = Vec::with_capacity(events.len());
    for event in events {
        let (upper, lower): (Vec<_>, Vec<_>) = event
            .notes
            .iter()
            .copied()
            .partition(|(pitch, _)| *pitch >= Pitch::from(0));
        let mut upper = colored_notes(&upper, CHORD_DURATION);
        if let Some(label) = &event.label {
            let _ = write!(upper, " ^\\markup {{ {} }}", label);
        }
        treble.push(upper);
        bass.push(colored_notes(&lower, CHORD_DURATION));
    }
    let mut ly = String::new();
    ly.push_str("\\new PianoStaff <<\n");
    for (clef, music) in [("treble", &treble), ("bass", &bass)] {
        let _ = writeln!(ly, "    \\new Staff {{");
        let _ = writeln!(ly, "        \\clef \"{}\"", clef);
        for item in music {
            let _ = writeln!(ly, "        {}", item);
        }
        let _ = writeln!(ly, "    }}");
    }
    ly.push_str(">>\n");
    ly
}

/// A piano staff with the given chords, split at middle C into a treble and a bass staff.
pub fn piano_staff(chords: &[PitchSegment]) -> String {
    let events = chords
        .iter()
        .map(|chord| StaffEvent::new(chord, None))
        .collect::<Vec<_>>();
    render_piano_staff(&events)
}

/// Wrap the given music expression into a complete LilyPond file.
pub fn score(music: &str) -> String {
    let mut ly = String::new();
    let _ = writeln!(ly, "\\version \"{}\"", LILYPOND_VERSION);
    ly.push_str("\\language \"english\"\n\n");
    ly.push_str("\\score {\n");
    for line in music.lines() {
        let _ = writeln!(ly, "    {}", line);
    }
    ly.push_str("    \\layout { }\n");
    ly.push_str("}\n");
    ly
}

// -------------------------------------------------------------------------------------------------

/// Score with all chords of a constellation, labeled with their chord numbers.
pub fn illustrate_constellation(constellation: &Constellation) -> String {
    let events = constellation
        .iter()
        .enumerate()
        .map(|(index, chord)| {
            let label = format!("{}-{}", constellation.constellation_number(), index + 1);
            StaffEvent::new(chord, Some(label))
        })
        .collect::<Vec<_>>();
    score(&render_piano_staff(&events))
}

/// Score with the generator chords of all constellations in the circuit.
pub fn illustrate_generator_chords(circuit: &ConstellationCircuit) -> String {
    let events = circuit
        .iter()
        .map(|constellation| {
            let label = constellation.constellation_number().to_string();
            StaffEvent::new(&constellation.generator_pitches(), Some(label))
        })
        .collect::<Vec<_>>();
    score(&render_piano_staff(&events))
}

/// Score with the generator chords of all constellations in the circuit, each cell colored.
pub fn illustrate_colored_generator_chords(circuit: &ConstellationCircuit) -> String {
    let events = circuit
        .iter()
        .map(|constellation| StaffEvent {
            notes: cell_notes(constellation.cells()),
            label: Some(constellation.constellation_number().to_string()),
        })
        .collect::<Vec<_>>();
    score(&render_piano_staff(&events))
}

/// Score with the pivot chords of all constellations in the circuit.
pub fn illustrate_pivot_chords(circuit: &ConstellationCircuit) -> Result<String> {
    let events = circuit
        .iter()
        .map(|constellation| {
            let next = circuit.next(constellation)?;
            let label = format!(
                "{}-{}",
                constellation.constellation_number(),
                next.constellation_number()
            );
            Ok(StaffEvent::new(&next.generator_pitches(), Some(label)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(score(&render_piano_staff(&events)))
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::PitchRange;
    use pretty_assertions::assert_eq;

    fn pitches(numbers: &[i32]) -> Vec<Pitch> {
        numbers.iter().map(|n| Pitch::from(*n)).collect()
    }

    #[test]
    fn pitch_names() {
        assert_eq!(pitch_name(Pitch::from(0)), "c'");
        assert_eq!(pitch_name(Pitch::from(-12)), "c");
        assert_eq!(pitch_name(Pitch::from(-13)), "b,");
        assert_eq!(pitch_name(Pitch::from(-39)), "a,,,");
        assert_eq!(pitch_name(Pitch::from(1)), "cs'");
        assert_eq!(pitch_name(Pitch::from(3)), "ef'");
        assert_eq!(pitch_name(Pitch::from(22)), "bf''");
        assert_eq!(pitch_name(Pitch::from(48)), "c'''''");
        assert_eq!(pitch_name(Pitch::from(0.5)), "cqs'");
        assert_eq!(pitch_name(Pitch::from(-0.5)), "bqs");
    }

    #[test]
    fn chords() {
        assert_eq!(chord(&pitches(&[0, 4, 7]), "4"), "<c' e' g'>4");
        assert_eq!(chord(&pitches(&[-5]), "2."), "g2.");
        assert_eq!(chord(&[], "1"), "r1");
        assert_eq!(
            colored_chord(
                &[PitchSegment::from(vec![7, 0]), PitchSegment::from(vec![4])],
                "4"
            ),
            "<\\tweak color #red c' \\tweak color #blue e' \\tweak color #red g'>4"
        );
    }

    #[test]
    fn staves() {
        let ly = piano_staff(&[
            PitchSegment::from(vec![-12, 0, 7]),
            PitchSegment::from(vec![4]),
        ]);
        assert_eq!(
            ly,
            [
                "\\new PianoStaff <<",
                "    \\new Staff {",
                "        \\clef \"treble\"",
                "        <c' g'>4",
                "        e'4",
                "    }",
                "    \\new Staff {",
                "        \\clef \"bass\"",
                "        c4",
                "        r4",
                "    }",
                ">>",
                "",
            ]
            .join("\n")
        );
        let ly = score(&ly);
        assert!(ly.starts_with("\\version \"2.24.0\"\n\\language \"english\"\n"));
        assert!(ly.contains("    \\new PianoStaff <<\n"));
        assert!(ly.ends_with("    \\layout { }\n}\n"));
    }

    #[test]
    fn illustrations() -> Result<()> {
        let circuit = ConstellationCircuit::new(
            vec![
                vec![vec![0, 2, 10], vec![16, 19, 20]],
                vec![vec![-13, 3], vec![8]],
            ],
            PitchRange::try_from("[C4, C#7]")?,
        );
        let ly = illustrate_generator_chords(&circuit);
        assert!(ly.contains("<c' d' bf' e'' g'' af''>4 ^\\markup { 1 }"));
        assert!(ly.contains("<ef' af'>4 ^\\markup { 2 }"));
        assert!(ly.contains("        b,4\n"));

        let ly = illustrate_pivot_chords(&circuit)?;
        assert!(ly.contains("<ef' af'>4 ^\\markup { 1-2 }"));
        assert!(ly.contains("^\\markup { 2-1 }"));

        let ly = illustrate_colored_generator_chords(&circuit);
        assert!(ly.contains("\\tweak color #blue af'"));
        assert!(ly.contains("\\tweak color #red b,4"));

        let ly = illustrate_constellation(circuit.get(1)?);
        assert_eq!(ly.matches("^\\markup").count(), 9);
        assert!(ly.contains("<c' d' e' g' af' bf'>4 ^\\markup { 1-1 }"));
        Ok(())
    }
}
