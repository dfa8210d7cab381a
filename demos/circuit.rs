use simplelog::*;

use baca::{lilypond, prelude::*};

fn main() -> anyhow::Result<()> {
    // init logging
    TermLogger::init(
        log::LevelFilter::Debug,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    // eight constellations of three cells each
    let circuit = ConstellationCircuit::new(
        vec![
            vec![vec![-12, -10, 4], vec![-2, 8, 11, 17], vec![19, 27, 30, 33, 37]],
            vec![vec![-12, -10, -8], vec![-5, 4, 8, 11], vec![20, 27, 30, 33, 37]],
            vec![vec![-8, 2, 15, 25], vec![-1, 20, 29, 31], vec![0, 10, 21, 42]],
            vec![vec![-8, 2, 10, 21], vec![0, 11, 32, 41], vec![15, 25, 42, 44]],
            vec![vec![-12, -9, 13], vec![-5, 8, 11, 17], vec![20, 28, 30, 33, 37]],
            vec![vec![-10, -3, 13], vec![-8, 4, 11, 17], vec![19, 27, 30, 33, 38]],
            vec![vec![-8, 2, 15, 25], vec![-1, 18, 29, 31], vec![0, 10, 21, 42]],
            vec![vec![-8, 2, 10, 21], vec![0, 11, 32, 41], vec![15, 25, 42, 43]],
        ],
        PitchRange::try_from("[A0, C8]")?,
    );

    for constellation in circuit.iter() {
        println!(
            "constellation {}: {} chords, generator {}, pivot {}",
            constellation.constellation_number(),
            constellation.len(),
            constellation.generator_pitches(),
            circuit.pivot_chord(constellation)?
        );
    }

    // look up a chord by its number and back
    let first = circuit.get(1)?;
    let chord = first.get_chord(first.len() / 2 + 1)?;
    let number = first.get_number_of_chord(chord.iter().copied())?;
    println!("chord 1-{}: {}", number, chord);

    // re-voice the generator chords downwards, pinning bass and soprano
    let collections = circuit
        .generator_chords()
        .into_iter()
        .map(|chord| PitchCollection::from(chord.pitch_classes()))
        .collect::<Vec<_>>();
    let specifier = ChordalSpacingSpecifier::new()
        .with_direction(Direction::Down)
        .with_pattern(IndexPattern::first(4));
    for (index, spaced) in specifier.apply(&collections)?.iter().enumerate() {
        println!("spaced {}: {}", index + 1, spaced);
    }

    // print or write a score with all generator chords
    let score = lilypond::illustrate_colored_generator_chords(&circuit);
    match std::env::args().nth(1) {
        Some(path) => std::fs::write(path, score)?,
        None => println!("{}", score),
    }
    Ok(())
}
