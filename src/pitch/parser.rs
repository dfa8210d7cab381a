use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

use num_rational::Rational32;
use num_traits::Zero;

use crate::{Error, Pitch, Result};

// -------------------------------------------------------------------------------------------------

#[derive(Parser)]
#[grammar = "pitch/pitch.pest"]
struct PitchParser;

// -------------------------------------------------------------------------------------------------

/// Bounds of a parsed pitch range string: `(start, start_inclusive, stop, stop_inclusive)`.
pub(crate) type RangeBounds = (Pitch, bool, Pitch, bool);

/// Parse a single pitch name such as `C#4` or `Bb-1`.
pub(crate) fn parse_pitch(input: &str) -> Result<Pitch> {
    let mut pairs = PitchParser::parse(Rule::pitch, input)
        .map_err(|err| Error::InvalidArgument(format!("invalid pitch name '{input}': {err}")))?;
    let pitch = pairs
        .next()
        .and_then(|pitch| pitch.into_inner().next())
        .ok_or_else(|| Error::InvalidArgument(format!("invalid pitch name '{input}'")))?;
    pitch_from_pair(pitch)
}

/// Parse a bracketed range string such as `[C4, C#7]` or `[A0, C8)`.
pub(crate) fn parse_range(input: &str) -> Result<RangeBounds> {
    let mut pairs = PitchParser::parse(Rule::range, input)
        .map_err(|err| Error::InvalidArgument(format!("invalid pitch range '{input}': {err}")))?;
    let range = pairs
        .next()
        .ok_or_else(|| Error::InvalidArgument(format!("invalid pitch range '{input}'")))?;

    let mut start_inclusive = true;
    let mut stop_inclusive = true;
    let mut pitches = Vec::with_capacity(2);
    for pair in range.into_inner() {
        match pair.as_rule() {
            Rule::open_bound => start_inclusive = pair.as_str() == "[",
            Rule::close_bound => stop_inclusive = pair.as_str() == "]",
            Rule::pitch_name => pitches.push(pitch_from_pair(pair)?),
            _ => (),
        }
    }
    // errors here should be unreachable unless there is a bug in the pest grammar
    match pitches[..] {
        [start, stop] => Ok((start, start_inclusive, stop, stop_inclusive)),
        _ => Err(Error::InvalidArgument(format!(
            "invalid pitch range '{input}': expected two pitches"
        ))),
    }
}

// -------------------------------------------------------------------------------------------------

fn pitch_from_pair(pair: Pair<Rule>) -> Result<Pitch> {
    let name = pair.as_str().to_string();
    let mut semitones = Rational32::zero();
    let mut octave = 4;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::letter => {
                let value = match inner.as_str().to_ascii_lowercase().as_str() {
                    "c" => 0,
                    "d" => 2,
                    "e" => 4,
                    "f" => 5,
                    "g" => 7,
                    "a" => 9,
                    "b" => 11,
                    other => {
                        return Err(Error::InvalidArgument(format!(
                            "invalid pitch name '{name}' - letter '{other}' is invalid"
                        )))
                    }
                };
                semitones += Rational32::from_integer(value);
            }
            Rule::semitone => {
                let value = match inner.as_str() {
                    "##" => 2,
                    "#" => 1,
                    "bb" => -2,
                    _ => -1,
                };
                semitones += Rational32::from_integer(value);
            }
            Rule::quartertone => {
                let sign = if inner.as_str() == "+" { 1 } else { -1 };
                semitones += Rational32::new(sign, 2);
            }
            Rule::octave => {
                octave = inner.as_str().parse::<i32>().map_err(|err| {
                    Error::InvalidArgument(format!("invalid pitch name '{name}': {err}"))
                })?;
                if !(-1..=9).contains(&octave) {
                    return Err(Error::InvalidArgument(format!(
                        "invalid pitch name '{name}' - octave '{octave}' is out of range"
                    )));
                }
            }
            _ => (),
        }
    }
    Ok(Pitch::from(
        semitones + Rational32::from_integer((octave - 4) * 12),
    ))
}
