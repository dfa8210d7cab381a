//! Error type shared by all pitch, constellation and spacing operations.

use derive_more::{Display, Error};

use crate::{PitchClass, PitchClassSegment, PitchSegment};

// -------------------------------------------------------------------------------------------------

/// Errors raised by the crate. None of them are recoverable: all operations either fully
/// succeed or fail with one of these.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum Error {
    /// A malformed pitch name, pitch range or an invalid 1-based number.
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[error(not(source))] String),

    /// A 1-based lookup past the end of a constellation or circuit.
    #[display("{what} number {number} is out of range (1..={len})")]
    OutOfRange {
        what: &'static str,
        number: usize,
        len: usize,
    },

    /// A requested bass or soprano pitch-class is not part of the spaced collection.
    #[display("{role} pitch-class {pitch_class} not in collection {available}")]
    MissingPitchClass {
        role: &'static str,
        pitch_class: PitchClass,
        #[error(not(source))]
        available: PitchClassSegment,
    },

    /// Reverse chord lookup found no matching candidate chord.
    #[display("chord {chord} not in constellation {constellation}")]
    ChordNotFound {
        #[error(not(source))]
        chord: PitchSegment,
        constellation: usize,
    },

    /// A constellation was passed to a circuit it does not belong to.
    #[display("constellation {constellation} is not part of this circuit")]
    ForeignConstellation { constellation: usize },

    /// An internal guard which should be unreachable was hit.
    #[display("internal consistency error: {_0}")]
    InternalConsistency(#[error(not(source))] String),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
