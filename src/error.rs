//! Conversion failure type shared by every transliteration entry point.

/// A conversion rejects its input as a whole: no partial output is ever
/// returned. Positions are char indices into the text handed to the failing
/// stage (for romanji input, the caller's original string).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The character cannot be classified for the requested conversion:
    /// outside the source script's main range, not recognized punctuation,
    /// not the long-vowel mark, not a space, not in the ignore set, or
    /// missing from the phonetic tables.
    #[error("unrecognized character {character:?} at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },

    /// The long-vowel mark needs a preceding unit to extend and none was
    /// emitted yet.
    #[error("long-vowel mark at position {position} has nothing to extend")]
    InvalidLongVowelPosition { position: usize },
}
