//! Conversion between the Japanese kana syllabaries and romanized text.
//!
//! Hiragana and katakana convert in both directions, as does romanji in
//! the Hepburn style. Conversions are pure functions of the input and the
//! converter's [`PhoneticTables`]; no state is kept between calls, and a
//! conversion either succeeds on the whole input or reports the first
//! offending character.
//!
//! ```
//! use romakana::Converter;
//!
//! let converter = Converter::new();
//! assert_eq!(converter.hiragana_to_katakana("らーめん")?, "ラーメン");
//! assert_eq!(converter.katakana_to_romaji("ラーメン")?, "raamen");
//! assert_eq!(converter.romaji_to_katakana("raamen")?, "ラーメン");
//! # Ok::<(), romakana::ConvertError>(())
//! ```

mod buffer;
mod converter;
mod error;
mod script;
mod shift;
mod tables;
mod to_kana;
mod to_romaji;

pub use converter::Converter;
pub use error::ConvertError;
pub use script::{is_punctuation, IgnoreSet, Script, LONG_VOWEL_MARK};
pub use tables::{PhoneticTables, TableError, DEFAULT_TABLES_TOML};

#[cfg(test)]
mod tests;
