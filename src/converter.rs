//! Public conversion facade.

use crate::error::ConvertError;
use crate::script::{IgnoreSet, Script};
use crate::shift::shift_script;
use crate::tables::PhoneticTables;
use crate::{to_kana, to_romaji};

/// Stateless converter between hiragana, katakana, and romanji.
///
/// A `Converter` owns the phonetic tables every conversion consults and
/// nothing else. [`Converter::new`] uses the embedded defaults;
/// [`Converter::with_tables`] accepts tables loaded from a file.
///
/// Every conversion either succeeds on the whole input or returns the
/// first [`ConvertError`]; no partial output is produced.
pub struct Converter {
    tables: PhoneticTables,
}

impl Converter {
    /// A converter backed by the embedded default tables.
    pub fn new() -> Self {
        Self {
            tables: PhoneticTables::embedded(),
        }
    }

    /// A converter backed by caller-supplied tables.
    pub fn with_tables(tables: PhoneticTables) -> Self {
        Self { tables }
    }

    /// The tables this converter consults.
    pub fn tables(&self) -> &PhoneticTables {
        &self.tables
    }

    /// Convert hiragana to katakana, writing repeated vowels with the
    /// long-vowel mark (ああ → アー).
    pub fn hiragana_to_katakana(&self, text: &str) -> Result<String, ConvertError> {
        self.hiragana_to_katakana_with(text, true, &IgnoreSet::new())
    }

    /// [`hiragana_to_katakana`](Self::hiragana_to_katakana) with explicit
    /// long-vowel-mark handling and an ignore set. With
    /// `use_long_vowel_mark` off, a ー in the input is expanded to the
    /// vowel it prolongs instead of passed through.
    pub fn hiragana_to_katakana_with(
        &self,
        text: &str,
        use_long_vowel_mark: bool,
        ignore: &IgnoreSet,
    ) -> Result<String, ConvertError> {
        shift_script(&self.tables, text, Script::Katakana, use_long_vowel_mark, ignore)
    }

    /// Convert katakana to hiragana, expanding the long-vowel mark to the
    /// vowel it prolongs (アー → ああ).
    pub fn katakana_to_hiragana(&self, text: &str) -> Result<String, ConvertError> {
        self.katakana_to_hiragana_with(text, false, &IgnoreSet::new())
    }

    /// [`katakana_to_hiragana`](Self::katakana_to_hiragana) with explicit
    /// long-vowel-mark handling and an ignore set.
    pub fn katakana_to_hiragana_with(
        &self,
        text: &str,
        use_long_vowel_mark: bool,
        ignore: &IgnoreSet,
    ) -> Result<String, ConvertError> {
        shift_script(&self.tables, text, Script::Hiragana, use_long_vowel_mark, ignore)
    }

    /// Romanize hiragana text (おはよう → "ohayou").
    pub fn hiragana_to_romaji(&self, text: &str) -> Result<String, ConvertError> {
        self.hiragana_to_romaji_with(text, &IgnoreSet::new())
    }

    /// [`hiragana_to_romaji`](Self::hiragana_to_romaji) with an ignore set.
    /// Shifts the text to katakana first, then romanizes it.
    pub fn hiragana_to_romaji_with(
        &self,
        text: &str,
        ignore: &IgnoreSet,
    ) -> Result<String, ConvertError> {
        let katakana = shift_script(&self.tables, text, Script::Katakana, true, ignore)?;
        to_romaji::katakana_to_romaji(&self.tables, &katakana, ignore)
    }

    /// Romanize katakana text (ラーメン → "raamen").
    pub fn katakana_to_romaji(&self, text: &str) -> Result<String, ConvertError> {
        self.katakana_to_romaji_with(text, &IgnoreSet::new())
    }

    /// [`katakana_to_romaji`](Self::katakana_to_romaji) with an ignore set.
    pub fn katakana_to_romaji_with(
        &self,
        text: &str,
        ignore: &IgnoreSet,
    ) -> Result<String, ConvertError> {
        to_romaji::katakana_to_romaji(&self.tables, text, ignore)
    }

    /// Convert romanized text to katakana, contracting repeated vowels to
    /// the long-vowel mark ("kyaa" → キャー).
    pub fn romaji_to_katakana(&self, text: &str) -> Result<String, ConvertError> {
        self.romaji_to_katakana_with(text, true, &IgnoreSet::new())
    }

    /// [`romaji_to_katakana`](Self::romaji_to_katakana) with explicit
    /// long-vowel-mark handling and an ignore set.
    pub fn romaji_to_katakana_with(
        &self,
        text: &str,
        use_long_vowel_mark: bool,
        ignore: &IgnoreSet,
    ) -> Result<String, ConvertError> {
        to_kana::romaji_to_katakana(&self.tables, text, use_long_vowel_mark, ignore)
    }

    /// Convert romanized text to hiragana ("neko" → ねこ). Repeated vowels
    /// stay written out, matching hiragana orthography.
    pub fn romaji_to_hiragana(&self, text: &str) -> Result<String, ConvertError> {
        self.romaji_to_hiragana_with(text, false, &IgnoreSet::new())
    }

    /// [`romaji_to_hiragana`](Self::romaji_to_hiragana) with explicit
    /// long-vowel-mark handling and an ignore set. Converts to katakana
    /// first, then shifts script; the flag applies to both stages.
    pub fn romaji_to_hiragana_with(
        &self,
        text: &str,
        use_long_vowel_mark: bool,
        ignore: &IgnoreSet,
    ) -> Result<String, ConvertError> {
        let katakana = to_kana::romaji_to_katakana(&self.tables, text, use_long_vowel_mark, ignore)?;
        shift_script(
            &self.tables,
            &katakana,
            Script::Hiragana,
            use_long_vowel_mark,
            ignore,
        )
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
