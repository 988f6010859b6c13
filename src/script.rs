//! Character-level classification for the two kana scripts.

use std::collections::HashSet;

/// Code-point distance between a hiragana character and its katakana
/// counterpart (あ U+3042 → ア U+30A2).
pub(crate) const SCRIPT_OFFSET: u32 = 0x60;

/// The prolonged sound mark ー (U+30FC). Lives in the katakana block but is
/// written in hiragana text as well, so it is handled outside the main
/// ranges in every scanner.
pub const LONG_VOWEL_MARK: char = 'ー';

/// Japanese punctuation passed through by the script shifter and mapped to
/// Latin equivalents by the romanizer.
const PUNCTUATION: [char; 5] = ['、', '。', '・', '「', '」'];

/// One of the two kana syllabaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    /// Check the main syllabary range: U+3041..=U+3096 for hiragana,
    /// U+30A1..=U+30F6 for katakana. These are exactly the ranges related
    /// by `SCRIPT_OFFSET`; block-level extras (ー, ゝ, ・) fall outside and
    /// get their own handling.
    pub fn contains(self, c: char) -> bool {
        match self {
            Script::Hiragana => ('\u{3041}'..='\u{3096}').contains(&c),
            Script::Katakana => ('\u{30A1}'..='\u{30F6}').contains(&c),
        }
    }

    /// The other syllabary.
    pub fn counterpart(self) -> Script {
        match self {
            Script::Hiragana => Script::Katakana,
            Script::Katakana => Script::Hiragana,
        }
    }

    /// Shift a character from the counterpart script into this one.
    /// Callers check `counterpart().contains(c)` first; out-of-range input
    /// comes back unchanged.
    pub fn shift_char(self, c: char) -> char {
        let shifted = match self {
            Script::Hiragana => c as u32 - SCRIPT_OFFSET,
            Script::Katakana => c as u32 + SCRIPT_OFFSET,
        };
        char::from_u32(shifted).unwrap_or(c)
    }

    /// Lowercase name used as the table key in the TOML data ("hiragana" /
    /// "katakana").
    pub(crate) fn name(self) -> &'static str {
        match self {
            Script::Hiragana => "hiragana",
            Script::Katakana => "katakana",
        }
    }
}

/// Recognized Japanese punctuation (、。・「」).
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Latin rendering of a Japanese punctuation glyph. The middle dot has no
/// Latin equivalent and maps to the empty string; both corner brackets
/// collapse to a straight quote.
pub(crate) fn punctuation_to_latin(c: char) -> Option<&'static str> {
    match c {
        '、' => Some(","),
        '。' => Some("."),
        '・' => Some(""),
        '「' | '」' => Some("\""),
        _ => None,
    }
}

/// Japanese rendering of a Latin punctuation character. The straight quote
/// cannot distinguish open from close, so it maps to the bracket pair.
pub(crate) fn latin_to_punctuation(c: char) -> Option<&'static str> {
    match c {
        ',' => Some("、"),
        '.' => Some("。"),
        '"' => Some("「」"),
        _ => None,
    }
}

/// Characters a caller wants copied through a conversion verbatim instead
/// of classified, e.g. markup or ASCII digits embedded in kana text.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet(HashSet<char>);

impl IgnoreSet {
    /// The empty set, the default for every conversion.
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<char> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for IgnoreSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}
