//! Katakana → romanji transducer.

use tracing::debug_span;

use crate::buffer::ScanBuffer;
use crate::error::ConvertError;
use crate::script::{self, IgnoreSet, Script, LONG_VOWEL_MARK};
use crate::tables::PhoneticTables;

/// Small kana that re-color the preceding syllable with their own vowel.
const SMALL_VOWELS: [char; 5] = ['ァ', 'ィ', 'ゥ', 'ェ', 'ォ'];

/// Small kana forming palatalized digraphs with the preceding syllable.
const SMALL_Y: [char; 3] = ['ャ', 'ュ', 'ョ'];

/// Kana whose romanization already ends in a palatal consonant; a small-y
/// kana after one of these replaces the vowel outright (シ + ャ = "sha",
/// not "shya").
const PALATALIZING: [char; 4] = ['シ', 'ジ', 'チ', 'ヂ'];

/// Geminate marker (sokuon).
const SOKUON: char = 'ッ';

/// Romanize katakana. The output buffer holds one romanized symbol per
/// unit, which is what lets small kana and the prolonged sound mark rewrite
/// or echo just the vowel of the syllable before them.
pub(crate) fn katakana_to_romaji(
    tables: &PhoneticTables,
    text: &str,
    ignore: &IgnoreSet,
) -> Result<String, ConvertError> {
    let _span = debug_span!("katakana_to_romaji", chars = text.chars().count()).entered();
    let mut buf = ScanBuffer::new();
    let mut double_next_consonant = false;
    let mut previous: Option<char> = None;

    for (position, c) in text.chars().enumerate() {
        let unrecognized = ConvertError::UnrecognizedCharacter {
            character: c,
            position,
        };
        if ignore.contains(c) || c == ' ' {
            buf.push(c);
        } else if SMALL_VOWELS.contains(&c) {
            let parts = tables.romaji_decomposition(c).ok_or(unrecognized.clone())?;
            if !buf.replace_last(parts[0].clone()) {
                return Err(unrecognized);
            }
        } else if SMALL_Y.contains(&c) {
            let parts = tables.romaji_decomposition(c).ok_or(unrecognized.clone())?;
            let vowel = parts.get(1).ok_or(unrecognized.clone())?.clone();
            if previous.is_some_and(|p| PALATALIZING.contains(&p)) {
                if buf.pop().is_none() {
                    return Err(unrecognized);
                }
            } else if !buf.replace_last("y") {
                return Err(unrecognized);
            }
            buf.push(vowel);
        } else if let Some(latin) = script::punctuation_to_latin(c) {
            buf.push(latin);
        } else if c == SOKUON {
            double_next_consonant = true;
        } else if c == LONG_VOWEL_MARK {
            let last = buf
                .last()
                .ok_or(ConvertError::InvalidLongVowelPosition { position })?
                .to_string();
            buf.push(last);
        } else if Script::Katakana.contains(c) {
            let parts = tables.romaji_decomposition(c).ok_or(unrecognized)?;
            if double_next_consonant {
                buf.push(parts[0].clone());
                double_next_consonant = false;
            }
            for part in parts {
                buf.push(part.clone());
            }
        } else {
            return Err(unrecognized);
        }
        previous = Some(c);
    }

    Ok(buf.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romanize(text: &str) -> Result<String, ConvertError> {
        let tables = PhoneticTables::embedded();
        katakana_to_romaji(&tables, text, &IgnoreSet::new())
    }

    #[test]
    fn test_plain_syllables() {
        assert_eq!(romanize("ネコ").unwrap(), "neko");
        assert_eq!(romanize("カンジ").unwrap(), "kanji");
        assert_eq!(romanize("オハヨウ").unwrap(), "ohayou");
        assert_eq!(romanize("").unwrap(), "");
    }

    #[test]
    fn test_long_vowel_mark_echo() {
        assert_eq!(romanize("キー").unwrap(), "kii");
        assert_eq!(romanize("キャー").unwrap(), "kyaa");
        assert_eq!(romanize("ラーメン").unwrap(), "raamen");
    }

    #[test]
    fn test_gemination() {
        assert_eq!(romanize("カッパ").unwrap(), "kappa");
        assert_eq!(romanize("チャット").unwrap(), "chatto");
        assert_eq!(romanize("ヤッター").unwrap(), "yattaa");
    }

    #[test]
    fn test_small_y_digraphs() {
        // After a palatalizing kana the digraph replaces the vowel.
        assert_eq!(romanize("シャ").unwrap(), "sha");
        assert_eq!(romanize("ジョ").unwrap(), "jo");
        assert_eq!(romanize("チュ").unwrap(), "chu");
        // Elsewhere a "y" bridges consonant and vowel.
        assert_eq!(romanize("キャ").unwrap(), "kya");
        assert_eq!(romanize("リョ").unwrap(), "ryo");
    }

    #[test]
    fn test_small_vowel_recolor() {
        assert_eq!(romanize("ティ").unwrap(), "ti");
        assert_eq!(romanize("ファ").unwrap(), "fa");
        assert_eq!(romanize("フォーム").unwrap(), "foomu");
    }

    #[test]
    fn test_punctuation_mapping() {
        assert_eq!(romanize("ネコ。").unwrap(), "neko.");
        assert_eq!(romanize("ア、イ").unwrap(), "a,i");
        // The middle dot disappears.
        assert_eq!(romanize("アン・ド").unwrap(), "ando");
        assert_eq!(romanize("「ネコ」").unwrap(), "\"neko\"");
    }

    #[test]
    fn test_space_passthrough() {
        assert_eq!(romanize("ネコ イヌ").unwrap(), "neko inu");
    }

    #[test]
    fn test_ignore_set() {
        let tables = PhoneticTables::embedded();
        let out = katakana_to_romaji(&tables, "カ-キ", &IgnoreSet::from("-")).unwrap();
        assert_eq!(out, "ka-ki");
    }

    #[test]
    fn test_hiragana_rejected() {
        assert_eq!(
            romanize("ねこ").unwrap_err(),
            ConvertError::UnrecognizedCharacter {
                character: 'ね',
                position: 0
            }
        );
    }

    #[test]
    fn test_leading_small_kana_fails() {
        assert!(romanize("ャア").is_err());
        assert!(romanize("ィ").is_err());
    }

    #[test]
    fn test_leading_mark_fails() {
        assert_eq!(
            romanize("ーア").unwrap_err(),
            ConvertError::InvalidLongVowelPosition { position: 0 }
        );
    }
}
