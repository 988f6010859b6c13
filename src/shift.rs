//! Hiragana ↔ katakana conversion via the fixed code-point offset.

use tracing::debug_span;

use crate::error::ConvertError;
use crate::script::{self, IgnoreSet, Script, LONG_VOWEL_MARK};
use crate::tables::PhoneticTables;

/// Shift `text` from the counterpart script into `target`. Punctuation,
/// spaces, and ignore-set characters pass through; the prolonged sound mark
/// is kept or expanded to its continuation vowel depending on
/// `use_long_vowel_mark`. Anything else is rejected.
pub(crate) fn shift_script(
    tables: &PhoneticTables,
    text: &str,
    target: Script,
    use_long_vowel_mark: bool,
    ignore: &IgnoreSet,
) -> Result<String, ConvertError> {
    let _span = debug_span!("shift_script", target = target.name(), use_long_vowel_mark).entered();
    let source = target.counterpart();
    let mut out = String::with_capacity(text.len());
    let mut last_emitted: Option<char> = None;

    for (position, c) in text.chars().enumerate() {
        let emitted = if ignore.contains(c) {
            c
        } else if source.contains(c) {
            target.shift_char(c)
        } else if script::is_punctuation(c) {
            c
        } else if c == LONG_VOWEL_MARK {
            let previous =
                last_emitted.ok_or(ConvertError::InvalidLongVowelPosition { position })?;
            if use_long_vowel_mark {
                LONG_VOWEL_MARK
            } else {
                // The mark is only meaningful after a kana with a vowel.
                tables
                    .long_vowel_continuation(target, previous)
                    .ok_or(ConvertError::UnrecognizedCharacter {
                        character: c,
                        position,
                    })?
            }
        } else if c == ' ' {
            c
        } else {
            return Err(ConvertError::UnrecognizedCharacter {
                character: c,
                position,
            });
        };
        out.push(emitted);
        last_emitted = Some(emitted);
    }

    if use_long_vowel_mark {
        out = contract_long_vowels(tables, target, &out);
    }
    Ok(out)
}

/// Collapse doubled vowels into the prolonged sound mark: wherever a
/// character equals the registered continuation of the one before it, the
/// second becomes ー. The scan sees its own replacements, so a vowel run
/// contracts only at its second position (アアア → アーア).
pub(crate) fn contract_long_vowels(
    tables: &PhoneticTables,
    script: Script,
    text: &str,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    for c in text.chars() {
        let continuation = previous.and_then(|p| tables.long_vowel_continuation(script, p));
        let emitted = if continuation == Some(c) {
            LONG_VOWEL_MARK
        } else {
            c
        };
        out.push(emitted);
        previous = Some(emitted);
    }
    out
}
