//! Romanji → katakana transducer.

use tracing::{debug, debug_span};

use crate::buffer::ScanBuffer;
use crate::error::ConvertError;
use crate::script::{self, IgnoreSet, Script};
use crate::shift::contract_long_vowels;
use crate::tables::PhoneticTables;

const VOWELS: [char; 5] = ['a', 'i', 'u', 'e', 'o'];
const SOKUON: &str = "ッ";
const MORAIC_NASAL: &str = "ン";

/// A normalized character paired with the char index of the original it
/// came from, so errors point into the caller's text even after
/// substitutions that grow the string (x → ks).
type Sourced = (char, usize);

/// A consonant (or cluster) waiting for its vowel. Keeps the character and
/// position that opened it for error reporting.
struct Pending {
    key: String,
    character: char,
    position: usize,
}

impl Pending {
    fn new(c: char, position: usize) -> Self {
        Self {
            key: c.to_string(),
            character: c,
            position,
        }
    }

    fn unrecognized(&self) -> ConvertError {
        ConvertError::UnrecognizedCharacter {
            character: self.character,
            position: self.position,
        }
    }
}

/// Convert romanized text to katakana. Words are independent: scan state
/// never crosses whitespace, and converted words rejoin with single spaces.
pub(crate) fn romaji_to_katakana(
    tables: &PhoneticTables,
    text: &str,
    use_long_vowel_mark: bool,
    ignore: &IgnoreSet,
) -> Result<String, ConvertError> {
    let _span = debug_span!(
        "romaji_to_katakana",
        chars = text.chars().count(),
        use_long_vowel_mark
    )
    .entered();

    let normalized = normalize(text, ignore);
    let mut words: Vec<String> = Vec::new();
    for word in normalized.split(|&(c, _)| c.is_whitespace()) {
        if word.is_empty() {
            continue;
        }
        let mut kana = convert_word(tables, word, ignore)?;
        if use_long_vowel_mark {
            kana = contract_long_vowels(tables, Script::Katakana, &kana);
        }
        words.push(kana);
    }
    debug!(words = words.len(), "romaji scan complete");
    Ok(words.join(" "))
}

/// Lowercase, then apply the orthographic substitutions: `c` not followed
/// by `h` becomes `k`, `x` → `ks`, `q` → `k`, `l` → `r`, `v` → `b`.
/// Ignore-set characters are exempt from substitution (membership is
/// checked against the lowercased text).
fn normalize(text: &str, ignore: &IgnoreSet) -> Vec<Sourced> {
    let mut lowered: Vec<Sourced> = Vec::new();
    for (index, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            lowered.push((lower, index));
        }
    }

    let mut out = Vec::with_capacity(lowered.len());
    for (k, &(c, index)) in lowered.iter().enumerate() {
        if ignore.contains(c) {
            out.push((c, index));
            continue;
        }
        match c {
            'c' if lowered.get(k + 1).map(|&(next, _)| next) != Some('h') => {
                out.push(('k', index));
            }
            'x' => {
                out.push(('k', index));
                out.push(('s', index));
            }
            'q' => out.push(('k', index)),
            'l' => out.push(('r', index)),
            'v' => out.push(('b', index)),
            _ => out.push((c, index)),
        }
    }
    out
}

fn convert_word(
    tables: &PhoneticTables,
    word: &[Sourced],
    ignore: &IgnoreSet,
) -> Result<String, ConvertError> {
    let mut buf = ScanBuffer::new();
    let mut pending: Option<Pending> = None;

    for (k, &(c, position)) in word.iter().enumerate() {
        if ignore.contains(c) {
            flush_word_end(tables, &mut buf, pending.take())?;
            buf.push(c);
        } else if let Some(mapped) = script::latin_to_punctuation(c) {
            flush_word_end(tables, &mut buf, pending.take())?;
            buf.push(mapped);
        } else if VOWELS.contains(&c) {
            let key = pending.take().map(|p| p.key).unwrap_or_default();
            let kana =
                tables
                    .kana_for(&key, c)
                    .ok_or(ConvertError::UnrecognizedCharacter {
                        character: c,
                        position,
                    })?;
            buf.push(kana);
        } else if c.is_ascii_alphabetic() {
            pending = match pending.take() {
                None => Some(Pending::new(c, position)),
                Some(mut p) => {
                    if c == 'y' {
                        // Unconditional: an unresolvable key like "shy"
                        // surfaces at the next vowel lookup.
                        p.key.push('y');
                        Some(p)
                    } else if word[k - 1].0 == c {
                        let marker = if matches!(c, 'n' | 'm') {
                            MORAIC_NASAL
                        } else {
                            SOKUON
                        };
                        buf.push(marker);
                        Some(Pending::new(c, position))
                    } else {
                        let mut extended = p.key.clone();
                        extended.push(c);
                        if tables.has_consonant_key(&extended) {
                            p.key = extended;
                            Some(p)
                        } else {
                            flush_mid_word(tables, &mut buf, &p)?;
                            Some(Pending::new(c, position))
                        }
                    }
                }
            };
        } else {
            return Err(ConvertError::UnrecognizedCharacter {
                character: c,
                position,
            });
        }
    }

    flush_word_end(tables, &mut buf, pending.take())?;
    Ok(buf.concat())
}

/// A pending consonant displaced mid-word by an unrelated consonant
/// resolves with its default "u" vowel; "t" has no bare "u" mapping and
/// hardcodes ト.
fn flush_mid_word(
    tables: &PhoneticTables,
    buf: &mut ScanBuffer,
    p: &Pending,
) -> Result<(), ConvertError> {
    if p.key == "t" {
        buf.push("ト");
    } else {
        let kana = tables.kana_for(&p.key, 'u').ok_or_else(|| p.unrecognized())?;
        buf.push(kana);
    }
    Ok(())
}

/// Flush at end of word, or when an ignore character or punctuation
/// interrupts a syllable: "t" → ト; "m" → pop the unit the doubling rule
/// pre-emitted (if any) and append ム; "n" → ン; anything else takes its
/// "u" pairing.
fn flush_word_end(
    tables: &PhoneticTables,
    buf: &mut ScanBuffer,
    pending: Option<Pending>,
) -> Result<(), ConvertError> {
    let Some(p) = pending else {
        return Ok(());
    };
    match p.key.as_str() {
        "t" => buf.push("ト"),
        "m" => {
            buf.pop();
            buf.push("ム");
        }
        "n" => buf.push(MORAIC_NASAL),
        _ => {
            let kana = tables.kana_for(&p.key, 'u').ok_or_else(|| p.unrecognized())?;
            buf.push(kana);
        }
    }
    Ok(())
}
