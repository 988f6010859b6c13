//! Phonetic lookup tables injected into every conversion.
//!
//! Three read-only maps drive the scanners: per-script long-vowel
//! continuations, katakana → romanized decomposition, and consonant-keyed
//! romanji → kana resolution. They are parsed from one TOML document — the
//! embedded default or a caller-supplied replacement — and validated into
//! typed form once, at construction.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::script::Script;

/// Default table set compiled into the crate. `build.rs` rejects malformed
/// TOML before it can ship.
pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

#[derive(Deserialize)]
struct RawTables {
    long_vowel: BTreeMap<String, BTreeMap<String, String>>,
    kana_to_romaji: BTreeMap<String, Vec<String>>,
    romaji_to_kana: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("unknown script {0:?} under [long_vowel]")]
    UnknownScript(String),
    #[error("kana key {0:?} must be a single character")]
    KanaKeyNotSingleChar(String),
    #[error("continuation for {0:?} must be a single character")]
    ContinuationNotSingleChar(String),
    #[error("decomposition for {0:?} must be 1 or 2 non-empty ASCII symbols")]
    BadDecomposition(String),
    #[error("consonant key {0:?} must be empty or up to two ASCII letters")]
    BadConsonantKey(String),
    #[error("vowel key {0:?} under consonant {1:?} must be one of a, i, u, e, o")]
    BadVowelKey(String, String),
    #[error("empty kana value under consonant {0:?}")]
    EmptyKana(String),
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),
}

/// The three tables in lookup-ready form. Construction validates every
/// entry; afterwards the value is immutable and shareable across threads.
#[derive(Debug, Clone)]
pub struct PhoneticTables {
    long_vowel_hiragana: HashMap<char, char>,
    long_vowel_katakana: HashMap<char, char>,
    kana_to_romaji: HashMap<char, Vec<String>>,
    romaji_to_kana: HashMap<String, HashMap<char, String>>,
}

impl PhoneticTables {
    /// The compiled-in default tables. The embedded document is validated
    /// at build time, so construction cannot fail here.
    pub fn embedded() -> Self {
        Self::from_toml(DEFAULT_TABLES_TOML).expect("embedded tables must be valid")
    }

    /// Parse and validate a replacement table document.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        let raw: RawTables =
            toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

        if raw.long_vowel.is_empty() {
            return Err(TableError::Empty("long_vowel"));
        }
        if raw.kana_to_romaji.is_empty() {
            return Err(TableError::Empty("kana_to_romaji"));
        }
        if raw.romaji_to_kana.is_empty() {
            return Err(TableError::Empty("romaji_to_kana"));
        }

        let mut long_vowel_hiragana = HashMap::new();
        let mut long_vowel_katakana = HashMap::new();
        for (script, entries) in &raw.long_vowel {
            let target = match script.as_str() {
                "hiragana" => &mut long_vowel_hiragana,
                "katakana" => &mut long_vowel_katakana,
                other => return Err(TableError::UnknownScript(other.to_string())),
            };
            for (kana, continuation) in entries {
                let kana = single_char(kana)
                    .ok_or_else(|| TableError::KanaKeyNotSingleChar(kana.clone()))?;
                let continuation = single_char(continuation)
                    .ok_or_else(|| TableError::ContinuationNotSingleChar(continuation.clone()))?;
                target.insert(kana, continuation);
            }
        }

        let mut kana_to_romaji = HashMap::new();
        for (kana, symbols) in &raw.kana_to_romaji {
            let key =
                single_char(kana).ok_or_else(|| TableError::KanaKeyNotSingleChar(kana.clone()))?;
            let well_formed = matches!(symbols.len(), 1 | 2)
                && symbols.iter().all(|s| !s.is_empty() && s.is_ascii());
            if !well_formed {
                return Err(TableError::BadDecomposition(kana.clone()));
            }
            kana_to_romaji.insert(key, symbols.clone());
        }

        let mut romaji_to_kana = HashMap::new();
        for (consonant, row) in &raw.romaji_to_kana {
            if consonant.len() > 2 || !consonant.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(TableError::BadConsonantKey(consonant.clone()));
            }
            let mut vowels = HashMap::new();
            for (vowel, kana) in row {
                let vowel = single_char(vowel)
                    .filter(|v| matches!(v, 'a' | 'i' | 'u' | 'e' | 'o'))
                    .ok_or_else(|| TableError::BadVowelKey(vowel.clone(), consonant.clone()))?;
                if kana.is_empty() {
                    return Err(TableError::EmptyKana(consonant.clone()));
                }
                vowels.insert(vowel, kana.clone());
            }
            romaji_to_kana.insert(consonant.clone(), vowels);
        }

        Ok(Self {
            long_vowel_hiragana,
            long_vowel_katakana,
            kana_to_romaji,
            romaji_to_kana,
        })
    }

    /// Load a table document from disk.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// The vowel kana that contracts into ー after `kana`, in the given
    /// script. None for vowel-less kana (ん/ン, っ/ッ) and non-kana.
    pub fn long_vowel_continuation(&self, script: Script, kana: char) -> Option<char> {
        let map = match script {
            Script::Hiragana => &self.long_vowel_hiragana,
            Script::Katakana => &self.long_vowel_katakana,
        };
        map.get(&kana).copied()
    }

    /// Romanized decomposition of a katakana character, consonant first.
    pub fn romaji_decomposition(&self, kana: char) -> Option<&[String]> {
        self.kana_to_romaji.get(&kana).map(Vec::as_slice)
    }

    /// Kana (or digraph) for a consonant-key/vowel pair; the empty key
    /// resolves bare vowels.
    pub fn kana_for(&self, consonant: &str, vowel: char) -> Option<&str> {
        self.romaji_to_kana
            .get(consonant)?
            .get(&vowel)
            .map(String::as_str)
    }

    /// Whether a consonant cluster ("sh", "ts", ...) can still take a vowel.
    pub(crate) fn has_consonant_key(&self, consonant: &str) -> bool {
        self.romaji_to_kana.contains_key(consonant)
    }
}

impl Default for PhoneticTables {
    fn default() -> Self {
        Self::embedded()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
