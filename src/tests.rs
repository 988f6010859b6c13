use crate::{ConvertError, Converter, IgnoreSet};

#[test]
fn test_katakana_long_vowel_contraction() {
    let c = Converter::new();
    assert_eq!(c.hiragana_to_katakana("ああ").unwrap(), "アー");
    assert_eq!(c.hiragana_to_katakana("きゃあ").unwrap(), "キャー");
    assert_eq!(
        c.hiragana_to_katakana_with("ああ", false, &IgnoreSet::new())
            .unwrap(),
        "アア"
    );
}

#[test]
fn test_hiragana_long_vowel_expansion() {
    let c = Converter::new();
    assert_eq!(c.katakana_to_hiragana("アー").unwrap(), "ああ");
    assert_eq!(c.katakana_to_hiragana("ラーメン").unwrap(), "らあめん");
    assert_eq!(
        c.katakana_to_hiragana_with("ラーメン", true, &IgnoreSet::new())
            .unwrap(),
        "らーめん"
    );
}

#[test]
fn test_romanization() {
    let c = Converter::new();
    assert_eq!(c.katakana_to_romaji("キャー").unwrap(), "kyaa");
    assert_eq!(c.katakana_to_romaji("カッパ").unwrap(), "kappa");
    assert_eq!(c.katakana_to_romaji("チャット").unwrap(), "chatto");
    assert_eq!(c.hiragana_to_romaji("おはようございます").unwrap(), "ohayougozaimasu");
}

#[test]
fn test_kana_from_romaji() {
    let c = Converter::new();
    assert_eq!(c.romaji_to_katakana("kappa").unwrap(), "カッパ");
    assert_eq!(c.romaji_to_katakana("chatto").unwrap(), "チャット");
    assert_eq!(c.romaji_to_katakana("gamma").unwrap(), "ガンマ");
    assert_eq!(c.romaji_to_katakana("m").unwrap(), "ム");
    assert_eq!(c.romaji_to_hiragana("ohayougozaimasu").unwrap(), "おはようございます");
}

#[test]
fn test_orthographic_normalization() {
    let c = Converter::new();
    assert_eq!(
        c.romaji_to_katakana_with("excalibaa", false, &IgnoreSet::new())
            .unwrap(),
        "エクスカリバア"
    );
    assert_eq!(c.romaji_to_katakana("excalibaa").unwrap(), "エクスカリバー");
}

#[test]
fn test_round_trips() {
    let c = Converter::new();
    let katakana = c.hiragana_to_katakana("おはようございます").unwrap();
    assert_eq!(katakana, "オハヨウゴザイマス");
    assert_eq!(c.katakana_to_hiragana(&katakana).unwrap(), "おはようございます");

    let romaji = c.hiragana_to_romaji("すし").unwrap();
    assert_eq!(romaji, "sushi");
    assert_eq!(c.romaji_to_hiragana(&romaji).unwrap(), "すし");
}

#[test]
fn test_punctuation() {
    let c = Converter::new();
    assert_eq!(c.hiragana_to_katakana("ねこ、いぬ。").unwrap(), "ネコ、イヌ。");
    assert_eq!(c.katakana_to_romaji("「ネコ」。").unwrap(), "\"neko\".");
    assert_eq!(c.romaji_to_katakana("neko,inu.").unwrap(), "ネコ、イヌ。");
}

#[test]
fn test_ignore_set_in_composed_conversion() {
    let c = Converter::new();
    let ignore = IgnoreSet::from("5");
    assert_eq!(
        c.hiragana_to_romaji_with("ねこ5ねこ", &ignore).unwrap(),
        "neko5neko"
    );
}

#[test]
fn test_whole_input_fails_atomically() {
    let c = Converter::new();
    assert_eq!(
        c.hiragana_to_katakana("ねkこ").unwrap_err(),
        ConvertError::UnrecognizedCharacter {
            character: 'k',
            position: 1
        }
    );
    assert_eq!(
        c.katakana_to_romaji("ネコ漢").unwrap_err(),
        ConvertError::UnrecognizedCharacter {
            character: '漢',
            position: 2
        }
    );
    assert_eq!(
        c.romaji_to_katakana("neko!").unwrap_err(),
        ConvertError::UnrecognizedCharacter {
            character: '!',
            position: 4
        }
    );
    assert_eq!(
        c.katakana_to_hiragana("ーア").unwrap_err(),
        ConvertError::InvalidLongVowelPosition { position: 0 }
    );
}

#[test]
fn test_error_messages() {
    let c = Converter::new();
    let err = c.hiragana_to_katakana("ねkこ").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unrecognized character 'k' at position 1"
    );
}
