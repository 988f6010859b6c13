use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use romakana::Converter;

static KANA_INPUTS: &[(&str, &str, &str)] = &[
    ("short", "ねこ", "ネコ"),
    ("medium", "きょうはいいてんきですね", "キョウハイーテンキデスネ"),
    (
        "long",
        "わたしはきょうらーめんをたべましたがちょっとたかかったです",
        "ワタシハキョウラーメンヲタベマシタガチョットタカカッタデス",
    ),
];

static ROMAJI_INPUTS: &[(&str, &str)] = &[
    ("short", "neko"),
    ("medium", "kyouhasushidesune"),
    ("long", "watashiha kyou raamen wo tabemashita ga chotto takakatta desu"),
];

fn bench_script_shift(c: &mut Criterion) {
    let converter = Converter::new();
    let mut group = c.benchmark_group("convert/hiragana_to_katakana");
    for &(label, hiragana, _) in KANA_INPUTS {
        group.bench_with_input(
            BenchmarkId::new(label, hiragana.chars().count()),
            &hiragana,
            |b, &hiragana| {
                b.iter(|| converter.hiragana_to_katakana(hiragana).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_romanize(c: &mut Criterion) {
    let converter = Converter::new();
    let mut group = c.benchmark_group("convert/katakana_to_romaji");
    for &(label, _, katakana) in KANA_INPUTS {
        group.bench_with_input(
            BenchmarkId::new(label, katakana.chars().count()),
            &katakana,
            |b, &katakana| {
                b.iter(|| converter.katakana_to_romaji(katakana).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_kana_from_romaji(c: &mut Criterion) {
    let converter = Converter::new();
    let mut group = c.benchmark_group("convert/romaji_to_katakana");
    for &(label, romaji) in ROMAJI_INPUTS {
        group.bench_with_input(
            BenchmarkId::new(label, romaji.len()),
            &romaji,
            |b, &romaji| {
                b.iter(|| converter.romaji_to_katakana(romaji).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_script_shift,
    bench_romanize,
    bench_kana_from_romaji
);
criterion_main!(benches);
