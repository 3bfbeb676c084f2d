use criterion::{criterion_group, criterion_main, Criterion};
use unicode_normalizer::{Form, NormalizationData, Normalizer};
use unicode_normalizer_source::{COMPOSITION_EXCLUSIONS, UNICODE};

const WARM_UP_TIME: u64 = 3;
const MEASUREMENT_TIME: u64 = 7;

/// тексты разного характера: чистый ASCII (быстрый путь), прекомпозированный
/// текст, текст со знаками комбинирования, хангыль и смесь
fn samples() -> Vec<(&'static str, String)>
{
    let texts = [
        ("ascii", "efficient access is done via a deliberate code"),
        ("precomposed", "\u{E9}t\u{E9} f\u{EA}te a\u{F1}o s\u{FC}d d\u{E9}j\u{E0} o\u{F9}"),
        ("decomposed", "e\u{301}te\u{301} fe\u{302}te an\u{303}o su\u{308}d"),
        ("marks", "a\u{323}\u{308}e\u{323}\u{302}o\u{331}\u{301}u\u{32D}\u{30C}"),
        ("hangul", "\u{D55C}\u{AD6D}\u{C5B4} \u{1112}\u{1161}\u{11AB}\u{AE00}"),
        ("mixed", "abc \u{E4}\u{323} \u{FB01}le \u{AC01} x\u{300}\u{316}"),
    ];

    texts
        .iter()
        .map(|(name, text)| (*name, text.repeat(128)))
        .collect()
}

macro_rules! group {
    ($fn: ident, $group: expr, $form: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let data =
                NormalizationData::from_records(&UNICODE, &COMPOSITION_EXCLUSIONS).unwrap();
            let normalizer = Normalizer::new(&data);

            let mut group = c.benchmark_group($group);

            group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

            for (name, text) in samples() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($group, name),
                    &(&normalizer, text.as_str()),
                    |b, data| b.iter(|| data.0.normalize(criterion::black_box(data.1), $form)),
                );
            }

            group.finish();
        }
    };
}

group!(nfc, "nfc", Form::Nfc);
group!(nfd, "nfd", Form::Nfd);
group!(nfkc, "nfkc", Form::Nfkc);
group!(nfkd, "nfkd", Form::Nfkd);
group!(fcd, "fcd", Form::Fcd);

/// быстрая проверка без нормализации
fn quick_check(c: &mut Criterion)
{
    let data = NormalizationData::from_records(&UNICODE, &COMPOSITION_EXCLUSIONS).unwrap();
    let normalizer = Normalizer::new(&data);

    let mut group = c.benchmark_group("quick_check");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for (name, text) in samples() {
        group.bench_with_input(
            criterion::BenchmarkId::new("nfc", name),
            &(&normalizer, text.as_str()),
            |b, data| b.iter(|| data.0.quick_check(criterion::black_box(data.1), Form::Nfc)),
        );
    }

    group.finish();
}

criterion_group!(benches, nfc, nfd, nfkc, nfkd, fcd, quick_check);
criterion_main!(benches);
