use core::cmp::Ordering;

use unicode_normalizer::Form;
use unicode_normalizer::NormalizationError;
use unicode_normalizer::Options;
use unicode_normalizer::QuickCheckValue;
use unicode_normalizer_source::NORMALIZATION_TESTS;

use crate::normalizer;

const FORMS: [Form; 5] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd, Form::Fcd];

/// все колонки фикстуры как набор входных строк
fn inputs() -> Vec<String>
{
    NORMALIZATION_TESTS
        .iter()
        .flat_map(|t| {
            [
                t.c1.clone(),
                t.c2.clone(),
                t.c3.clone(),
                t.c4.clone(),
                t.c5.clone(),
            ]
        })
        .collect()
}

/// повторная нормализация ничего не меняет
#[test]
fn idempotence()
{
    for input in inputs() {
        for form in FORMS {
            let once = normalizer().normalize(&input, form);
            let twice = normalizer().normalize(&once, form);

            assert_eq!(once, twice, "форма {:?}, вход {:?}", form, input);
        }
    }
}

/// формы совместимости не зависят от канонической пред-нормализации входа
#[test]
fn closure()
{
    for input in inputs() {
        let nfc = normalizer().normalize(&input, Form::Nfc);
        let nfd = normalizer().normalize(&input, Form::Nfd);
        let nfkc = normalizer().normalize(&input, Form::Nfkc);
        let nfkd = normalizer().normalize(&input, Form::Nfkd);

        for variant in [&input, &nfc, &nfd, &nfkd] {
            assert_eq!(
                normalizer().normalize(variant, Form::Nfkc),
                nfkc,
                "NFKC, вход {:?}",
                input
            );
        }

        for variant in [&input, &nfc, &nfd] {
            assert_eq!(
                normalizer().normalize(variant, Form::Nfkd),
                nfkd,
                "NFKD, вход {:?}",
                input
            );
        }
    }
}

/// Yes быстрой проверки гарантирует нормализованность, No - ненормализованность
#[test]
fn quick_check_soundness()
{
    for input in inputs() {
        for form in FORMS {
            let normalized = normalizer().normalize(&input, form);

            match normalizer().quick_check(&input, form) {
                QuickCheckValue::Yes => {
                    assert_eq!(normalized, input, "Yes, форма {:?}, вход {:?}", form, input)
                }
                QuickCheckValue::No => {
                    assert_ne!(normalized, input, "No, форма {:?}, вход {:?}", form, input)
                }
                QuickCheckValue::Maybe => (),
            }

            // is_normalized разрешает Maybe полной нормализацией
            assert_eq!(
                normalizer().is_normalized(&input, form),
                normalized == input,
                "is_normalized, форма {:?}, вход {:?}",
                form,
                input
            );
        }
    }
}

/// канонически эквивалентные строки сравниваются как равные
#[test]
fn canonical_equivalence()
{
    let options = Options::default();

    for t in NORMALIZATION_TESTS.iter() {
        // c1, c2, c3 канонически эквивалентны между собой
        for pair in [(&t.c1, &t.c2), (&t.c1, &t.c3), (&t.c2, &t.c3)] {
            assert_eq!(
                normalizer().compare(pair.0, pair.1, &options),
                Ok(Ordering::Equal),
                "строка {}",
                t.line
            );
        }
    }
}

/// сравнение без учета регистра поверх канонической эквивалентности
#[test]
fn case_insensitive_compare()
{
    let sensitive = Options::default();
    let insensitive = Options {
        case_insensitive: true,
        ..Options::default()
    };

    // регистр и каноническая эквивалентность одновременно
    assert_eq!(
        normalizer().compare("CAFE\u{301}", "caf\u{E9}", &insensitive),
        Ok(Ordering::Equal)
    );
    assert_eq!(
        normalizer().compare("\u{C0}", "\u{61}\u{300}", &insensitive),
        Ok(Ordering::Equal)
    );
    assert_ne!(
        normalizer().compare("\u{C0}", "\u{61}\u{300}", &sensitive),
        Ok(Ordering::Equal)
    );
}

/// декомпозиция слога и обратная композиция дают исходный слог
#[test]
fn hangul_round_trip()
{
    for index in 0 .. 11172u32 {
        let syllable = char::from_u32(0xAC00 + index).unwrap().to_string();

        let nfd = normalizer().normalize(&syllable, Form::Nfd);
        let nfc = normalizer().normalize(&nfd, Form::Nfc);

        assert_eq!(nfc, syllable);

        // декомпозиция строго арифметическая: L V [T]
        let jamo: Vec<u32> = nfd.chars().map(u32::from).collect();

        assert_eq!(jamo[0], 0x1100 + index / 588);
        assert_eq!(jamo[1], 0x1161 + (index % 588) / 28);

        match index % 28 {
            0 => assert_eq!(jamo.len(), 2),
            t => {
                assert_eq!(jamo.len(), 3);
                assert_eq!(jamo[2], 0x11A7 + t);
            }
        }
    }
}

/// точно подобранный буфер FCD никогда не обрезает результат
#[test]
fn fcd_exact_length()
{
    for input in inputs() {
        let fcd = normalizer().normalize(&input, Form::Fcd);

        let mut buffer = vec!['\0'; fcd.chars().count()];
        let written = normalizer().normalize_fcd_into(&input, &mut buffer);

        assert_eq!(written, Ok(buffer.len()));
        assert_eq!(buffer.iter().collect::<String>(), fcd);
    }
}

/// буфер неверного размера - ошибка, а не молчаливое усечение
#[test]
fn fcd_length_mismatch()
{
    let mut buffer = ['\0'; 1];

    assert_eq!(
        normalizer().normalize_fcd_into("\u{E4}\u{323}", &mut buffer),
        Err(NormalizationError::LengthMismatch {
            expected: 3,
            actual: 1
        })
    );
}

/// канонический порядок: упорядоченный вход не меняется, неупорядоченный
/// сортируется к тому же виду; равные классы сохраняют взаимный порядок
#[test]
fn canonical_ordering_tie_break()
{
    let ordered = "\u{61}\u{332}\u{308}";
    let unordered = "\u{61}\u{308}\u{332}";

    assert_eq!(normalizer().normalize(ordered, Form::Nfd), ordered);
    assert_eq!(normalizer().normalize(unordered, Form::Nfd), ordered);

    // одинаковый класс (230 и 230) - порядок входа сохраняется
    let equal = "\u{61}\u{308}\u{301}";
    assert_eq!(normalizer().normalize(equal, Form::Nfd), equal);
}
