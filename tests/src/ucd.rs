use unicode_normalizer::Form;
use unicode_normalizer_source::NormalizationTest;
use unicode_normalizer_source::NORMALIZATION_TESTS;

use crate::normalizer;

macro_rules! check {
    ($expected: expr, $input: expr, $form: expr, $test: expr, $str: expr) => {
        assert_eq!(
            $expected,
            normalizer().normalize(&$input, $form),
            $str,
            $test.line,
            $test.description
        );
    };
}

/// тесты NFC нормализации из UCD
#[test]
fn ucd_test_nfc()
{
    // c2 == toNFC(c1) == toNFC(c2) == toNFC(c3)
    // c4 == toNFC(c4) == toNFC(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;

    for t in tests {
        check!(t.c2, t.c1, Form::Nfc, t, "{} {}: c2 == toNFC(c1)");
        check!(t.c2, t.c2, Form::Nfc, t, "{} {}: c2 == toNFC(c2)");
        check!(t.c2, t.c3, Form::Nfc, t, "{} {}: c2 == toNFC(c3)");
        check!(t.c4, t.c4, Form::Nfc, t, "{} {}: c4 == toNFC(c4)");
        check!(t.c4, t.c5, Form::Nfc, t, "{} {}: c4 == toNFC(c5)");
    }
}

/// тесты NFD нормализации из UCD
#[test]
fn ucd_test_nfd()
{
    // c3 == toNFD(c1) == toNFD(c2) == toNFD(c3)
    // c5 == toNFD(c4) == toNFD(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;

    for t in tests {
        check!(t.c3, t.c1, Form::Nfd, t, "{} {}: c3 == toNFD(c1)");
        check!(t.c3, t.c2, Form::Nfd, t, "{} {}: c3 == toNFD(c2)");
        check!(t.c3, t.c3, Form::Nfd, t, "{} {}: c3 == toNFD(c3)");
        check!(t.c5, t.c4, Form::Nfd, t, "{} {}: c5 == toNFD(c4)");
        check!(t.c5, t.c5, Form::Nfd, t, "{} {}: c5 == toNFD(c5)");
    }
}

/// тесты NFKC нормализации из UCD
#[test]
fn ucd_test_nfkc()
{
    // c4 == toNFKC(c1) == toNFKC(c2) == toNFKC(c3) == toNFKC(c4) == toNFKC(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;

    for t in tests {
        check!(t.c4, t.c1, Form::Nfkc, t, "{} {}: c4 == toNFKC(c1)");
        check!(t.c4, t.c2, Form::Nfkc, t, "{} {}: c4 == toNFKC(c2)");
        check!(t.c4, t.c3, Form::Nfkc, t, "{} {}: c4 == toNFKC(c3)");
        check!(t.c4, t.c4, Form::Nfkc, t, "{} {}: c4 == toNFKC(c4)");
        check!(t.c4, t.c5, Form::Nfkc, t, "{} {}: c4 == toNFKC(c5)");
    }
}

/// тесты NFKD нормализации из UCD
#[test]
fn ucd_test_nfkd()
{
    // c5 == toNFKD(c1) == toNFKD(c2) == toNFKD(c3) == toNFKD(c4) == toNFKD(c5)

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;

    for t in tests {
        check!(t.c5, t.c1, Form::Nfkd, t, "{} {}: c5 == toNFKD(c1)");
        check!(t.c5, t.c2, Form::Nfkd, t, "{} {}: c5 == toNFKD(c2)");
        check!(t.c5, t.c3, Form::Nfkd, t, "{} {}: c5 == toNFKD(c3)");
        check!(t.c5, t.c4, Form::Nfkd, t, "{} {}: c5 == toNFKD(c4)");
        check!(t.c5, t.c5, Form::Nfkd, t, "{} {}: c5 == toNFKD(c5)");
    }
}

/// FCD-результат канонически эквивалентен входу и проходит собственную проверку
#[test]
fn ucd_test_fcd()
{
    use unicode_normalizer::QuickCheckValue;

    let tests: &Vec<NormalizationTest> = &NORMALIZATION_TESTS;

    for t in tests {
        for input in [&t.c1, &t.c2, &t.c3, &t.c4, &t.c5] {
            let fcd = normalizer().normalize(input, Form::Fcd);

            assert_eq!(
                normalizer().quick_check(&fcd, Form::Fcd),
                QuickCheckValue::Yes,
                "{} {}: результат не в FCD-форме",
                t.line,
                t.description
            );
            assert_eq!(
                normalizer().normalize(&fcd, Form::Nfd),
                normalizer().normalize(input, Form::Nfd),
                "{} {}: FCD не эквивалентна входу",
                t.line,
                t.description
            );
        }
    }
}
