use unicode_normalizer::Form;
use unicode_normalizer_source::NORMALIZATION_TESTS;

use crate::normalizer;

const FORMS: [Form; 5] = [Form::Nfc, Form::Nfd, Form::Nfkc, Form::Nfkd, Form::Fcd];

/// обход вперед совпадает с пакетной нормализацией
#[test]
fn forward_matches_batch()
{
    for t in NORMALIZATION_TESTS.iter() {
        for input in [&t.c1, &t.c2, &t.c3, &t.c4, &t.c5] {
            for form in FORMS {
                let batch = normalizer().normalize(input, form);
                let iterated: String = normalizer().iter(input, form).collect();

                assert_eq!(iterated, batch, "{} {:?}", t.line, form);
            }
        }
    }
}

/// обход назад выдает те же кодпоинты в обратном порядке
#[test]
fn backward_matches_forward()
{
    for t in NORMALIZATION_TESTS.iter() {
        for input in [&t.c1, &t.c2, &t.c3, &t.c4, &t.c5] {
            for form in FORMS {
                let forward: Vec<char> = normalizer().iter(input, form).collect();

                let mut backward = vec![];
                let mut iter = normalizer().iter_at_end(input, form);

                while let Some(ch) = iter.previous() {
                    backward.push(ch);
                }

                backward.reverse();
                assert_eq!(backward, forward, "{} {:?}", t.line, form);
            }
        }
    }
}

/// смена направления посреди строки возвращает только что выданный кодпоинт
#[test]
fn direction_change()
{
    for t in NORMALIZATION_TESTS.iter() {
        let mut iter = normalizer().iter(&t.c1, Form::Nfc);

        while let Some(ch) = iter.next() {
            assert_eq!(iter.previous(), Some(ch), "строка {}", t.line);
            assert_eq!(iter.next(), Some(ch), "строка {}", t.line);
        }
    }
}
