use std::collections::HashMap;

use crate::composition_exclusions::parse_composition_exclusions;
use crate::normalization_tests::parse_normalization_tests;
use crate::normalization_tests::NormalizationTest;
use crate::unicode_data::parse_unicode_data;
use crate::unicode_data::CodepointRecord;

// урезанная выборка UCD для тестов, примеров и бенчмарков.
// боевой вариант - полные файлы UCD, прочитанные вызывающей стороной
// и пропущенные через те же парсеры

const UNICODE_DATA: &str = include_str!("./../data/UnicodeData.txt");
const COMPOSITION_EXCLUSIONS_DATA: &str = include_str!("./../data/CompositionExclusions.txt");
const NORMALIZATION_TESTS_DATA: &str = include_str!("./../data/NormalizationTest.txt");

lazy_static! {
    /// таблица записей о кодпоинтах (выборка)
    pub static ref UNICODE: HashMap<u32, CodepointRecord> =
        parse_unicode_data(UNICODE_DATA).expect("встроенная выборка UnicodeData.txt");

    /// исключения композиции (выборка)
    pub static ref COMPOSITION_EXCLUSIONS: Vec<u32> =
        parse_composition_exclusions(COMPOSITION_EXCLUSIONS_DATA)
            .expect("встроенная выборка CompositionExclusions.txt");

    /// тесты нормализации (выборка)
    pub static ref NORMALIZATION_TESTS: Vec<NormalizationTest> =
        parse_normalization_tests(NORMALIZATION_TESTS_DATA)
            .expect("встроенная выборка NormalizationTest.txt");
}
