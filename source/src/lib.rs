//! разбор данных UCD (Unicode Character Database) в типизированные записи.
//!
//! загрузка файлов - забота вызывающей стороны: парсеры принимают уже
//! прочитанный текст. в `data/` лежит урезанная выборка UCD, используемая
//! тестами, примерами и бенчмарками.

#[macro_use]
extern crate lazy_static;

pub mod properties;

mod composition_exclusions;
mod error;
mod unicode_data;

pub use error::ParseError;

pub use unicode_data::parse_unicode_data;
pub use unicode_data::CodepointRecord;

pub use composition_exclusions::parse_composition_exclusions;

pub use normalization_tests::parse_normalization_tests;
pub use normalization_tests::NormalizationTest;

mod embedded;

pub use embedded::COMPOSITION_EXCLUSIONS;
pub use embedded::NORMALIZATION_TESTS;
pub use embedded::UNICODE;
