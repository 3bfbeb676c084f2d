//! сквозные тесты нормализации: конформанс-фикстура UCD и общие свойства
//! нормализационных форм

#![cfg(test)]

#[macro_use]
extern crate lazy_static;

mod iter;
mod properties;
mod ucd;

use unicode_normalizer::NormalizationData;
use unicode_normalizer::Normalizer;
use unicode_normalizer_source::COMPOSITION_EXCLUSIONS;
use unicode_normalizer_source::UNICODE;

lazy_static! {
    /// таблицы собираются один раз на все тесты
    static ref DATA: NormalizationData =
        NormalizationData::from_records(&UNICODE, &COMPOSITION_EXCLUSIONS).unwrap();
}

/// фасад над общими таблицами
fn normalizer() -> Normalizer<'static>
{
    Normalizer::new(&DATA)
}
