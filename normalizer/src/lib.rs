//! нормализация Unicode: NFC / NFD / NFKC / NFKD / FCD, быстрые проверки,
//! двунаправленный итератор и сравнение с точностью до канонической
//! эквивалентности.
//!
//! таблицы собираются один раз из записей UCD и дальше только читаются:
//! `NormalizationData` безопасно разделяется между потоками, каждый вызов
//! работает на собственном буфере.
//!
//! ```
//! use unicode_normalizer::{Form, NormalizationData, Normalizer};
//! use unicode_normalizer_source::{COMPOSITION_EXCLUSIONS, UNICODE};
//!
//! let data = NormalizationData::from_records(&UNICODE, &COMPOSITION_EXCLUSIONS).unwrap();
//! let normalizer = Normalizer::new(&data);
//!
//! assert_eq!(normalizer.normalize("e\u{301}", Form::Nfc), "\u{E9}");
//! ```

use core::cmp::Ordering;

pub mod codepoint;
pub mod compare;
pub mod compose;
pub mod data;
pub mod decompose;
pub mod error;
pub mod fcd;
pub mod hangul;
pub mod iter;
pub mod quick_check;
pub mod trie;

pub use codepoint::Codepoint;
pub use data::NormalizationData;
pub use error::BuildError;
pub use error::NormalizationError;
pub use iter::NormalizingIter;
pub use quick_check::QuickCheckValue;
pub use trie::CodePointTrie;

/// форма нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form
{
    /// каноническая композиция
    Nfc,
    /// каноническая декомпозиция
    Nfd,
    /// композиция совместимости
    Nfkc,
    /// декомпозиция совместимости
    Nfkd,
    /// "fast C or D": декомпозиция только там, где нарушен канонический порядок
    Fcd,
}

/// версия таблиц нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnicodeVersion
{
    /// таблицы, переданные при создании
    #[default]
    Current,
    /// поведение Unicode 3.2 - требует отдельно загруженных таблиц
    Unicode3_2,
}

/// настройки нормализации и сравнения
#[derive(Debug, Clone, Copy, Default)]
pub struct Options
{
    pub version: UnicodeVersion,
    /// перед сравнением привести к строчным буквам
    pub case_insensitive: bool,
}

/// фасад нормализации: формы, быстрые проверки, итерация, сравнение.
/// хранит только ссылки на таблицы - создание ничего не стоит
pub struct Normalizer<'a>
{
    data: &'a NormalizationData,
    /// таблицы Unicode 3.2, если загружены
    legacy: Option<&'a NormalizationData>,
}

impl<'a> Normalizer<'a>
{
    pub fn new(data: &'a NormalizationData) -> Self
    {
        Self { data, legacy: None }
    }

    /// фасад с отдельными таблицами для режима Unicode 3.2
    pub fn with_legacy(data: &'a NormalizationData, legacy: &'a NormalizationData) -> Self
    {
        Self {
            data,
            legacy: Some(legacy),
        }
    }

    /// таблицы для запрошенной версии
    fn tables(&self, version: UnicodeVersion) -> Result<&'a NormalizationData, NormalizationError>
    {
        match version {
            UnicodeVersion::Current => Ok(self.data),
            UnicodeVersion::Unicode3_2 => self.legacy.ok_or(NormalizationError::UnsupportedVersion),
        }
    }

    /// нормализовать строку в запрошенную форму
    pub fn normalize(&self, input: &str, form: Form) -> String
    {
        normalize_with(self.data, input, form)
    }

    /// нормализация с настройками; версия выбирает набор таблиц
    pub fn normalize_with(
        &self,
        input: &str,
        form: Form,
        options: &Options,
    ) -> Result<String, NormalizationError>
    {
        Ok(normalize_with(self.tables(options.version)?, input, form))
    }

    /// FCD-нормализация в буфер фиксированного размера.
    /// буфер должен вмещать результат точно - несовпадение длины
    /// возвращается как ошибка, а не обрезает результат
    pub fn normalize_fcd_into(
        &self,
        input: &str,
        buffer: &mut [char],
    ) -> Result<usize, NormalizationError>
    {
        let normalized = fcd::normalize(self.data, input);
        let expected = normalized.chars().count();

        if expected != buffer.len() {
            return Err(NormalizationError::LengthMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        for (slot, ch) in buffer.iter_mut().zip(normalized.chars()) {
            *slot = ch;
        }

        Ok(expected)
    }

    /// быстрая проверка строки без выделения памяти
    pub fn quick_check(&self, input: &str, form: Form) -> QuickCheckValue
    {
        quick_check::check_str(self.data, input, form)
    }

    /// быстрая проверка отдельного кодпоинта.
    /// суррогаты и коды за пределами Unicode - ошибка, а не догадка
    pub fn quick_check_code_point(
        &self,
        code: u32,
        form: Form,
    ) -> Result<QuickCheckValue, NormalizationError>
    {
        match char::from_u32(code) {
            Some(_) => Ok(self.data.quick_check(code, form)),
            None => Err(NormalizationError::InvalidCodePoint(code)),
        }
    }

    /// строка нормализована? Maybe разрешается полной нормализацией
    pub fn is_normalized(&self, input: &str, form: Form) -> bool
    {
        match self.quick_check(input, form) {
            QuickCheckValue::Yes => true,
            QuickCheckValue::No => false,
            QuickCheckValue::Maybe => self.normalize(input, form) == input,
        }
    }

    /// вариант `is_normalized` для диапазона уже раскодированных кодпоинтов
    pub fn is_normalized_chars(&self, chars: &[char], form: Form) -> bool
    {
        let text: String = chars.iter().collect();

        self.is_normalized(&text, form)
    }

    /// вариант `is_normalized` для среза кодов; коды проверяются на
    /// принадлежность скалярным значениям
    pub fn is_normalized_code_points(
        &self,
        codes: &[u32],
        form: Form,
    ) -> Result<bool, NormalizationError>
    {
        let mut text = String::with_capacity(codes.len() * 4);

        for &code in codes {
            match char::from_u32(code) {
                Some(ch) => text.push(ch),
                None => return Err(NormalizationError::InvalidCodePoint(code)),
            }
        }

        Ok(self.is_normalized(&text, form))
    }

    /// полная декомпозиция одного кодпоинта
    pub fn decompose_code_point(
        &self,
        code: u32,
        compatibility: bool,
    ) -> Result<Vec<u32>, NormalizationError>
    {
        if char::from_u32(code).is_none() {
            return Err(NormalizationError::InvalidCodePoint(code));
        }

        let mut buffer = vec![];
        decompose::decompose_into(self.data, code, compatibility, &mut buffer);

        Ok(buffer.iter().map(|c| c.code).collect())
    }

    /// каноническая композиция пары кодпоинтов, если она существует
    pub fn compose_pair(
        &self,
        first: u32,
        second: u32,
    ) -> Result<Option<u32>, NormalizationError>
    {
        for code in [first, second] {
            if char::from_u32(code).is_none() {
                return Err(NormalizationError::InvalidCodePoint(code));
            }
        }

        Ok(compose::compose_pair(self.data, first, second))
    }

    /// нормализованный двунаправленный итератор с курсором в начале строки
    pub fn iter<'t>(&self, text: &'t str, form: Form) -> NormalizingIter<'t>
    where
        'a: 't,
    {
        NormalizingIter::new(self.data, text, form)
    }

    /// итератор с курсором в конце строки - для обхода назад
    pub fn iter_at_end<'t>(&self, text: &'t str, form: Form) -> NormalizingIter<'t>
    where
        'a: 't,
    {
        NormalizingIter::new_at_end(self.data, text, form)
    }

    /// сравнение с точностью до канонической эквивалентности;
    /// настройки выбирают таблицы и режим без учета регистра
    pub fn compare(
        &self,
        left: &str,
        right: &str,
        options: &Options,
    ) -> Result<Ordering, NormalizationError>
    {
        let tables = self.tables(options.version)?;

        Ok(compare::compare(tables, left, right, options.case_insensitive))
    }
}

/// нормализация строки по готовым таблицам.
/// двухфазный контракт композиционных форм: декомпозиция в буфер,
/// затем рекомпозиция буфера на месте
pub fn normalize_with(data: &NormalizationData, input: &str, form: Form) -> String
{
    // Yes быстрой проверки гарантирует нормализованность - копия без обработки
    if quick_check::check_str(data, input, form) == QuickCheckValue::Yes {
        return input.to_owned();
    }

    if form == Form::Fcd {
        return fcd::normalize(data, input);
    }

    let compatibility = matches!(form, Form::Nfkc | Form::Nfkd);
    let mut buffer = decompose::decompose_str(data, input, compatibility);

    if matches!(form, Form::Nfc | Form::Nfkc) {
        compose::compose(data, &mut buffer);
    }

    buffer.iter().map(|c| c.char()).collect()
}
