use thiserror::Error;

/// ошибка разбора исходных данных UCD
/// содержит номер строки (с 1) и проблемный фрагмент - требование диагностики тестов
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError
{
    /// некорректное количество полей в записи
    #[error("строка {line}: {found} полей вместо {expected}: '{text}'")]
    FieldCount
    {
        line: usize,
        found: usize,
        expected: usize,
        text: String,
    },

    /// значение поля не удалось разобрать
    #[error("строка {line}: некорректное значение '{value}'")]
    BadValue
    {
        line: usize, value: String
    },

    /// диапазон First/Last без начала
    #[error("строка {line}: 'Last' диапазона без предшествующего 'First'")]
    UnpairedRange
    {
        line: usize
    },
}

impl ParseError
{
    /// номер проблемной строки
    pub fn line(&self) -> usize
    {
        match self {
            Self::FieldCount { line, .. } => *line,
            Self::BadValue { line, .. } => *line,
            Self::UnpairedRange { line } => *line,
        }
    }
}
