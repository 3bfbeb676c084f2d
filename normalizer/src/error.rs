use thiserror::Error;

/// нарушение целостности исходных данных при сборке таблиц.
/// сборка падает сразу - это ошибка данных, а не ситуация времени выполнения
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError
{
    /// каноническая декомпозиция длиннее пары
    #[error("U+{code:04X}: каноническая декомпозиция из {len} кодпоинтов")]
    CanonicalTooLong
    {
        code: u32, len: usize
    },

    /// декомпозиция ссылается сама на себя или цепочка слишком глубока
    #[error("U+{code:04X}: превышена глубина разворачивания декомпозиции")]
    RecursionLimit
    {
        code: u32
    },

    /// пара композиции встретилась дважды
    #[error("пара композиции (U+{first:04X}, U+{second:04X}) встретилась дважды")]
    DuplicateComposition
    {
        first: u32, second: u32
    },
}

/// ошибки публичного API нормализации
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizationError
{
    /// код вне диапазона скалярных значений Unicode (включая суррогаты)
    #[error("некорректный кодпоинт: 0x{0:X}")]
    InvalidCodePoint(u32),

    /// буфер фиксированного размера не соответствует длине результата
    #[error("длина буфера {actual} не соответствует результату {expected}")]
    LengthMismatch
    {
        expected: usize, actual: usize
    },

    /// запрошена версия Unicode, таблицы для которой не переданы
    #[error("таблицы для запрошенной версии Unicode не загружены")]
    UnsupportedVersion,
}
