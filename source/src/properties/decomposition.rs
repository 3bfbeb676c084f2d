use super::PropertiesError;

abbr_enum! {
    /// тег декомпозиции совместимости - шестая колонка UnicodeData.txt
    /// каноническая декомпозиция записывается без тега
    CompatibilityTag
    {
        /// вариант шрифта
        "<font>" => Font,
        /// неразрывная версия пробела или дефиса
        "<noBreak>" => NoBreak,
        /// начальная форма представления (арабский)
        "<initial>" => Initial,
        /// средняя форма представления (арабский)
        "<medial>" => Medial,
        /// конечная форма представления (арабский)
        "<final>" => Final,
        /// изолированная форма представления (арабский)
        "<isolated>" => Isolated,
        /// окруженная форма
        "<circle>" => Circle,
        /// надстрочная форма
        "<super>" => Super,
        /// подстрочная форма
        "<sub>" => Sub,
        /// вертикальная форма
        "<vertical>" => Vertical,
        /// широкая форма (зэнкаку)
        "<wide>" => Wide,
        /// узкая форма (ханкаку)
        "<narrow>" => Narrow,
        /// малая вариантная форма (CNS)
        "<small>" => Small,
        /// вариант в квадрате CJK
        "<square>" => Square,
        /// обыкновенная дробь
        "<fraction>" => Fraction,
        /// прочая совместимость
        "<compat>" => Compat,
    }
}

impl core::fmt::Display for CompatibilityTag
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbr())
    }
}

/// запись о декомпозиции кодпоинта, как она хранится в UnicodeData.txt:
/// один шаг разворачивания, элементы могут декомпозироваться дальше
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionMapping
{
    /// тег (None - каноническая декомпозиция)
    pub tag: Option<CompatibilityTag>,
    /// кодпоинты декомпозиции (пустой вектор - декомпозиции нет)
    pub codes: Vec<u32>,
}

impl DecompositionMapping
{
    /// декомпозиция отсутствует?
    pub fn is_none(&self) -> bool
    {
        self.codes.is_empty()
    }

    /// каноническая декомпозиция?
    pub fn is_canonical(&self) -> bool
    {
        !self.codes.is_empty() && self.tag.is_none()
    }
}

impl TryFrom<&str> for DecompositionMapping
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let (tag, codes_str) = match value.starts_with('<') {
            true => match value.split_once(' ') {
                Some((tag, rest)) => (Some(CompatibilityTag::try_from(tag)?), rest),
                None => return Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
            },
            false => (None, value),
        };

        let mut codes = Vec::new();

        for hex in codes_str.split_whitespace() {
            match u32::from_str_radix(hex, 16) {
                Ok(code) => codes.push(code),
                Err(_) => return Err(PropertiesError::UnknownPropertyValue(hex.to_owned())),
            }
        }

        Ok(Self { tag, codes })
    }
}
