use super::PropertiesError;

/// класс канонического комбинирования (CCC) - четвертая колонка UnicodeData.txt
/// 0 - стартер, всё остальное - комбинируемые кодпоинты
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CombiningClass(pub u8);

impl CombiningClass
{
    /// не переупорядочивается - базовый символ
    pub const NOT_REORDERED: Self = Self(0);
    /// наложенный знак (например, перечеркивание)
    pub const OVERLAY: Self = Self(1);
    /// нукта
    pub const NUKTA: Self = Self(7);
    /// вирама
    pub const VIRAMA: Self = Self(9);
    /// знак под символом
    pub const BELOW: Self = Self(220);
    /// знак над символом
    pub const ABOVE: Self = Self(230);
    /// подписная йота
    pub const IOTA_SUBSCRIPT: Self = Self(240);

    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.0 == 0
    }

    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.0 != 0
    }
}

impl From<CombiningClass> for u8
{
    #[inline]
    fn from(value: CombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CombiningClass
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        match value.parse::<u8>() {
            Ok(value) => Ok(Self(value)),
            Err(_) => Err(PropertiesError::UnknownPropertyValue(value.to_owned())),
        }
    }
}
