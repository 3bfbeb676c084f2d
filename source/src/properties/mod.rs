use thiserror::Error;

/// ошибка разбора значения свойства (без привязки к строке - её добавляет парсер записей)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError
{
    #[error("неизвестное значение свойства '{0}'")]
    UnknownPropertyValue(String),
}

/// перечисление со строковыми аббревиатурами из UCD
macro_rules! abbr_enum {
    (
        $(#[$meta:meta])*
        $name:ident
        {
            $($(#[$vmeta:meta])* $abbr:literal => $variant:ident,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name
        {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name
        {
            /// аббревиатура значения, как она записана в UCD
            pub fn abbr(&self) -> &'static str
            {
                match self {
                    $(Self::$variant => $abbr,)+
                }
            }
        }

        impl TryFrom<&str> for $name
        {
            type Error = crate::properties::PropertiesError;

            fn try_from(abbr: &str) -> Result<Self, Self::Error>
            {
                match abbr {
                    $($abbr => Ok(Self::$variant),)+
                    _ => Err(crate::properties::PropertiesError::UnknownPropertyValue(
                        abbr.to_owned(),
                    )),
                }
            }
        }
    };
}

mod bidi_class;
mod combining_class;
mod decomposition;
mod general_category;

pub use bidi_class::BidiClass;
pub use combining_class::CombiningClass;
pub use decomposition::CompatibilityTag;
pub use decomposition::DecompositionMapping;
pub use general_category::GeneralCategory;
