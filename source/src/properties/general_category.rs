abbr_enum! {
    /// основная категория символа (General Category) - третья колонка UnicodeData.txt
    GeneralCategory
    {
        /// зарезервировано / не назначено
        "Cn" => Unassigned,
        /// прописная буква
        "Lu" => UppercaseLetter,
        /// строчная буква
        "Ll" => LowercaseLetter,
        /// диграфический символ, первая часть - заглавная
        "Lt" => TitlecaseLetter,
        /// буква-модификатор
        "Lm" => ModifierLetter,
        /// прочие буквы, включая слоги и иероглифы
        "Lo" => OtherLetter,
        /// комбинирующий маркер, не занимающий пространства
        "Mn" => NonspacingMark,
        /// комбинирующий маркер, занимающий пространство
        "Mc" => SpacingMark,
        /// охватывающий комбинирующий маркер
        "Me" => EnclosingMark,
        /// десятичная цифра
        "Nd" => DecimalNumber,
        /// буквоподобный числовой символ
        "Nl" => LetterNumber,
        /// прочие числовые символы
        "No" => OtherNumber,
        /// разделитель-пробел
        "Zs" => SpaceSeparator,
        /// разделитель строк
        "Zl" => LineSeparator,
        /// разделитель параграфов
        "Zp" => ParagraphSeparator,
        /// управляющий символ
        "Cc" => Control,
        /// символ форматирования
        "Cf" => Format,
        /// суррогат
        "Cs" => Surrogate,
        /// приватное использование
        "Co" => PrivateUse,
        /// объединяющая пунктуация
        "Pc" => ConnectorPunctuation,
        /// тире / дефис
        "Pd" => DashPunctuation,
        /// открывающий знак пунктуации
        "Ps" => OpenPunctuation,
        /// закрывающий знак пунктуации
        "Pe" => ClosePunctuation,
        /// начальная кавычка
        "Pi" => InitialPunctuation,
        /// конечная кавычка
        "Pf" => FinalPunctuation,
        /// прочая пунктуация
        "Po" => OtherPunctuation,
        /// математический символ
        "Sm" => MathSymbol,
        /// символ валюты
        "Sc" => CurrencySymbol,
        /// символ-модификатор
        "Sk" => ModifierSymbol,
        /// прочие символы
        "So" => OtherSymbol,
    }
}

impl GeneralCategory
{
    /// буква (L)
    pub fn is_letter(&self) -> bool
    {
        matches!(
            self,
            Self::UppercaseLetter
                | Self::LowercaseLetter
                | Self::TitlecaseLetter
                | Self::ModifierLetter
                | Self::OtherLetter
        )
    }

    /// буква, имеющая регистр (LC)
    pub fn is_cased_letter(&self) -> bool
    {
        matches!(
            self,
            Self::UppercaseLetter | Self::LowercaseLetter | Self::TitlecaseLetter
        )
    }

    /// комбинирующий символ (M)
    pub fn is_combining_mark(&self) -> bool
    {
        matches!(
            self,
            Self::NonspacingMark | Self::SpacingMark | Self::EnclosingMark
        )
    }

    /// разделитель (Z)
    pub fn is_separator(&self) -> bool
    {
        matches!(
            self,
            Self::SpaceSeparator | Self::LineSeparator | Self::ParagraphSeparator
        )
    }
}
