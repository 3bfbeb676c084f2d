abbr_enum! {
    /// класс направления текста (Bidi Class) - пятая колонка UnicodeData.txt
    /// само выполнение bidi-алгоритма - внешняя задача, здесь хранится только значение
    BidiClass
    {
        /// сильный LTR-символ
        "L" => LeftToRight,
        /// сильный RTL-символ (не арабский)
        "R" => RightToLeft,
        /// сильный RTL-символ (арабский)
        "AL" => ArabicLetter,
        /// европейская цифра
        "EN" => EuropeanNumber,
        /// знаки плюса и минуса
        "ES" => EuropeanSeparator,
        /// терминатор числового формата, включая символы валют
        "ET" => EuropeanTerminator,
        /// арабско-индийская цифра
        "AN" => ArabicNumber,
        /// запятые, двоеточия, слеши
        "CS" => CommonSeparator,
        /// не занимающий места знак
        "NSM" => NonspacingMark,
        /// символы форматирования и управляющие коды
        "BN" => BoundaryNeutral,
        /// разделитель абзацев
        "B" => ParagraphSeparator,
        /// разделитель сегментов
        "S" => SegmentSeparator,
        /// пробельные символы
        "WS" => Whitespace,
        /// прочие нейтральные символы
        "ON" => OtherNeutral,
        /// LR embedding control (U+202A)
        "LRE" => LeftToRightEmbedding,
        /// LR override control (U+202D)
        "LRO" => LeftToRightOverride,
        /// RL embedding control (U+202B)
        "RLE" => RightToLeftEmbedding,
        /// RL override control (U+202E)
        "RLO" => RightToLeftOverride,
        /// pop directional format (U+202C)
        "PDF" => PopDirectionalFormat,
        /// LR isolate control (U+2066)
        "LRI" => LeftToRightIsolate,
        /// RL isolate control (U+2067)
        "RLI" => RightToLeftIsolate,
        /// first strong isolate control (U+2068)
        "FSI" => FirstStrongIsolate,
        /// pop directional isolate (U+2069)
        "PDI" => PopDirectionalIsolate,
    }
}

impl BidiClass
{
    /// сильный тип направления
    pub fn is_strong(&self) -> bool
    {
        matches!(self, Self::LeftToRight | Self::RightToLeft | Self::ArabicLetter)
    }
}
