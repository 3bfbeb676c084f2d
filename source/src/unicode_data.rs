use std::collections::HashMap;

use crate::error::ParseError;
use crate::properties::*;

/// запись о кодпоинте из UnicodeData.txt
#[derive(Debug, Clone)]
pub struct CodepointRecord
{
    /// код
    pub code: u32,
    /// название
    pub name: String,
    /// основная категория
    pub gc: GeneralCategory,
    /// класс канонического комбинирования
    pub ccc: CombiningClass,
    /// класс направления
    pub bc: BidiClass,
    /// декомпозиция (один шаг, как в UCD)
    pub decomposition: DecompositionMapping,
    /// соответствующая прописная буква
    pub simple_uppercase: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lowercase: Option<u32>,
    /// соответствующая заглавная буква
    pub simple_titlecase: Option<u32>,
}

impl CodepointRecord
{
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc.is_starter()
    }

    #[inline]
    pub fn is_nonstarter(&self) -> bool
    {
        self.ccc.is_nonstarter()
    }
}

/// количество полей записи UnicodeData.txt
const UNICODE_DATA_FIELDS: usize = 15;

/// начало блока Private Use / суррогатов, дальше для нормализации данных нет
const PRIVATE_USE: u32 = 0xF0000;

/// разбор UnicodeData.txt (или его выборки) в таблицу записей
///
/// диапазоны, записанные парами строк `<..., First>` / `<..., Last>` (CJK, тангутский),
/// разворачиваются в записи без индивидуальных названий; Private Use и суррогаты
/// пропускаются
pub fn parse_unicode_data(data: &str) -> Result<HashMap<u32, CodepointRecord>, ParseError>
{
    let mut map: HashMap<u32, CodepointRecord> = HashMap::new();

    // начало текущего диапазона First / Last
    let mut range_start: Option<CodepointRecord> = None;

    for (i, line) in data.lines().enumerate() {
        let line_no = i + 1;

        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() != UNICODE_DATA_FIELDS {
            return Err(ParseError::FieldCount {
                line: line_no,
                found: fields.len(),
                expected: UNICODE_DATA_FIELDS,
                text: line.to_owned(),
            });
        }

        let code = hex_field(fields[0], line_no)?;
        let name = fields[1].to_owned();

        if code >= PRIVATE_USE {
            break;
        }

        let record = CodepointRecord {
            code,
            name: name.clone(),
            gc: property(fields[2], line_no)?,
            ccc: property(fields[3], line_no)?,
            bc: property(fields[4], line_no)?,
            decomposition: property(fields[5], line_no)?,
            simple_uppercase: case_field(fields[12], line_no)?,
            simple_lowercase: case_field(fields[13], line_no)?,
            simple_titlecase: case_field(fields[14], line_no)?,
        };

        // диапазоны: CJK, тангутский, хангыль, Private Use, суррогаты
        if name.starts_with('<') && name != "<control>" {
            if name.contains("Private Use") || name.contains("Surrogate") {
                continue;
            }

            // слоги хангыль декомпозируются арифметически и в таблицу не попадают
            if name.contains("Hangul Syllable") {
                continue;
            }

            if name.ends_with("First>") {
                range_start = Some(record);
                continue;
            }

            if name.ends_with("Last>") {
                let first = match range_start.take() {
                    Some(first) => first,
                    None => return Err(ParseError::UnpairedRange { line: line_no }),
                };

                for code in first.code ..= record.code {
                    let mut entry = first.clone();

                    entry.code = code;
                    entry.name = format!("{} - {:X}", &first.name[1 .. first.name.len() - 8], code);

                    map.insert(code, entry);
                }
            }

            continue;
        }

        map.insert(code, record);
    }

    Ok(map)
}

/// шестнадцатеричное поле
fn hex_field(value: &str, line: usize) -> Result<u32, ParseError>
{
    u32::from_str_radix(value, 16).map_err(|_| ParseError::BadValue {
        line,
        value: value.to_owned(),
    })
}

/// поле simple case mapping: пусто или код символа
fn case_field(value: &str, line: usize) -> Result<Option<u32>, ParseError>
{
    match value.is_empty() {
        true => Ok(None),
        false => hex_field(value, line).map(Some),
    }
}

/// разбор значения свойства с привязкой ошибки к строке
fn property<'a, T>(value: &'a str, line: usize) -> Result<T, ParseError>
where
    T: TryFrom<&'a str, Error = PropertiesError>,
{
    T::try_from(value).map_err(|e| {
        let PropertiesError::UnknownPropertyValue(value) = e;

        ParseError::BadValue { line, value }
    })
}
