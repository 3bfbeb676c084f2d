use core::cmp::Ordering;

use crate::codepoint::Codepoint;
use crate::data::NormalizationData;
use crate::decompose;

/// ключ сравнения в порядке кодовых единиц UTF-16: кодпоинты за пределами
/// BMP сравниваются по значению ведущего суррогата и оказываются
/// между U+DBFF и U+E000
#[inline(always)]
fn utf16_key(code: u32) -> u32
{
    match code <= 0xFFFF {
        true => code,
        false => 0xD7C0 + (code >> 10),
    }
}

/// сравнение двух канонически упорядоченных буферов в порядке
/// кодовых единиц UTF-16
fn compare_buffers(left: &[Codepoint], right: &[Codepoint]) -> Ordering
{
    for (l, r) in left.iter().zip(right.iter()) {
        let by_key = utf16_key(l.code).cmp(&utf16_key(r.code));

        if by_key != Ordering::Equal {
            return by_key;
        }

        // ключ различает только старшие биты дополнительных кодпоинтов
        let by_code = l.code.cmp(&r.code);

        if by_code != Ordering::Equal {
            return by_code;
        }
    }

    left.len().cmp(&right.len())
}

/// декомпозиция для сравнения: NFD, при необходимости с приведением
/// к строчным буквам. простое преобразование регистра не меняет CCC,
/// поэтому порядок знаков сохраняется
fn decompose_for_compare(data: &NormalizationData, input: &str, fold: bool) -> Vec<Codepoint>
{
    let mut buffer = decompose::decompose_str(data, input, false);

    if fold {
        for codepoint in buffer.iter_mut() {
            codepoint.code = data.fold(codepoint.code);
        }
    }

    buffer
}

/// сравнение строк с точностью до канонической эквивалентности.
///
/// канонически эквивалентные строки равны независимо от формы записи;
/// неэквивалентные упорядочиваются по NFD в порядке кодовых единиц UTF-16.
/// с `case_insensitive` перед сравнением применяется простое
/// преобразование в строчные буквы
pub fn compare(
    data: &NormalizationData,
    left: &str,
    right: &str,
    case_insensitive: bool,
) -> Ordering
{
    // одинаковые байты эквивалентны при любых настройках
    if left == right {
        return Ordering::Equal;
    }

    let left = decompose_for_compare(data, left, case_insensitive);
    let right = decompose_for_compare(data, right, case_insensitive);

    compare_buffers(&left, &right)
}
