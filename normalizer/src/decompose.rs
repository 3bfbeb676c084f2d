use crate::codepoint::Codepoint;
use crate::data::NormalizationData;
use crate::hangul;

/// вставить кодпоинт в буфер с учетом канонического порядка.
///
/// нестартер сдвигается к началу, пока предыдущий кодпоинт имеет строго
/// больший CCC; на равном CCC, стартере или начале буфера вставка
/// останавливается - сортировка стабильна, знаки одного класса
/// не меняются местами
#[inline(always)]
pub fn push_canonical(buffer: &mut Vec<Codepoint>, codepoint: Codepoint)
{
    if codepoint.is_starter() {
        buffer.push(codepoint);
        return;
    }

    let mut position = buffer.len();

    while position > 0 {
        if buffer[position - 1].ccc <= codepoint.ccc {
            break;
        }

        position -= 1;
    }

    match position == buffer.len() {
        true => buffer.push(codepoint),
        false => buffer.insert(position, codepoint),
    }
}

/// дописать полную декомпозицию кодпоинта в буфер, поддерживая канонический
/// порядок. кодпоинт без декомпозиции записывается сам; слог хангыль
/// разворачивается арифметически
pub fn decompose_into(
    data: &NormalizationData,
    code: u32,
    compatibility: bool,
    buffer: &mut Vec<Codepoint>,
)
{
    if hangul::decompose(code, buffer) {
        return;
    }

    match data.decomposition(code, compatibility) {
        Some(expansion) => {
            for &element in expansion {
                push_canonical(
                    buffer,
                    Codepoint {
                        code: element,
                        ccc: data.combining_class(element),
                    },
                );
            }
        }
        None => push_canonical(
            buffer,
            Codepoint {
                code,
                ccc: data.combining_class(code),
            },
        ),
    }
}

/// полная декомпозиция строки в канонически упорядоченный буфер
pub fn decompose_str(data: &NormalizationData, input: &str, compatibility: bool) -> Vec<Codepoint>
{
    let mut buffer = Vec::with_capacity(input.len());

    for ch in input.chars() {
        decompose_into(data, u32::from(ch), compatibility, &mut buffer);
    }

    buffer
}
