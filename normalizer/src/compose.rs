use crate::codepoint::Codepoint;
use crate::data::NormalizationData;
use crate::hangul;

/// композиция пары кодпоинтов: сначала арифметика хангыль, затем таблица пар
#[inline(always)]
pub fn compose_pair(data: &NormalizationData, first: u32, second: u32) -> Option<u32>
{
    match hangul::compose(first, second) {
        Some(code) => Some(code),
        None => data.composition(first, second),
    }
}

/// рекомпозиция канонически упорядоченного буфера на месте.
///
/// один проход: держим позицию последнего стартера и класс последнего
/// непоглощенного кодпоинта. знак комбинируется со стартером, если между
/// ними нет блокирующего знака - знака с классом >= его собственного.
/// поглощенный знак вырезается, подменяя стартер результатом пары;
/// его класс при этом не влияет на блокировку последующих
pub fn compose(data: &NormalizationData, buffer: &mut Vec<Codepoint>)
{
    if buffer.is_empty() {
        return;
    }

    // позиция последнего стартера в уже записанной части
    let mut starter: Option<usize> = None;
    // класс последнего записанного кодпоинта; 256 - "записанных еще нет"
    let mut last_class: u16 = 256;
    // курсор записи: [0 .. write) - готовый результат
    let mut write = 0;

    for read in 0 .. buffer.len() {
        let codepoint = buffer[read];
        let class = codepoint.ccc as u16;

        if let Some(position) = starter {
            let blocked = !(last_class < class || last_class == 0);

            if !blocked {
                if let Some(combined) = compose_pair(data, buffer[position].code, codepoint.code) {
                    buffer[position] = Codepoint::starter(combined);
                    continue;
                }
            }
        }

        if codepoint.is_starter() {
            starter = Some(write);
        }

        last_class = class;
        buffer[write] = codepoint;
        write += 1;
    }

    buffer.truncate(write);
}
