use crate::codepoint::Codepoint;
use crate::data::NormalizationData;
use crate::decompose;

// FCD - не нормализационная форма, а свойство строки: канонические
// декомпозиции соседних кодпоинтов не пересекаются по классам
// комбинирования. проверка и починка оперируют краевыми CCC декомпозиции,
// сами кодпоинты при проверке не разворачиваются

/// строка в FCD-форме?
pub fn check_str(data: &NormalizationData, input: &str) -> bool
{
    let mut last_trail = 0;

    for ch in input.chars() {
        let code = u32::from(ch);
        let lead = data.lead_ccc(code);

        if lead != 0 && last_trail > lead {
            return false;
        }

        last_trail = data.trail_ccc(code);
    }

    true
}

/// привести строку к FCD.
///
/// строка разбивается на сегменты по кодпоинтам с нулевым ведущим CCC;
/// сегмент с нарушением порядка декомпозируется канонически целиком,
/// сегмент без нарушений копируется как есть. результат канонически
/// эквивалентен входу, но, в отличие от NFD, декомпозируется
/// только там, где это необходимо
pub fn normalize(data: &NormalizationData, input: &str) -> String
{
    let mut result = String::with_capacity(input.len());

    // сегмент в исходном виде и признак нарушения внутри него
    let mut segment: Vec<char> = vec![];
    let mut segment_broken = false;
    let mut last_trail = 0;

    for ch in input.chars() {
        let code = u32::from(ch);
        let lead = data.lead_ccc(code);

        if lead == 0 {
            flush(data, &mut segment, segment_broken, &mut result);
            segment_broken = false;
        } else if last_trail > lead {
            segment_broken = true;
        }

        segment.push(ch);
        last_trail = data.trail_ccc(code);
    }

    flush(data, &mut segment, segment_broken, &mut result);

    result
}

fn flush(data: &NormalizationData, segment: &mut Vec<char>, broken: bool, result: &mut String)
{
    match broken {
        false => result.extend(segment.iter()),
        true => {
            let mut buffer: Vec<Codepoint> = vec![];

            for &ch in segment.iter() {
                decompose::decompose_into(data, u32::from(ch), false, &mut buffer);
            }

            result.extend(buffer.iter().map(|c| c.char()));
        }
    }

    segment.clear();
}
