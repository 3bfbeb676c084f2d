use crate::error::ParseError;

/// разбор CompositionExclusions.txt из UCD
///
/// машиночитаемая часть файла - исключения, назначенные консорциумом вручную;
/// синглтоны и декомпозиции в нестартеры в неё не входят и выводятся из
/// самих данных декомпозиции
pub fn parse_composition_exclusions(data: &str) -> Result<Vec<u32>, ParseError>
{
    let mut exclusions = vec![];

    for (i, line) in data.lines().enumerate() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let code = match line.split_once('#') {
            Some((code, _)) => code,
            None => line,
        };

        let code = code.trim();

        match u32::from_str_radix(code, 16) {
            Ok(code) => exclusions.push(code),
            Err(_) => {
                return Err(ParseError::BadValue {
                    line: i + 1,
                    value: code.to_owned(),
                })
            }
        }
    }

    Ok(exclusions)
}
