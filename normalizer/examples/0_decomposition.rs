use unicode_normalizer::{Form, NormalizationData, Normalizer};
use unicode_normalizer_source::{COMPOSITION_EXCLUSIONS, UNICODE};

/// как выглядит декомпозиция: рекурсивное разворачивание, канонический
/// порядок знаков, слоги хангыль
fn main()
{
    let data = NormalizationData::from_records(&UNICODE, &COMPOSITION_EXCLUSIONS).unwrap();
    let normalizer = Normalizer::new(&data);

    let cases = [
        "\u{1FA}",           // Ǻ - двухуровневая декомпозиция
        "\u{E4}\u{323}",     // ä + точка снизу - знаки переупорядочиваются
        "\u{FB01}",          // лигатура fi - только в формах совместимости
        "\u{AC01}",          // слог хангыль - арифметика
    ];

    for case in cases {
        println!("вход:  {}", codes(case));
        println!("NFD:   {}", codes(&normalizer.normalize(case, Form::Nfd)));
        println!("NFKD:  {}", codes(&normalizer.normalize(case, Form::Nfkd)));
        println!();
    }
}

fn codes(text: &str) -> String
{
    text.chars()
        .map(|ch| format!("U+{:04X} ", u32::from(ch)))
        .collect()
}

/*

результат:

вход:  U+01FA
NFD:   U+0041 U+030A U+0301
NFKD:  U+0041 U+030A U+0301

вход:  U+00E4 U+0323
NFD:   U+0061 U+0323 U+0308
NFKD:  U+0061 U+0323 U+0308

вход:  U+FB01
NFD:   U+FB01
NFKD:  U+0066 U+0069

вход:  U+AC01
NFD:   U+1100 U+1161 U+11A8
NFKD:  U+1100 U+1161 U+11A8

*/
