use unicode_normalizer::{Form, NormalizationData, Normalizer, QuickCheckValue};
use unicode_normalizer_source::{COMPOSITION_EXCLUSIONS, UNICODE};

/// рекомпозиция и быстрые проверки: когда Yes / No / Maybe и что
/// получается после NFC
fn main()
{
    let data = NormalizationData::from_records(&UNICODE, &COMPOSITION_EXCLUSIONS).unwrap();
    let normalizer = Normalizer::new(&data);

    let cases = [
        "e\u{301}",          // комбинируется в é
        "\u{44}\u{307}\u{323}", // знак уходит к стартеру через поглощенный знак
        "\u{958}",           // исключение композиции - остается парой
        "\u{1100}\u{1161}\u{11A8}", // чамо складываются в слог
    ];

    for case in cases {
        let check = normalizer.quick_check(case, Form::Nfc);
        let nfc = normalizer.normalize(case, Form::Nfc);

        println!("вход:  {}", codes(case));
        println!("check: {:?}", check);
        println!("NFC:   {}", codes(&nfc));
        println!();

        assert!(check != QuickCheckValue::Yes || nfc == case);
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

вход:  U+0065 U+0301
check: Maybe
NFC:   U+00E9

вход:  U+0044 U+0307 U+0323
check: No
NFC:   U+1E0C U+0307

вход:  U+0958
check: No
NFC:   U+0915 U+093C

вход:  U+1100 U+1161 U+11A8
check: Maybe
NFC:   U+AC01

*/
