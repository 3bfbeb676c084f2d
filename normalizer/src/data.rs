use std::collections::HashMap;
use std::collections::HashSet;

use unicode_normalizer_source::CodepointRecord;

use crate::error::BuildError;
use crate::hangul;
use crate::quick_check::QuickCheckValue;
use crate::trie::CodePointTrie;
use crate::trie::CodePointTrieBuilder;
use crate::Form;

// упаковка свойств кодпоинта в значение таблицы:
//   биты 0..=7   - CCC
//   биты 8..=13  - флаги быстрых проверок
//   биты 16..=23 - CCC последнего кодпоинта канонической декомпозиции
//   биты 24..=31 - CCC первого кодпоинта канонической декомпозиции

const QC_NFD_NO: u32 = 1 << 8;
const QC_NFC_NO: u32 = 1 << 9;
const QC_NFC_MAYBE: u32 = 1 << 10;
const QC_NFKD_NO: u32 = 1 << 11;
const QC_NFKC_NO: u32 = 1 << 12;
const QC_NFKC_MAYBE: u32 = 1 << 13;

const TRAIL_CCC_SHIFT: u32 = 16;
const LEAD_CCC_SHIFT: u32 = 24;

/// предел глубины разворачивания декомпозиций; в UCD полная декомпозиция
/// не длиннее 18 кодпоинтов, более глубокая рекурсия - зацикленные данные
const EXPANSION_DEPTH_LIMIT: usize = 18;

/// неизменяемые таблицы нормализации, собранные из записей UCD.
/// собираются один раз, после чего только читаются - синхронизация
/// параллельным читателям не нужна
pub struct NormalizationData
{
    /// свойства кодпоинта: CCC, быстрые проверки, краевые CCC декомпозиции
    properties: CodePointTrie,
    /// полная каноническая декомпозиция
    canonical: HashMap<u32, Box<[u32]>>,
    /// полная декомпозиция совместимости
    compatibility: HashMap<u32, Box<[u32]>>,
    /// пары композиции: (стартер, комбинируемый) -> скомпонованный кодпоинт
    compositions: HashMap<(u32, u32), u32>,
    /// исключения композиции
    exclusions: HashSet<u32>,
    /// простое преобразование в строчные буквы - для сравнения без учета регистра
    fold: HashMap<u32, u32>,
}

impl NormalizationData
{
    /// сборка таблиц из разобранных записей UCD и списка исключений композиции.
    /// некорректные данные - ошибка сборки, а не молчаливый пропуск
    pub fn from_records(
        records: &HashMap<u32, CodepointRecord>,
        exclusions: &[u32],
    ) -> Result<Self, BuildError>
    {
        let exclusions: HashSet<u32> = exclusions.iter().copied().collect();

        // проверка целостности до разворачивания
        for record in records.values() {
            let mapping = &record.decomposition;

            if mapping.is_canonical() && mapping.codes.len() > 2 {
                return Err(BuildError::CanonicalTooLong {
                    code: record.code,
                    len: mapping.codes.len(),
                });
            }
        }

        // полные декомпозиции (до фикспоинта)
        let mut canonical: HashMap<u32, Box<[u32]>> = HashMap::new();
        let mut compatibility: HashMap<u32, Box<[u32]>> = HashMap::new();

        for record in records.values() {
            if record.decomposition.is_none() {
                continue;
            }

            let mut expansion = vec![];
            expand(records, record.code, true, 0, &mut expansion)?;
            compatibility.insert(record.code, expansion.into_boxed_slice());

            if record.decomposition.is_canonical() {
                let mut expansion = vec![];
                expand(records, record.code, false, 0, &mut expansion)?;
                canonical.insert(record.code, expansion.into_boxed_slice());
            }
        }

        // пары композиции: канонические пары со стартером-основанием,
        // не попавшие в исключения
        let mut compositions: HashMap<(u32, u32), u32> = HashMap::new();
        let mut combines_backwards: HashSet<u32> = HashSet::new();

        for record in records.values() {
            if !recomposable(record, records, &exclusions) {
                continue;
            }

            let first = record.decomposition.codes[0];
            let second = record.decomposition.codes[1];

            if compositions.insert((first, second), record.code).is_some() {
                return Err(BuildError::DuplicateComposition { first, second });
            }

            combines_backwards.insert(second);
        }

        // таблица свойств
        let mut builder = CodePointTrieBuilder::new();

        for record in records.values() {
            let code = record.code;
            let ccc = u8::from(record.ccc) as u32;

            let mut value = ccc;

            let (lead, trail) = match canonical.get(&code) {
                Some(expansion) => (
                    combining_class_of(records, expansion[0]),
                    combining_class_of(records, expansion[expansion.len() - 1]),
                ),
                None => (ccc, ccc),
            };

            value |= lead << LEAD_CCC_SHIFT;
            value |= trail << TRAIL_CCC_SHIFT;

            let composes = recomposable(record, records, &exclusions);

            if canonical.contains_key(&code) {
                value |= QC_NFD_NO;

                if !composes {
                    value |= QC_NFC_NO;
                }
            }

            if let Some(compat) = compatibility.get(&code) {
                value |= QC_NFKD_NO;

                // кодпоинт выживает в NFKC, только если рекомпозиция собирает
                // его обратно из его декомпозиции совместимости - то есть она
                // совпадает с канонической. каноническая пара с элементом,
                // декомпозируемым по совместимости (ẛ = <017F, 0307>, где
                // длинная s разворачивается в обычную), не восстанавливается
                let stable = canonical.get(&code) == Some(compat);

                if !composes || !stable {
                    value |= QC_NFKC_NO;
                }
            }

            if combines_backwards.contains(&code) {
                value |= QC_NFC_MAYBE | QC_NFKC_MAYBE;
            }

            builder.set(code, value);
        }

        // хангыль: слоги декомпозируются, гласные и завершающие согласные чамо
        // комбинируются с предыдущим кодпоинтом
        for code in hangul::S_BASE .. hangul::S_BASE + hangul::S_COUNT {
            builder.set(code, builder.get(code) | QC_NFD_NO | QC_NFKD_NO);
        }

        for code in hangul::V_BASE .. hangul::T_BASE + hangul::T_COUNT {
            if hangul::is_composable_vt(code) {
                builder.set(code, builder.get(code) | QC_NFC_MAYBE | QC_NFKC_MAYBE);
            }
        }

        // простые преобразования регистра
        let fold: HashMap<u32, u32> = records
            .values()
            .filter_map(|record| record.simple_lowercase.map(|lower| (record.code, lower)))
            .collect();

        tracing::debug!(
            records = records.len(),
            canonical = canonical.len(),
            compatibility = compatibility.len(),
            compositions = compositions.len(),
            exclusions = exclusions.len(),
            "таблицы нормализации собраны"
        );

        Ok(Self {
            properties: builder.build(),
            canonical,
            compatibility,
            compositions,
            exclusions,
            fold,
        })
    }

    /// класс канонического комбинирования; 0 для неназначенных кодпоинтов
    #[inline(always)]
    pub fn combining_class(&self, code: u32) -> u8
    {
        self.properties.get(code) as u8
    }

    /// полная декомпозиция кодпоинта; None - кодпоинт декомпозируется сам в себя.
    /// слоги хангыль сюда не входят - они разворачиваются арифметически
    #[inline(always)]
    pub fn decomposition(&self, code: u32, compatibility: bool) -> Option<&[u32]>
    {
        let map = match compatibility {
            true => &self.compatibility,
            false => &self.canonical,
        };

        map.get(&code).map(|expansion| expansion.as_ref())
    }

    /// табличная композиция пары; арифметика хангыль - отдельный шаг компоновщика
    #[inline(always)]
    pub fn composition(&self, starter: u32, combining: u32) -> Option<u32>
    {
        self.compositions.get(&(starter, combining)).copied()
    }

    /// кодпоинт из списка исключений композиции?
    #[inline]
    pub fn is_excluded(&self, code: u32) -> bool
    {
        self.exclusions.contains(&code)
    }

    /// быстрая проверка отдельного кодпоинта для формы нормализации
    #[inline(always)]
    pub fn quick_check(&self, code: u32, form: Form) -> QuickCheckValue
    {
        let flags = self.properties.get(code);

        let (no, maybe) = match form {
            Form::Nfd => (QC_NFD_NO, 0),
            Form::Nfc => (QC_NFC_NO, QC_NFC_MAYBE),
            Form::Nfkd => (QC_NFKD_NO, 0),
            Form::Nfkc => (QC_NFKC_NO, QC_NFKC_MAYBE),
            // одиночный кодпоинт всегда в FCD-форме: его каноническая
            // декомпозиция уже упорядочена
            Form::Fcd => return QuickCheckValue::Yes,
        };

        if flags & no != 0 {
            return QuickCheckValue::No;
        }

        if flags & maybe != 0 {
            return QuickCheckValue::Maybe;
        }

        QuickCheckValue::Yes
    }

    /// CCC первого кодпоинта канонической декомпозиции
    #[inline(always)]
    pub fn lead_ccc(&self, code: u32) -> u8
    {
        (self.properties.get(code) >> LEAD_CCC_SHIFT) as u8
    }

    /// CCC последнего кодпоинта канонической декомпозиции
    #[inline(always)]
    pub fn trail_ccc(&self, code: u32) -> u8
    {
        (self.properties.get(code) >> TRAIL_CCC_SHIFT) as u8
    }

    /// простое преобразование в строчную букву; без записи - сам кодпоинт
    #[inline(always)]
    pub fn fold(&self, code: u32) -> u32
    {
        match self.fold.get(&code) {
            Some(lower) => *lower,
            None => code,
        }
    }
}

/// каноническая пара, которую компоновщик имеет право собрать обратно
fn recomposable(
    record: &CodepointRecord,
    records: &HashMap<u32, CodepointRecord>,
    exclusions: &HashSet<u32>,
) -> bool
{
    let mapping = &record.decomposition;

    mapping.is_canonical()
        && mapping.codes.len() == 2
        && record.is_starter()
        && !exclusions.contains(&record.code)
        && combining_class_of(records, mapping.codes[0]) == 0
}

/// CCC по записям; неназначенный кодпоинт - стартер
fn combining_class_of(records: &HashMap<u32, CodepointRecord>, code: u32) -> u32
{
    match records.get(&code) {
        Some(record) => u8::from(record.ccc) as u32,
        None => 0,
    }
}

/// разворачивание декомпозиции до фикспоинта.
/// слог хангыль внутри декомпозиции совместимости разворачивается арифметически
fn expand(
    records: &HashMap<u32, CodepointRecord>,
    code: u32,
    compatibility: bool,
    depth: usize,
    out: &mut Vec<u32>,
) -> Result<(), BuildError>
{
    if depth > EXPANSION_DEPTH_LIMIT {
        return Err(BuildError::RecursionLimit { code });
    }

    if depth > 0 && hangul::is_syllable(code) {
        let mut syllable = vec![];

        hangul::decompose(code, &mut syllable);
        out.extend(syllable.iter().map(|c| c.code));

        return Ok(());
    }

    let record = match records.get(&code) {
        Some(record) => record,
        None => {
            out.push(code);
            return Ok(());
        }
    };

    let mapping = &record.decomposition;

    let applies = match compatibility {
        true => !mapping.is_none(),
        false => mapping.is_canonical(),
    };

    // кодпоинт без подходящей декомпозиции - нижний уровень разворачивания
    if !applies {
        out.push(code);
        return Ok(());
    }

    for &element in &mapping.codes {
        expand(records, element, compatibility, depth + 1, out)?;
    }

    Ok(())
}
