use crate::data::NormalizationData;
use crate::fcd;
use crate::Form;

/// результат быстрой проверки нормализованности
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickCheckValue
{
    /// строка нормализована
    Yes,
    /// строка не нормализована
    No,
    /// без полной нормализации не определить
    Maybe,
}

/// быстрая проверка строки без выделения памяти.
///
/// помимо флагов кодпоинтов проверяется канонический порядок: нестартер
/// с меньшим классом после нестартера с большим - сразу No. Maybe
/// запоминается, но проход продолжается - дальше может встретиться No
pub fn check_str(data: &NormalizationData, input: &str, form: Form) -> QuickCheckValue
{
    if form == Form::Fcd {
        return match fcd::check_str(data, input) {
            true => QuickCheckValue::Yes,
            false => QuickCheckValue::No,
        };
    }

    let mut result = QuickCheckValue::Yes;
    let mut last_ccc = 0;

    for ch in input.chars() {
        let code = u32::from(ch);
        let ccc = data.combining_class(code);

        if last_ccc > ccc && ccc != 0 {
            return QuickCheckValue::No;
        }

        match data.quick_check(code, form) {
            QuickCheckValue::No => return QuickCheckValue::No,
            QuickCheckValue::Maybe => result = QuickCheckValue::Maybe,
            QuickCheckValue::Yes => (),
        }

        last_ccc = ccc;
    }

    result
}
