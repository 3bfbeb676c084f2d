use crate::codepoint::Codepoint;

// слоги хангыль не хранятся в таблицах - декомпозиция и композиция
// считаются арифметически из кода слога

/// начало блока слогов
pub const S_BASE: u32 = 0xAC00;
/// начало блока ведущих согласных чамо (L)
pub const L_BASE: u32 = 0x1100;
/// начало блока гласных чамо (V)
pub const V_BASE: u32 = 0x1161;
/// кодпоинт перед блоком завершающих согласных (T); T-индекс 0 - отсутствие согласной
pub const T_BASE: u32 = 0x11A7;
/// количество ведущих согласных
pub const L_COUNT: u32 = 19;
/// количество гласных
pub const V_COUNT: u32 = 21;
/// количество завершающих согласных, включая вариант "без согласной"
pub const T_COUNT: u32 = 28;
/// количество слогов на одну ведущую согласную
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// количество слогов хангыль
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

/// кодпоинт - слог хангыль?
#[inline(always)]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// гласная или завершающая согласная чамо, т.е. кодпоинт,
/// комбинируемый с предыдущим (L или слогом LV)?
#[inline(always)]
pub fn is_composable_vt(code: u32) -> bool
{
    let v = code.wrapping_sub(V_BASE);
    let t = code.wrapping_sub(T_BASE + 1);

    (v < V_COUNT) || (t < T_COUNT - 1)
}

/// арифметическая декомпозиция слога на чамо L, V [, T]
/// возвращает false, если кодпоинт - не слог хангыль
#[inline(always)]
pub fn decompose(code: u32, buffer: &mut Vec<Codepoint>) -> bool
{
    let s = code.wrapping_sub(S_BASE);

    if s >= S_COUNT {
        return false;
    }

    let l = s / N_COUNT;
    let v = (s % N_COUNT) / T_COUNT;
    let t = s % T_COUNT;

    buffer.push(Codepoint::starter(L_BASE + l));
    buffer.push(Codepoint::starter(V_BASE + v));

    if t != 0 {
        buffer.push(Codepoint::starter(T_BASE + t));
    }

    true
}

/// арифметическая композиция пары: L + V -> слог LV, слог LV + T -> слог LVT
#[inline(always)]
pub fn compose(first: u32, second: u32) -> Option<u32>
{
    let l = first.wrapping_sub(L_BASE);

    // ведущая согласная + гласная
    if l < L_COUNT {
        let v = second.wrapping_sub(V_BASE);

        if v < V_COUNT {
            return Some(S_BASE + l * N_COUNT + v * T_COUNT);
        }
    }

    let lv = first.wrapping_sub(S_BASE);

    // слог LV (без завершающей согласной) + завершающая согласная
    if lv < S_COUNT && lv % T_COUNT == 0 {
        let t = second.wrapping_sub(T_BASE);

        if t != 0 && t < T_COUNT {
            return Some(first + t);
        }
    }

    None
}
