/// кодпоинт в рабочем буфере нормализации: код + его класс комбинирования,
/// чтобы не ходить в таблицу при переупорядочивании и компоновке
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Codepoint
{
    pub code: u32,
    pub ccc: u8,
}

impl Codepoint
{
    #[inline(always)]
    pub fn starter(code: u32) -> Self
    {
        Self { code, ccc: 0 }
    }

    #[inline(always)]
    pub fn is_starter(&self) -> bool
    {
        self.ccc == 0
    }

    /// буфер содержит только скалярные значения - безопасно по построению
    #[inline(always)]
    pub fn char(&self) -> char
    {
        debug_assert!(char::from_u32(self.code).is_some());

        unsafe { char::from_u32_unchecked(self.code) }
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{{ U+{:04X}, ccc: {} }}", self.code, self.ccc)
    }
}
