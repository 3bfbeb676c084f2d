use crate::codepoint::Codepoint;
use crate::compose;
use crate::data::NormalizationData;
use crate::decompose;
use crate::fcd;
use crate::quick_check::QuickCheckValue;
use crate::Form;

/// двунаправленный итератор нормализованных кодпоинтов.
///
/// строка обходится по сегментам между безопасными границами - кодпоинтами,
/// через которые нормализация не переносит знаки. текущий сегмент
/// нормализуется в буфер, курсор ходит по буферу; целиком строка
/// не материализуется. `next` и `previous` симметричны: после `next`
/// вызов `previous` возвращает тот же кодпоинт
pub struct NormalizingIter<'a>
{
    data: &'a NormalizationData,
    form: Form,
    text: &'a str,
    /// байтовые границы сегмента, загруженного в буфер
    seg_start: usize,
    seg_end: usize,
    /// нормализованный текущий сегмент
    buffer: Vec<Codepoint>,
    /// курсор в буфере
    buf_pos: usize,
}

impl<'a> NormalizingIter<'a>
{
    /// итератор с курсором в начале строки
    pub fn new(data: &'a NormalizationData, text: &'a str, form: Form) -> Self
    {
        Self {
            data,
            form,
            text,
            seg_start: 0,
            seg_end: 0,
            buffer: vec![],
            buf_pos: 0,
        }
    }

    /// итератор с курсором в конце строки
    pub fn new_at_end(data: &'a NormalizationData, text: &'a str, form: Form) -> Self
    {
        Self {
            data,
            form,
            text,
            seg_start: text.len(),
            seg_end: text.len(),
            buffer: vec![],
            buf_pos: 0,
        }
    }

    /// кодпоинт - безопасная граница сегмента? нормализация не переносит
    /// знаки через стартер, заведомо нормализованный для данной формы.
    /// критерий консервативен: ложный отказ лишь укрупняет сегмент
    fn boundary_before(&self, code: u32) -> bool
    {
        match self.form {
            Form::Fcd => self.data.lead_ccc(code) == 0,
            form => {
                self.data.combining_class(code) == 0
                    && self.data.quick_check(code, form) == QuickCheckValue::Yes
            }
        }
    }

    fn normalize_segment(&self, segment: &str) -> Vec<Codepoint>
    {
        match self.form {
            Form::Nfd => decompose::decompose_str(self.data, segment, false),
            Form::Nfkd => decompose::decompose_str(self.data, segment, true),
            Form::Nfc | Form::Nfkc => {
                let mut buffer =
                    decompose::decompose_str(self.data, segment, self.form == Form::Nfkc);
                compose::compose(self.data, &mut buffer);
                buffer
            }
            Form::Fcd => fcd::normalize(self.data, segment)
                .chars()
                .map(|ch| {
                    let code = u32::from(ch);
                    Codepoint {
                        code,
                        ccc: self.data.combining_class(code),
                    }
                })
                .collect(),
        }
    }

    /// загрузить в буфер сегмент, начинающийся на seg_end
    fn load_forward(&mut self) -> bool
    {
        if self.seg_end == self.text.len() {
            return false;
        }

        let mut end = self.seg_end;

        for (offset, ch) in self.text[self.seg_end ..].char_indices() {
            if offset > 0 && self.boundary_before(u32::from(ch)) {
                break;
            }

            end = self.seg_end + offset + ch.len_utf8();
        }

        self.buffer = self.normalize_segment(&self.text[self.seg_end .. end]);
        self.seg_start = self.seg_end;
        self.seg_end = end;
        self.buf_pos = 0;

        true
    }

    /// загрузить в буфер сегмент, заканчивающийся на seg_start
    fn load_backward(&mut self) -> bool
    {
        if self.seg_start == 0 {
            return false;
        }

        let mut start = self.seg_start;

        for (offset, ch) in self.text[.. self.seg_start].char_indices().rev() {
            start = offset;

            if self.boundary_before(u32::from(ch)) {
                break;
            }
        }

        self.buffer = self.normalize_segment(&self.text[start .. self.seg_start]);
        self.seg_end = self.seg_start;
        self.seg_start = start;
        self.buf_pos = self.buffer.len();

        true
    }

    /// нормализованный кодпоинт перед курсором, курсор сдвигается назад.
    /// None - курсор в начале строки
    pub fn previous(&mut self) -> Option<char>
    {
        if self.buf_pos == 0 && !self.load_backward() {
            return None;
        }

        self.buf_pos -= 1;

        Some(self.buffer[self.buf_pos].char())
    }
}

impl Iterator for NormalizingIter<'_>
{
    type Item = char;

    /// нормализованный кодпоинт за курсором, курсор сдвигается вперед.
    /// None - курсор в конце строки
    fn next(&mut self) -> Option<Self::Item>
    {
        if self.buf_pos == self.buffer.len() && !self.load_forward() {
            return None;
        }

        let ch = self.buffer[self.buf_pos].char();
        self.buf_pos += 1;

        Some(ch)
    }
}
