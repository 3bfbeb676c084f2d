use std::collections::HashMap;

/// размер блока данных (значений на блок)
const DATA_BLOCK_SIZE: usize = 128;
/// размер блока индекса среднего уровня
const INDEX_BLOCK_SIZE: usize = 64;
/// количество кодпоинтов Unicode
const CODEPOINTS: usize = 0x110000;
/// количество блоков индекса верхнего уровня
const HIGH_BLOCKS: usize = CODEPOINTS / (DATA_BLOCK_SIZE * INDEX_BLOCK_SIZE);

/// трехуровневая таблица значений по кодпоинту:
/// индекс верхнего уровня -> блок индекса среднего уровня -> блок данных
///
/// одинаковые блоки обоих уровней дедуплицируются при сборке, поэтому
/// большие неназначенные диапазоны (основная часть пространства Unicode)
/// складываются в один нулевой блок
pub struct CodePointTrie
{
    /// индекс верхнего уровня: биты 13..21 кода -> номер блока среднего индекса
    high: Box<[u16]>,
    /// блоки индекса среднего уровня: биты 7..13 кода -> номер блока данных
    mid: Box<[u16]>,
    /// блоки данных: биты 0..7 кода -> значение
    data: Box<[u32]>,
}

impl CodePointTrie
{
    /// значение для кодпоинта; 0 - дефолт для неназначенных кодов.
    /// определено только для скалярных значений Unicode - граница проверяется
    /// публичным API до обращения к таблице
    #[inline(always)]
    pub fn get(&self, code: u32) -> u32
    {
        debug_assert!(code <= 0x10FFFF);

        let mid_block = self.high[(code >> 13) as usize] as usize;
        let data_block =
            self.mid[mid_block * INDEX_BLOCK_SIZE + ((code >> 7) & 0x3F) as usize] as usize;

        self.data[data_block * DATA_BLOCK_SIZE + (code & 0x7F) as usize]
    }
}

/// сборщик таблицы: значения пишутся в плоский массив,
/// дедупликация блоков происходит в `build`
pub struct CodePointTrieBuilder
{
    values: Vec<u32>,
}

impl CodePointTrieBuilder
{
    pub fn new() -> Self
    {
        Self {
            values: vec![0; CODEPOINTS],
        }
    }

    #[inline]
    pub fn set(&mut self, code: u32, value: u32)
    {
        self.values[code as usize] = value;
    }

    #[inline]
    pub fn get(&self, code: u32) -> u32
    {
        self.values[code as usize]
    }

    pub fn build(self) -> CodePointTrie
    {
        // дедупликация блоков данных
        let mut data: Vec<u32> = vec![];
        let mut data_blocks: HashMap<Vec<u32>, u16> = HashMap::new();
        let mut mid_full: Vec<u16> = Vec::with_capacity(CODEPOINTS / DATA_BLOCK_SIZE);

        for chunk in self.values.chunks_exact(DATA_BLOCK_SIZE) {
            let key = chunk.to_vec();
            let next = (data.len() / DATA_BLOCK_SIZE) as u16;

            let block = *data_blocks.entry(key).or_insert_with(|| {
                data.extend_from_slice(chunk);
                next
            });

            mid_full.push(block);
        }

        // дедупликация блоков среднего индекса
        let mut mid: Vec<u16> = vec![];
        let mut mid_blocks: HashMap<Vec<u16>, u16> = HashMap::new();
        let mut high: Vec<u16> = Vec::with_capacity(HIGH_BLOCKS);

        for chunk in mid_full.chunks_exact(INDEX_BLOCK_SIZE) {
            let key = chunk.to_vec();
            let next = (mid.len() / INDEX_BLOCK_SIZE) as u16;

            let block = *mid_blocks.entry(key).or_insert_with(|| {
                mid.extend_from_slice(chunk);
                next
            });

            high.push(block);
        }

        tracing::debug!(
            data_blocks = data.len() / DATA_BLOCK_SIZE,
            index_blocks = mid.len() / INDEX_BLOCK_SIZE,
            bytes = data.len() * 4 + mid.len() * 2 + high.len() * 2,
            "таблица кодпоинтов собрана"
        );

        CodePointTrie {
            high: high.into_boxed_slice(),
            mid: mid.into_boxed_slice(),
            data: data.into_boxed_slice(),
        }
    }
}

impl Default for CodePointTrieBuilder
{
    fn default() -> Self
    {
        Self::new()
    }
}
