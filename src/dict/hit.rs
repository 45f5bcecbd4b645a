// 字典匹配命中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<V> {
    // 命中起始位置（字符下标）
    pub begin: usize,
    // 命中长度
    pub length: usize,
    // 命中的词条
    pub entry: V,
}

impl<V> Hit<V> {
    pub fn new(begin: usize, length: usize, entry: V) -> Self {
        Hit {
            begin,
            length,
            entry,
        }
    }

    pub fn end(&self) -> usize {
        self.begin + self.length
    }
}
