use crate::core::label::ResultSet;

pub trait Segmenter: Send + Sync {
    /// All complete spellings of `input`. Empty input yields no spellings.
    fn segment(&self, input: &[char]) -> ResultSet;
    fn name(&self) -> &str;
}
