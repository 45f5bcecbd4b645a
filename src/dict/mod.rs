pub mod elements;
pub mod hit;
pub mod symbol_table;
pub mod trie;
