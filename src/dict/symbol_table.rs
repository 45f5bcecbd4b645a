use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::core::char_util::{is_blank, is_symbol, regularize};
use crate::dict::elements::ELEMENTS;
use crate::dict::hit::Hit;
use crate::dict::trie::Trie;
use crate::error::{ElementalError, Result};

/// Longest element symbol, in chars.
pub const MAX_SYMBOL_LEN: usize = 3;

/// A chemical element as stored in the table, with canonical symbol casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub symbol: String,
    pub name: String,
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Case-insensitive symbol -> element table.
///
/// Symbols are indexed by their lowercased chars in a [`Trie`], so one walk
/// over the remaining input yields every symbol that prefixes it.
#[derive(Debug, Default)]
pub struct SymbolTable {
    elements: Vec<Element>,
    index: Trie<usize>,
}

impl SymbolTable {
    /// Table of all known elements.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(ELEMENTS.entries().map(|(symbol, name)| (*symbol, *name)))
    }

    pub fn from_entries<I, S, N>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, N)>,
        S: AsRef<str>,
        N: AsRef<str>,
    {
        let mut table = SymbolTable::default();
        for (symbol, name) in entries {
            table.insert(symbol.as_ref(), name.as_ref())?;
        }
        info!("load symbol table size = {}", table.len());
        Ok(table)
    }

    /// Adds one element. Fails on a malformed symbol, a blank name, or a
    /// symbol already present under case-insensitive comparison.
    pub fn insert(&mut self, symbol: &str, name: &str) -> Result<()> {
        if !is_symbol(symbol) {
            return Err(ElementalError::InvalidSymbol(symbol.to_string()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ElementalError::EmptyName(symbol.to_string()));
        }
        if let Some(existing) = self.index.get(symbol.chars().map(regularize)) {
            return Err(ElementalError::DuplicateSymbol {
                symbol: symbol.to_string(),
                existing: self.elements[existing].symbol.clone(),
            });
        }
        self.elements.push(Element {
            symbol: symbol.to_string(),
            name: name.to_string(),
        });
        self.index
            .insert(symbol.chars().map(regularize), self.elements.len() - 1);
        Ok(())
    }

    // 加载扩展词典：每行 `Symbol Name`，`#` 开头为注释
    pub fn load_ext_dict<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut total = 0_usize;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || content.starts_with('#') {
                continue;
            }
            let (symbol, name) = content.split_once(char::is_whitespace).ok_or_else(|| {
                ElementalError::MalformedLine {
                    line: idx + 1,
                    content: content.to_string(),
                }
            })?;
            self.insert(symbol, name)?;
            total += 1;
        }
        info!("ext dict total size = {}", total);
        Ok(total)
    }

    pub fn load_ext_dict_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        debug!("loading ext dict {}", path.display());
        let file = File::open(path)?;
        self.load_ext_dict(BufReader::new(file))
    }

    // 批量屏蔽符号
    pub fn disable_symbols<S: AsRef<str>>(&mut self, symbols: &[S]) {
        for symbol in symbols {
            if self
                .index
                .delete(symbol.as_ref().chars().map(regularize))
                .is_some()
            {
                debug!("disabled symbol {}", symbol.as_ref());
            }
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<&Element> {
        if is_blank(symbol) {
            return None;
        }
        self.index
            .get(symbol.chars().map(regularize))
            .map(|idx| &self.elements[idx])
    }

    /// Every symbol that prefixes `chars[offset..]`, shortest first.
    pub fn matches_at(&self, chars: &[char], offset: usize) -> Vec<Hit<&Element>> {
        let window: Vec<char> = chars
            .iter()
            .skip(offset)
            .take(MAX_SYMBOL_LEN)
            .map(|c| regularize(*c))
            .collect();
        self.index
            .match_word_with_offset(&window, 0, MAX_SYMBOL_LEN)
            .into_iter()
            .map(|hit| Hit::new(offset, hit.length, &self.elements[hit.entry]))
            .collect()
    }

    /// Enabled elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements.iter().enumerate().filter_map(move |(idx, element)| {
            match self.index.get(element.symbol.chars().map(regularize)) {
                Some(found) if found == idx => Some(element),
                _ => None,
            }
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
