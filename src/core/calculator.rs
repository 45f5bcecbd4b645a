use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::config::configuration::Configuration;
use crate::core::char_util::is_blank;
use crate::core::label::ResultSet;
use crate::core::recursive_segmenter::RecursiveSegmenter;
use crate::core::segmentor::Segmenter;
use crate::core::stack_segmenter::StackSegmenter;
use crate::dict::symbol_table::SymbolTable;
use crate::error::Result;

/// How the prefix search walks the input. Both modes produce identical
/// results; `Iterative` keeps call stack usage flat for long inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    Recursive,
    #[default]
    Iterative,
}

/// Spells words with element symbols.
pub struct ElementalCalculator {
    table: Arc<SymbolTable>,
    segmenter: Box<dyn Segmenter>,
    mode: TraversalMode,
}

impl Default for ElementalCalculator {
    fn default() -> Self {
        let table = SymbolTable::builtin().unwrap_or_else(|e| {
            error!("built-in element table rejected: {}", e);
            SymbolTable::default()
        });
        ElementalCalculator::new(Arc::new(table), TraversalMode::default())
    }
}

impl ElementalCalculator {
    pub fn new(table: Arc<SymbolTable>, mode: TraversalMode) -> Self {
        let segmenter: Box<dyn Segmenter> = match mode {
            TraversalMode::Recursive => Box::new(RecursiveSegmenter::new(table.clone())),
            TraversalMode::Iterative => Box::new(StackSegmenter::new(table.clone())),
        };
        ElementalCalculator {
            table,
            segmenter,
            mode,
        }
    }

    pub fn with_config(cfg: &dyn Configuration) -> Result<Self> {
        let mut table = SymbolTable::builtin()?;
        for path in cfg.get_ext_dictionaries() {
            table.load_ext_dict_file(&path)?;
        }
        table.disable_symbols(cfg.get_disabled_symbols().as_slice());
        Ok(ElementalCalculator::new(
            Arc::new(table),
            cfg.get_traversal_mode(),
        ))
    }

    /// Every way to spell `word` with element symbols, shorter symbols
    /// explored first at each position.
    ///
    /// Absent, empty and whitespace-only words have no spellings. Other
    /// words are matched as given, untrimmed.
    pub fn elemental_forms(&self, word: Option<&str>) -> ResultSet {
        let word = match word {
            Some(word) if !is_blank(word) => word,
            _ => return ResultSet::new(),
        };
        let chars: Vec<char> = word.chars().collect();
        let forms = self.segmenter.segment(&chars);
        debug!(
            "{} found {} forms for {:?}",
            self.segmenter.name(),
            forms.len(),
            word
        );
        forms
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }
}
