use std::sync::Arc;

use crate::core::label::{extend_path, label_of, Label, ResultSet};
use crate::core::segmentor::Segmenter;
use crate::dict::symbol_table::SymbolTable;

const SEGMENTER_NAME: &str = "RECURSIVE_SEGMENTER";

/// Depth-first backtracking over symbol prefixes, one call frame per symbol.
pub struct RecursiveSegmenter {
    table: Arc<SymbolTable>,
}

impl Segmenter for RecursiveSegmenter {
    fn segment(&self, input: &[char]) -> ResultSet {
        let mut forms = ResultSet::new();
        self.explore(input, 0, &[], &mut forms);
        forms
    }

    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}

impl RecursiveSegmenter {
    pub fn new(table: Arc<SymbolTable>) -> Self {
        RecursiveSegmenter { table }
    }

    fn explore(&self, input: &[char], offset: usize, path: &[Label], forms: &mut ResultSet) {
        if offset == input.len() {
            // whole input consumed
            if !path.is_empty() {
                forms.push(path.to_vec());
            }
            return;
        }
        // hits come back shortest first, so 1-char symbols are explored before 2 and 3
        for hit in self.table.matches_at(input, offset) {
            let new_path = extend_path(path, label_of(hit.entry));
            self.explore(input, hit.end(), &new_path, forms);
        }
    }
}
