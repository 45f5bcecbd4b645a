use std::sync::Arc;

use crate::core::label::{label_of, Path, ResultSet};
use crate::core::segmentor::Segmenter;
use crate::dict::symbol_table::{Element, SymbolTable};

const SEGMENTER_NAME: &str = "STACK_SEGMENTER";

// one symbol of a partial path; `parent` points back toward the first symbol
struct PathNode<'a> {
    parent: Option<usize>,
    element: &'a Element,
}

/// Same traversal as [`RecursiveSegmenter`](crate::core::recursive_segmenter::RecursiveSegmenter)
/// driven by an explicit work stack, so call stack depth does not grow with
/// the input length.
///
/// Partial paths live in an arena: extending a path pushes a new node
/// pointing at its parent, so sibling branches share their common prefix
/// without ever mutating it. Popping a stack entry truncates the arena back
/// to that entry's node, dropping the finished subtree explored before it,
/// so the arena holds at most one node per symbol length per position.
pub struct StackSegmenter {
    table: Arc<SymbolTable>,
}

impl Segmenter for StackSegmenter {
    fn segment(&self, input: &[char]) -> ResultSet {
        self.search(input).0
    }

    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}

impl StackSegmenter {
    pub fn new(table: Arc<SymbolTable>) -> Self {
        StackSegmenter { table }
    }

    // forms plus the largest arena size seen
    fn search(&self, input: &[char]) -> (ResultSet, usize) {
        let mut forms = ResultSet::new();
        let mut arena: Vec<PathNode> = Vec::new();
        let mut peak = 0_usize;
        // (offset into input, last node of the path so far, arena length to keep)
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(0, None, 0)];

        while let Some((offset, node, mark)) = stack.pop() {
            // nodes past `mark` belong to subtrees that are already done
            arena.truncate(mark);
            if offset == input.len() {
                if let Some(last) = node {
                    forms.push(Self::collect_path(&arena, last));
                }
                continue;
            }
            let hits = self.table.matches_at(input, offset);
            // pushed longest first so the shortest symbol is popped first
            for hit in hits.into_iter().rev() {
                arena.push(PathNode {
                    parent: node,
                    element: hit.entry,
                });
                stack.push((hit.end(), Some(arena.len() - 1), arena.len()));
            }
            peak = peak.max(arena.len());
        }
        (forms, peak)
    }

    fn collect_path(arena: &[PathNode], last: usize) -> Path {
        let mut path = Path::new();
        let mut cursor = Some(last);
        while let Some(idx) = cursor {
            path.push(label_of(arena[idx].element));
            cursor = arena[idx].parent;
        }
        path.reverse();
        path
    }
}
