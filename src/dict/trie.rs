use std::collections::HashMap;

use crate::dict::hit::Hit;

#[derive(Debug)]
pub struct TrieNode<V> {
    entry: Option<V>,
    child_nodes: HashMap<char, TrieNode<V>>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        TrieNode {
            entry: None,
            child_nodes: HashMap::new(),
        }
    }
}

impl<V: Copy> TrieNode<V> {
    pub fn has_childs(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    pub fn get<C: Iterator<Item = char>>(&self, chars: C) -> Option<V> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get(&c)?;
        }
        current_node.entry
    }

    /// Stores `entry` at the end of `chars`, returning the entry it replaced.
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C, entry: V) -> Option<V> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.entry(c).or_default();
        }
        current_node.entry.replace(entry)
    }

    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> Option<V> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get_mut(&c)?;
        }
        current_node.entry.take()
    }

    /// Every final node reached while walking `char_list` from `offset`,
    /// shortest first, never looking further than `max_len` chars.
    pub fn match_with_offset(&self, char_list: &[char], offset: usize, max_len: usize) -> Vec<Hit<V>> {
        let mut hits = Vec::new();
        let mut current_node = self;
        if offset >= char_list.len() {
            return hits;
        }
        for (counter, c) in char_list[offset..].iter().take(max_len).enumerate() {
            match current_node.child_nodes.get(c) {
                Some(node) => current_node = node,
                None => break,
            }
            if let Some(entry) = current_node.entry {
                hits.push(Hit::new(offset, counter + 1, entry));
            }
            if !current_node.has_childs() {
                break;
            }
        }
        hits
    }
}

#[derive(Debug)]
pub struct Trie<V> {
    root: TrieNode<V>,
    size: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Trie {
            root: TrieNode::default(),
            size: 0,
        }
    }
}

impl<V: Copy> Trie<V> {
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C, entry: V) -> Option<V> {
        let replaced = self.root.insert(chars, entry);
        if replaced.is_none() {
            self.size += 1;
        }
        replaced
    }

    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> Option<V> {
        let removed = self.root.delete(chars);
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }

    pub fn get<C: Iterator<Item = char>>(&self, chars: C) -> Option<V> {
        self.root.get(chars)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn match_word_with_offset(&self, char_list: &[char], offset: usize, max_len: usize) -> Vec<Hit<V>> {
        self.root.match_with_offset(char_list, offset, max_len)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn build() -> Trie<usize> {
        let mut trie = Trie::default();
        trie.insert("s".chars(), 0);
        trie.insert("sn".chars(), 1);
        trie.insert("n".chars(), 2);
        trie.insert("na".chars(), 3);
        trie.insert("uus".chars(), 4);
        trie.insert("u".chars(), 5);
        trie
    }

    #[test]
    fn trie_get() {
        let trie = build();
        assert!(trie.get("sn".chars()).is_some());
        assert!(trie.get("uus".chars()).is_some());
        assert!(trie.get("uu".chars()).is_none());
        assert!(trie.get("snack".chars()).is_none());
        assert_eq!(6, trie.len());
    }

    #[test]
    fn trie_insert_returns_replaced() {
        let mut trie = build();
        assert_eq!(Some(1), trie.insert("sn".chars(), 9));
        assert_eq!(6, trie.len());
        assert_eq!(Some(9), trie.get("sn".chars()));
    }

    #[test]
    fn trie_delete() {
        let mut trie = build();
        assert_eq!(Some(1), trie.delete("sn".chars()));
        assert_eq!(None, trie.delete("sn".chars()));
        assert!(trie.get("s".chars()).is_some());
        assert_eq!(5, trie.len());
    }

    #[test]
    fn trie_search() {
        let trie = build();
        let chars: Vec<char> = "snack".chars().collect();
        let hits = trie.match_word_with_offset(&chars, 0, 3);
        let lengths: Vec<usize> = hits.iter().map(|h| h.length).collect();
        assert_eq!(vec![1, 2], lengths);
        assert_eq!(vec![0, 1], hits.iter().map(|h| h.entry).collect::<Vec<_>>());

        let hits = trie.match_word_with_offset(&chars, 1, 3);
        assert_eq!(2, hits.len());
        assert_eq!(1, hits[0].begin);
    }

    #[test]
    fn trie_search_respects_max_len() {
        let trie = build();
        let chars: Vec<char> = "uus".chars().collect();
        let hits = trie.match_word_with_offset(&chars, 0, 2);
        assert_eq!(1, hits.len());
        assert_eq!(1, hits[0].length);
        let hits = trie.match_word_with_offset(&chars, 0, 3);
        assert_eq!(vec![1, 3], hits.iter().map(|h| h.length).collect::<Vec<_>>());
        assert!(trie.match_word_with_offset(&chars, 3, 3).is_empty());
    }
}
