// Trie node: owned children keyed by character

use std::collections::BTreeMap;

/// One prefix position in the trie.
///
/// Children are owned outright and kept in a `BTreeMap`, so iterating them
/// always yields characters in ascending order. That ordering is what makes
/// a pre-order walk produce words lexicographically.
///
/// A long word is a chain as deep as the word, so `Drop` and `Debug` are
/// written by hand to avoid recursing once per level. There is no `Clone`.
#[derive(Default)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, Node>,
    /// The path from the root to this node spells a stored word.
    pub(crate) terminal: bool,
}

impl Node {
    /// Follow `key` character by character from this node.
    pub(crate) fn descend(&self, key: &str) -> Option<&Node> {
        let mut node = self;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    pub(crate) fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Node> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(word: &str) -> Node {
        let mut root = Node::default();
        let mut node = &mut root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
        root
    }

    #[test]
    fn descend_existing_path() {
        let root = chain("cat");
        let node = root.descend("ca").unwrap();
        assert!(!node.terminal);
        assert!(node.has_children());
        assert!(root.descend("cat").unwrap().terminal);
    }

    #[test]
    fn descend_empty_key_is_self() {
        let root = chain("cat");
        assert!(std::ptr::eq(root.descend("").unwrap(), &root));
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let root = chain(&"z".repeat(200_000));
        assert!(root.descend(&"z".repeat(200_000)).unwrap().terminal);
        drop(root);
    }

    #[test]
    fn debug_lists_child_keys_only() {
        let root = chain("ab");
        assert_eq!(format!("{root:?}"), "Node { terminal: false, children: ['a'] }");
    }

    #[test]
    fn descend_missing_path() {
        let root = chain("cat");
        assert!(root.descend("co").is_none());
        assert!(root.descend("cats").is_none());
    }
}
