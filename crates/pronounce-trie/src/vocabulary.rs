// Vocabulary: prefix tree with insertion and lexicographic autocomplete

use pronounce_core::InputError;
use pronounce_core::character::{first_invalid, is_word_char};

use crate::node::Node;

/// What a key reaches in the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixMatch {
    /// No stored word starts with the key.
    None,
    /// The key is a proper prefix of at least one word, but not a word itself.
    Prefix,
    /// The key is a word and nothing longer extends it.
    Exact,
    /// The key is a word and also a prefix of longer words.
    ExactAndPrefix,
}

/// Size summary of a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VocabularyStats {
    /// Distinct words stored.
    pub words: usize,
    /// Nodes below the root (one per distinct prefix character).
    pub nodes: usize,
    /// Length in characters of the longest word.
    pub max_depth: usize,
}

/// A dynamic set of known words answering prefix queries.
///
/// The vocabulary is an ordinary owned value with no interior mutability:
/// [`insert`](Self::insert) needs `&mut self` and
/// [`suggest`](Self::suggest) needs `&self`, so writers and readers are
/// serialized by the borrow checker. Share it behind an `Arc` once loading
/// is done, or behind an `RwLock` if it keeps growing.
#[derive(Debug, Default)]
pub struct Vocabulary {
    root: Node,
    stats: VocabularyStats,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from a batch of words.
    ///
    /// Fails on the first invalid word.
    pub fn from_words<I, S>(words: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::new();
        vocab.extend(words)?;
        Ok(vocab)
    }

    /// Insert a word.
    ///
    /// The word must be non-empty, lower-case and alphabetic; otherwise the
    /// vocabulary is left untouched and an error is returned. Returns
    /// `true` if the word was not stored before. Inserting a word twice has
    /// no observable effect.
    pub fn insert(&mut self, word: &str) -> Result<bool, InputError> {
        validate_word(word)?;
        let added = self.store(word);
        if added {
            tracing::trace!(word, "inserted word");
        }
        Ok(added)
    }

    fn store(&mut self, word: &str) -> bool {
        let mut created = 0usize;
        let mut depth = 0usize;
        let mut node = &mut self.root;
        for c in word.chars() {
            depth += 1;
            node = node.children.entry(c).or_insert_with(|| {
                created += 1;
                Node::default()
            });
        }

        self.stats.nodes += created;
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.stats.words += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        true
    }

    /// Insert every word of a batch, returning how many were new.
    ///
    /// Stops at the first invalid word; words inserted before it stay.
    pub fn extend<I, S>(&mut self, words: I) -> Result<usize, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word.as_ref())? {
                added += 1;
            }
        }
        tracing::debug!(added, total = self.stats.words, "extended vocabulary");
        Ok(added)
    }

    /// Up to `limit` stored words starting with `prefix`, in lexicographic order.
    ///
    /// An empty prefix matches every word. A prefix with no path in the
    /// trie, or `limit == 0`, yields nothing. The walk stops as soon as
    /// `limit` words are collected, so the cost depends on the prefix
    /// length and the size of the answer, not on the vocabulary size.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut out = Vec::new();
        if limit == 0 {
            return out;
        }
        let Some(start) = self.root.descend(prefix) else {
            return out;
        };

        // Explicit DFS stack: (node, path length in bytes before the node's
        // edge, edge character). Children are pushed in reverse so the
        // smallest character is popped first.
        let mut path = String::from(prefix);
        let mut stack: Vec<(&Node, usize, Option<char>)> = vec![(start, path.len(), None)];

        while let Some((node, base, edge)) = stack.pop() {
            path.truncate(base);
            if let Some(c) = edge {
                path.push(c);
            }
            if node.terminal {
                out.push(path.clone());
                if out.len() == limit {
                    break;
                }
            }
            let next = path.len();
            for (&c, child) in node.children.iter().rev() {
                stack.push((child, next, Some(c)));
            }
        }

        out
    }

    /// Every stored word, in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.suggest("", usize::MAX)
    }

    /// Whether `word` is stored exactly.
    pub fn contains(&self, word: &str) -> bool {
        self.root.descend(word).is_some_and(|n| n.terminal)
    }

    /// Classify `key` as a word, a prefix, both, or neither.
    pub fn lookup(&self, key: &str) -> PrefixMatch {
        match self.root.descend(key) {
            None => PrefixMatch::None,
            Some(n) => match (n.terminal, n.has_children()) {
                (false, false) => PrefixMatch::None,
                (false, true) => PrefixMatch::Prefix,
                (true, false) => PrefixMatch::Exact,
                (true, true) => PrefixMatch::ExactAndPrefix,
            },
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.stats.words
    }

    pub fn is_empty(&self) -> bool {
        self.stats.words == 0
    }

    pub fn node_count(&self) -> usize {
        self.stats.nodes
    }

    pub fn stats(&self) -> VocabularyStats {
        self.stats
    }
}

// Rebuilt word by word, so copying never recurses per trie level.
impl Clone for Vocabulary {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for word in self.words() {
            copy.store(&word);
        }
        copy
    }
}

fn validate_word(word: &str) -> Result<(), InputError> {
    if word.is_empty() {
        return Err(InputError::EmptyWord);
    }
    if let Some(ch) = first_invalid(word, is_word_char) {
        return Err(InputError::InvalidWordChar {
            word: word.to_string(),
            ch,
        });
    }
    Ok(())
}
