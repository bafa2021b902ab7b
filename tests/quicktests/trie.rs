use refresher::{AlphabetTrie, CountingTrie};

use quickcheck::{Arbitrary, Gen};

use crate::Op;

/// A lowercase string that fits an `AlphabetTrie::ascii_lowercase`.
#[derive(Clone, Debug)]
struct Lowercase(String);

impl Arbitrary for Lowercase {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 6;
        let letters: Vec<char> = ('a'..='e').collect();
        Lowercase((0..len).map(|_| *g.choose(&letters).unwrap()).collect())
    }
}

fn prefixes(s: &str) -> impl Iterator<Item = &str> {
    (0..=s.len()).map(move |end| &s[..end])
}

quickcheck::quickcheck! {
    fn alphabet_trie_contains_every_prefix(words: Vec<Lowercase>) -> bool {
        let mut trie = AlphabetTrie::ascii_lowercase();
        for Lowercase(word) in &words {
            trie.add(word).unwrap();
        }

        words.iter().all(|Lowercase(word)| {
            trie.has(word).unwrap() && prefixes(word).all(|prefix| trie.contains(prefix).unwrap())
        })
    }

    fn counting_trie_contains_every_prefix(words: Vec<String>) -> bool {
        let trie: CountingTrie = words.iter().collect();

        words.iter().all(|word| {
            trie.has(word)
                && word.char_indices().all(|(end, _)| trie.contains(&word[..end]))
        })
    }

    fn alphabet_trie_matches_a_set(ops: Vec<Op<Lowercase>>) -> bool {
        let mut trie = AlphabetTrie::ascii_lowercase();
        let mut set = std::collections::HashSet::new();

        for op in &ops {
            match op {
                Op::Insert(Lowercase(word)) => {
                    trie.add(word).unwrap();
                    set.insert(word.clone());
                }
                Op::Remove(Lowercase(word)) => {
                    if trie.remove(word).unwrap() != set.remove(word) {
                        return false;
                    }
                }
            }
        }

        ops.iter().all(|op| {
            let (Op::Insert(Lowercase(word)) | Op::Remove(Lowercase(word))) = op;
            // The empty string is a prefix of everything, even of nothing.
            let is_prefix = word.is_empty() || set.iter().any(|stored| stored.starts_with(word.as_str()));
            trie.has(word).unwrap() == set.contains(word) && trie.contains(word).unwrap() == is_prefix
        }) && trie.is_empty() == set.is_empty()
    }

    fn counting_trie_counts_copies(ops: Vec<Op<Lowercase>>) -> bool {
        let mut trie = CountingTrie::new();
        let mut counts = std::collections::HashMap::<String, usize>::new();

        for op in &ops {
            match op {
                Op::Insert(Lowercase(word)) => {
                    trie.add(word);
                    *counts.entry(word.clone()).or_default() += 1;
                }
                Op::Remove(Lowercase(word)) => {
                    let stored = counts.get(word).copied().unwrap_or(0);
                    if trie.remove(word).unwrap() != (stored > 0) {
                        return false;
                    }
                    if stored > 0 {
                        counts.insert(word.clone(), stored - 1);
                    }
                }
            }
        }

        counts.iter().all(|(word, count)| trie.count_occurrences(word) == *count)
    }
}
