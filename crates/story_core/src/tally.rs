use std::collections::HashMap;

/// Character name to accumulated mention count.
///
/// Names are compared as exact strings: "Bob" and "bob" are different
/// characters. Iteration follows the order in which names first appeared.
/// Equality compares the name/count mapping and ignores that order.
#[derive(Debug, Clone, Default)]
pub struct CharacterTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CharacterTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` mentions of `name`, appending the name if it is new.
    pub fn add(&mut self, name: impl Into<String>, count: u64) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => {
                let entry = &mut self.entries[slot].1;
                *entry = entry.saturating_add(count);
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, count));
            }
        }
    }

    /// Folds `other` into `self` and returns the combined tally.
    ///
    /// Names already present keep their position; names new to `self` are
    /// appended in `other`'s order.
    #[must_use]
    pub fn merge(mut self, other: CharacterTally) -> CharacterTally {
        for (name, count) in other.entries {
            self.add(name, count);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_mentions(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }
}

impl PartialEq for CharacterTally {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, count)| other.get(name) == Some(count))
    }
}

impl Eq for CharacterTally {}

impl<S: Into<String>> FromIterator<(S, u64)> for CharacterTally {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut tally = CharacterTally::new();
        for (name, count) in iter {
            tally.add(name, count);
        }
        tally
    }
}

impl IntoIterator for CharacterTally {
    type Item = (String, u64);
    type IntoIter = std::vec::IntoIter<(String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
