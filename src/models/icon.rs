use std::collections::BTreeMap;

use crate::models::Weight;

/// Raw SVG text of one icon, keyed by weight.
#[derive(Debug, Clone, Default)]
pub struct WeightSources {
    files: BTreeMap<Weight, String>,
    duplicated: Vec<Weight>,
}

impl WeightSources {
    /// Records the text for `weight`. A second file for the same weight
    /// (e.g. `-bold` and `-Bold`) keeps the first and marks the weight as duplicated.
    pub fn insert(&mut self, weight: Weight, text: String) {
        if self.files.contains_key(&weight) {
            if !self.duplicated.contains(&weight) {
                self.duplicated.push(weight);
                self.duplicated.sort();
            }
            return;
        }
        self.files.insert(weight, text);
    }

    pub fn get(&self, weight: Weight) -> Option<&str> {
        self.files.get(&weight).map(String::as_str)
    }

    /// Weights without a source file, in canonical order.
    pub fn missing(&self) -> Vec<Weight> {
        Weight::ALL
            .iter()
            .copied()
            .filter(|w| !self.files.contains_key(w))
            .collect()
    }

    pub fn duplicated(&self) -> &[Weight] {
        &self.duplicated
    }

    /// True iff exactly the six weights are present, each once.
    pub fn is_complete(&self) -> bool {
        self.files.len() == Weight::ALL.len() && self.duplicated.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weight, &str)> {
        self.files.iter().map(|(w, s)| (*w, s.as_str()))
    }
}

/// An icon to be generated: its slug, exported Elm names and sources.
#[derive(Debug, Clone)]
pub struct IconRecord {
    pub slug: String,
    pub name: String,
    pub alias: Option<String>,
    pub sources: WeightSources,
}

/// Icons in generation order.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    pub icons: Vec<IconRecord>,
}

impl IconSet {
    pub fn iter(&self) -> impl Iterator<Item = &IconRecord> {
        self.icons.iter()
    }
}

#[cfg(test)]
impl WeightSources {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
