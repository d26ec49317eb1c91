//! Multi-select state for the ingredient picker.
//!
//! The picker presents the candidates that are not yet chosen; chosen
//! names render as removable chips and feed the ingredients
//! multi-filter.

use crate::types::Ingredient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    chosen: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a name. Choosing an already-chosen name is a no-op;
    /// returns whether the selection changed.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.chosen.contains(&name) {
            return false;
        }
        self.chosen.push(name);
        true
    }

    /// Un-choose a name; returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.chosen.len();
        self.chosen.retain(|chosen| chosen != name);
        self.chosen.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.chosen.iter().any(|chosen| chosen == name)
    }

    /// Chosen names in the order they were picked.
    pub fn names(&self) -> &[String] {
        &self.chosen
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Candidates still available to pick.
    pub fn remaining<'a>(&self, candidates: &'a [Ingredient]) -> Vec<&'a Ingredient> {
        candidates
            .iter()
            .filter(|candidate| !self.contains(&candidate.name))
            .collect()
    }

    /// True when every candidate is already chosen; the picker shows
    /// its "no more items" affordance instead of an empty list.
    pub fn is_exhausted(&self, candidates: &[Ingredient]) -> bool {
        self.remaining(candidates).is_empty()
    }
}
