#![forbid(unsafe_code)]

//! Per-position dismiss directions.

use std::collections::BTreeMap;

use super::direction::DismissDirection;

/// Chooses the allowed dismiss direction for the row at `index`.
///
/// Consulted once, when the pointer goes down on a row.
pub trait DismissDirectionPolicy {
    fn direction_for(&self, index: usize) -> DismissDirection;
}

/// Same direction for every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uniform(pub DismissDirection);

impl DismissDirectionPolicy for Uniform {
    fn direction_for(&self, _index: usize) -> DismissDirection {
        self.0
    }
}

/// A default direction with per-index overrides.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    default: DismissDirection,
    by_index: BTreeMap<usize, DismissDirection>,
}

impl Overrides {
    #[must_use]
    pub fn new(default: DismissDirection) -> Self {
        Self {
            default,
            by_index: BTreeMap::new(),
        }
    }

    /// Use `direction` for `index` (builder pattern).
    #[must_use]
    pub fn with(mut self, index: usize, direction: DismissDirection) -> Self {
        self.by_index.insert(index, direction);
        self
    }
}

impl DismissDirectionPolicy for Overrides {
    fn direction_for(&self, index: usize) -> DismissDirection {
        self.by_index.get(&index).copied().unwrap_or(self.default)
    }
}

impl<F> DismissDirectionPolicy for F
where
    F: Fn(usize) -> DismissDirection,
{
    fn direction_for(&self, index: usize) -> DismissDirection {
        self(index)
    }
}
