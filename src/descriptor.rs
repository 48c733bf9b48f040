//! Move list projection for history navigation UI.

use serde::{Deserialize, Serialize};

/// Display order for the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest snapshot first.
    #[default]
    Ascending,
    /// Newest snapshot first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One entry in the move navigation list.
///
/// Descriptors carry the snapshot index they were built with, so a
/// reversed list still addresses the right snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    index: usize,
    is_current: bool,
}

impl MoveDescriptor {
    pub(crate) fn new(index: usize, is_current: bool) -> Self {
        Self { index, is_current }
    }

    /// Index of the snapshot this entry addresses.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True if this entry addresses the displayed snapshot.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Display label: "game start" for index 0, "move #N" otherwise.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "game start".to_string()
        } else {
            format!("move #{}", self.index)
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
