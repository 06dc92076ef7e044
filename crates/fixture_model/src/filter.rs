use serde::{Deserialize, Serialize};

use crate::ALL_CATEGORIES;

/// Collision filter owned by a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionFilter {
    /// Collides with everything.
    #[default]
    Default,
    /// Collides with `other` when each side's category intersects the other's mask.
    Category { category: u32, mask: u32 },
}

/// Which field of a category filter an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    Category,
    Mask,
}

impl CollisionFilter {
    pub fn category_filter(category: u32, mask: u32) -> Self {
        Self::Category { category, mask }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Effective category bits (wildcard for the default filter).
    pub fn category(&self) -> u32 {
        match self {
            Self::Default => ALL_CATEGORIES,
            Self::Category { category, .. } => *category,
        }
    }

    /// Effective mask bits (wildcard for the default filter).
    pub fn mask(&self) -> u32 {
        match self {
            Self::Default => ALL_CATEGORIES,
            Self::Category { mask, .. } => *mask,
        }
    }

    pub fn bits(&self, axis: FilterAxis) -> u32 {
        match axis {
            FilterAxis::Category => self.category(),
            FilterAxis::Mask => self.mask(),
        }
    }

    pub fn allows(&self, other: &CollisionFilter) -> bool {
        match (self, other) {
            (Self::Default, _) | (_, Self::Default) => true,
            (
                Self::Category { category: ca, mask: ma },
                Self::Category { category: cb, mask: mb },
            ) => (ca & mb) != 0 && (cb & ma) != 0,
        }
    }
}
