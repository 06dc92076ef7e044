//! Keeps a draft's collision filter in sync with the category and mask lists.

use fixture_model::{bits_of, indices_of, CollisionFilter, FilterAxis, ALL_CATEGORIES, CATEGORY_COUNT};

use crate::command::{FilterKind, ListSelection};
use crate::widgets::SelectionList;

/// What a settled list selection did to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterUpdate {
    /// The default filter was replaced by a new category filter.
    Installed { category: u32, mask: u32 },
    /// One field of the existing category filter was overwritten.
    Mutated { axis: FilterAxis, bits: u32 },
}

/// Writes `bits` to `axis`. A default filter is replaced by a category filter
/// with the wildcard on the other axis; a category filter is edited in place.
pub fn apply_filter_bits(filter: &mut CollisionFilter, axis: FilterAxis, bits: u32) -> FilterUpdate {
    match filter {
        CollisionFilter::Default => {
            let (category, mask) = match axis {
                FilterAxis::Category => (bits, ALL_CATEGORIES),
                FilterAxis::Mask => (ALL_CATEGORIES, bits),
            };
            *filter = CollisionFilter::Category { category, mask };
            FilterUpdate::Installed { category, mask }
        }
        CollisionFilter::Category { category, mask } => {
            match axis {
                FilterAxis::Category => *category = bits,
                FilterAxis::Mask => *mask = bits,
            }
            FilterUpdate::Mutated { axis, bits }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBitmaskEditor {
    kind: FilterKind,
    categories: SelectionList,
    masks: SelectionList,
}

impl FilterBitmaskEditor {
    pub fn from_filter(filter: &CollisionFilter) -> Self {
        let mut categories = SelectionList::new(CATEGORY_COUNT);
        let mut masks = SelectionList::new(CATEGORY_COUNT);
        let kind = match filter {
            CollisionFilter::Default => {
                categories.set_selected_index(0);
                masks.set_selected_index(0);
                FilterKind::Default
            }
            CollisionFilter::Category { category, mask } => {
                categories.set_selected_indices(&indices_of(*category));
                masks.set_selected_indices(&indices_of(*mask));
                FilterKind::Category
            }
        };
        Self { kind, categories, masks }
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Lists and their labels are only shown for the category radio.
    pub fn lists_visible(&self) -> bool {
        self.kind == FilterKind::Category
    }

    /// Radio toggle: visibility only, the filter is left alone.
    pub fn set_kind(&mut self, kind: FilterKind) {
        self.kind = kind;
    }

    pub fn list(&self, axis: FilterAxis) -> &SelectionList {
        match axis {
            FilterAxis::Category => &self.categories,
            FilterAxis::Mask => &self.masks,
        }
    }

    /// Mirrors the selection into the list and, once settled, into `filter`.
    pub fn select(
        &mut self,
        axis: FilterAxis,
        selection: &ListSelection,
        filter: &mut CollisionFilter,
    ) -> Option<FilterUpdate> {
        let list = match axis {
            FilterAxis::Category => &mut self.categories,
            FilterAxis::Mask => &mut self.masks,
        };
        list.apply(selection);
        if selection.adjusting {
            return None;
        }
        let bits = bits_of(&list.selected_indices());
        Some(apply_filter_bits(filter, axis, bits))
    }
}
