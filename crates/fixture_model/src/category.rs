//! Named collision categories shown in the filter lists.

/// Number of entries in [`CATEGORIES`] ("All" plus 31 numbered categories).
pub const CATEGORY_COUNT: usize = 32;

/// Wildcard bits: matches every category. All 32 bits are set, one more than
/// a signed 32-bit maximum (`0x7FFF_FFFF`) would cover; the extra top bit has
/// no numbered category, so list selections are unaffected.
pub const ALL_CATEGORIES: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: u32,
    pub label: &'static str,
}

const fn option(index: usize, label: &'static str) -> CategoryOption {
    let value = if index == 0 { ALL_CATEGORIES } else { 1u32 << (index - 1) };
    CategoryOption { value, label }
}

pub static CATEGORIES: [CategoryOption; CATEGORY_COUNT] = [
    option(0, "All"),
    option(1, "Category 1"),
    option(2, "Category 2"),
    option(3, "Category 3"),
    option(4, "Category 4"),
    option(5, "Category 5"),
    option(6, "Category 6"),
    option(7, "Category 7"),
    option(8, "Category 8"),
    option(9, "Category 9"),
    option(10, "Category 10"),
    option(11, "Category 11"),
    option(12, "Category 12"),
    option(13, "Category 13"),
    option(14, "Category 14"),
    option(15, "Category 15"),
    option(16, "Category 16"),
    option(17, "Category 17"),
    option(18, "Category 18"),
    option(19, "Category 19"),
    option(20, "Category 20"),
    option(21, "Category 21"),
    option(22, "Category 22"),
    option(23, "Category 23"),
    option(24, "Category 24"),
    option(25, "Category 25"),
    option(26, "Category 26"),
    option(27, "Category 27"),
    option(28, "Category 28"),
    option(29, "Category 29"),
    option(30, "Category 30"),
    option(31, "Category 31"),
];

/// OR of the values of the selected list indices. Indices past the table are ignored.
pub fn bits_of(indices: &[usize]) -> u32 {
    indices
        .iter()
        .filter_map(|&i| CATEGORIES.get(i))
        .fold(0, |acc, c| acc | c.value)
}

/// List indices (1..=31, ascending) whose bit is fully set in `value`.
/// Index 0 is never reported; a wildcard value selects every numbered category.
pub fn indices_of(value: u32) -> Vec<usize> {
    CATEGORIES
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, c)| value & c.value == c.value)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        assert_eq!(CATEGORIES[0].label, "All");
        assert_eq!(CATEGORIES[0].value, ALL_CATEGORIES);
        for (i, c) in CATEGORIES.iter().enumerate().skip(1) {
            assert_eq!(c.label, format!("Category {i}"));
            assert_eq!(c.value, 1 << (i - 1));
        }
    }

    #[test]
    fn numbered_categories_are_distinct_single_bits() {
        let mut seen = 0u32;
        for c in &CATEGORIES[1..] {
            assert_eq!(c.value.count_ones(), 1);
            assert_eq!(seen & c.value, 0);
            seen |= c.value;
        }
        assert_eq!(seen, 0x7FFF_FFFF);
    }

    #[test]
    fn empty_selection_is_zero() {
        assert_eq!(bits_of(&[]), 0);
        assert!(indices_of(0).is_empty());
    }

    #[test]
    fn out_of_range_indices_ignored() {
        assert_eq!(bits_of(&[1, 99]), 1);
    }
}
