//! Toolkit-independent widget state: what a list, slider or text field
//! currently shows.

use std::collections::BTreeSet;

use crate::command::ListSelection;

/// Multi-select list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionList {
    len: usize,
    selected: BTreeSet<usize>,
    anchor: Option<usize>,
}

/// Modifier keys held during a list click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Ctrl / Cmd: toggle one row.
    pub toggle: bool,
    /// Shift: extend from the anchor row.
    pub range: bool,
}

impl SelectionList {
    pub fn new(len: usize) -> Self {
        Self { len, selected: BTreeSet::new(), anchor: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.set_selected_indices(&[index]);
    }

    /// Replaces the selection; indices outside the list are dropped.
    pub fn set_selected_indices(&mut self, indices: &[usize]) {
        self.selected = indices.iter().copied().filter(|&i| i < self.len).collect();
        self.anchor = indices.last().copied().filter(|&i| i < self.len);
    }

    /// Applies a selection event, moving the anchor to the row it was made from.
    pub fn apply(&mut self, selection: &ListSelection) {
        self.set_selected_indices(&selection.indices);
        if let Some(row) = selection.anchor.filter(|&i| i < self.len) {
            self.anchor = Some(row);
        }
    }

    /// Settled selection event for a click on `index`. Shift-clicks keep the
    /// current anchor; every other click re-anchors on the clicked row.
    pub fn click(&self, index: usize, mods: ClickModifiers) -> ListSelection {
        let anchor = if mods.range { self.anchor.or(Some(index)) } else { Some(index) };
        ListSelection {
            anchor: anchor.filter(|&i| i < self.len),
            ..ListSelection::settled(self.clicked(index, mods))
        }
    }

    /// Selection that results from clicking `index` with `mods`, without applying it.
    pub fn clicked(&self, index: usize, mods: ClickModifiers) -> Vec<usize> {
        if index >= self.len {
            return self.selected_indices();
        }
        if mods.range {
            let anchor = self.anchor.unwrap_or(index);
            let (lo, hi) = if anchor <= index { (anchor, index) } else { (index, anchor) };
            let mut out: BTreeSet<usize> = if mods.toggle { self.selected.clone() } else { BTreeSet::new() };
            out.extend(lo..=hi);
            return out.into_iter().collect();
        }
        if mods.toggle {
            let mut out = self.selected.clone();
            if !out.remove(&index) {
                out.insert(index);
            }
            return out.into_iter().collect();
        }
        vec![index]
    }
}

/// Integer slider whose value is shown and stored scaled (e.g. 0..100 -> 0.00..1.00).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSlider {
    min: i32,
    max: i32,
    value: i32,
    scale: f32,
}

impl ScaledSlider {
    pub fn new(min: i32, max: i32, value: i32, scale: f32) -> Self {
        Self { min, max, value: value.clamp(min, max), scale }
    }

    /// 0..=100 slider in steps of 0.01, positioned at `scaled` (truncated like the field display).
    pub fn percent(scaled: f32) -> Self {
        let pos = if scaled.is_finite() { (scaled * 100.0) as i32 } else { 0 };
        Self::new(0, 100, pos, 0.01)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> std::ops::RangeInclusive<i32> {
        self.min..=self.max
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn scaled_value(&self) -> f32 {
        self.value as f32 * self.scale
    }
}

/// Labelled single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub text: String,
}

impl TextField {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self { label, text: text.into() }
    }
}

/// Trimmed, finite `f32`; anything else is `None`.
pub fn parse_number(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Two-decimal display used by the numeric fields.
pub fn format_number(value: f32) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_click_selects_one() {
        let mut list = SelectionList::new(32);
        list.set_selected_indices(&[1, 2, 3]);
        assert_eq!(list.clicked(5, ClickModifiers::default()), vec![5]);
    }

    #[test]
    fn toggle_click_adds_and_removes() {
        let mut list = SelectionList::new(32);
        list.set_selected_indices(&[1, 4]);
        let toggle = ClickModifiers { toggle: true, range: false };
        assert_eq!(list.clicked(2, toggle), vec![1, 2, 4]);
        assert_eq!(list.clicked(4, toggle), vec![1]);
    }

    #[test]
    fn range_click_spans_from_anchor() {
        let mut list = SelectionList::new(32);
        list.set_selected_index(6);
        let range = ClickModifiers { toggle: false, range: true };
        assert_eq!(list.clicked(3, range), vec![3, 4, 5, 6]);
    }

    #[test]
    fn toggle_click_moves_anchor_to_clicked_row() {
        let mut list = SelectionList::new(32);
        list.set_selected_index(5);
        let toggle = ClickModifiers { toggle: true, range: false };
        let event = list.click(1, toggle);
        assert_eq!(event.indices, vec![1, 5]);
        list.apply(&event);

        let range = ClickModifiers { toggle: false, range: true };
        assert_eq!(list.click(3, range).indices, vec![1, 2, 3]);
    }

    #[test]
    fn range_click_keeps_anchor() {
        let mut list = SelectionList::new(32);
        list.apply(&list.click(2, ClickModifiers::default()));
        let range = ClickModifiers { toggle: false, range: true };
        list.apply(&list.click(6, range));
        assert_eq!(list.selected_indices(), vec![2, 3, 4, 5, 6]);
        assert_eq!(list.click(4, range).indices, vec![2, 3, 4]);
    }

    #[test]
    fn out_of_range_dropped() {
        let mut list = SelectionList::new(4);
        list.set_selected_indices(&[1, 9]);
        assert_eq!(list.selected_indices(), vec![1]);
        assert_eq!(list.clicked(10, ClickModifiers::default()), vec![1]);
    }

    #[test]
    fn percent_slider_scaling() {
        let mut s = ScaledSlider::percent(0.25);
        assert_eq!(s.value(), 25);
        s.set_value(250);
        assert_eq!(s.value(), 100);
        assert!((s.scaled_value() - 1.0).abs() < 1e-6);
        assert_eq!(ScaledSlider::percent(-1.0).value(), 0);
    }

    #[test]
    fn number_parsing() {
        assert_eq!(parse_number(" 2.5 "), Some(2.5));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(format_number(0.01), "0.01");
    }
}
