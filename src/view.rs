//! Items of a permit grouped by category, in a user-controlled display order.

use indexmap::IndexMap;
use itertools::Itertools;
use permit_types::{CategoryName, Item};
use std::collections::HashSet;

/// Groups a permit's items by category.
///
/// Categories keep the order they first appear in until reordered. Reordering
/// only changes the order categories are shown and exported in; the items of
/// each category are never touched. Visibility is a presentation flag for
/// interactive front ends and does not affect exports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryView {
    groups: IndexMap<CategoryName, Vec<Item>>,
    visible: HashSet<CategoryName>,
}

impl CategoryView {
    pub fn group<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut groups: IndexMap<CategoryName, Vec<Item>> = IndexMap::new();
        for item in items {
            groups
                .entry(item.category.clone())
                .or_default()
                .push(item.clone());
        }
        Self {
            groups,
            visible: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Category names in display order.
    pub fn category_names(&self) -> impl Iterator<Item = &CategoryName> {
        self.groups.keys()
    }

    pub fn items(&self, category: &str) -> Option<&[Item]> {
        self.groups
            .get(&CategoryName::from(category))
            .map(Vec::as_slice)
    }

    /// Categories with their items, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryName, &[Item])> {
        self.groups.iter().map(|(name, items)| (name, items.as_slice()))
    }

    /// Moves the category at `from` to position `to`, shifting the ones in
    /// between. Indices past the end are clamped to the last category.
    pub fn reorder(&mut self, from: usize, to: usize) {
        let Some(last) = self.groups.len().checked_sub(1) else {
            return;
        };
        let (from, to) = (from.min(last), to.min(last));
        if from != to {
            self.groups.move_index(from, to);
        }
    }

    /// Puts the named categories first, in the given order. Other categories
    /// follow in their current order; unknown names are ignored.
    pub fn order_by<S: AsRef<str>>(&mut self, names: &[S]) {
        let mut position = 0;
        for name in names.iter().map(<S as AsRef<str>>::as_ref).unique() {
            match self.groups.get_index_of(&CategoryName::from(name)) {
                Some(index) => {
                    self.groups.move_index(index, position);
                    position += 1;
                }
                None => log::warn!("Ignoring unknown category '{}' in requested order", name),
            }
        }
    }

    /// Flips the visibility of `category` and returns the new state.
    pub fn toggle_visibility(&mut self, category: &str) -> bool {
        let name = CategoryName::from(category);
        if self.visible.remove(&name) {
            false
        } else {
            self.visible.insert(name);
            true
        }
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.visible.contains(&CategoryName::from(category))
    }

    /// Every item, category by category in display order.
    pub fn flatten(&self) -> impl Iterator<Item = &Item> {
        self.groups.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("EPI", "Capacete", Some("Sim")),
            Item::new("Riscos", "Queda", Some("Alto")),
            Item::new("EPI", "Luvas", None),
            Item::new("Assinatura", "Executante", None),
            Item::new("Riscos", "Choque", Some("Baixo")),
        ]
    }

    fn names(view: &CategoryView) -> Vec<&str> {
        view.category_names().map(CategoryName::as_str).collect()
    }

    fn sorted_labels<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<&'a str> {
        items.map(|i| i.label.as_str()).sorted().collect()
    }

    #[test]
    fn groups_in_first_appearance_order() {
        let items = items();
        let view = CategoryView::group(&items);
        assert_eq!(names(&view), vec!["EPI", "Riscos", "Assinatura"]);
        let epi: Vec<&str> = view.items("EPI").unwrap().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(epi, vec!["Capacete", "Luvas"]);
        assert!(view.items("Outro").is_none());
    }

    #[test]
    fn reorder_moves_like_an_array_element() {
        let items = items();
        let mut view = CategoryView::group(&items);
        view.reorder(0, 2);
        assert_eq!(names(&view), vec!["Riscos", "Assinatura", "EPI"]);
        view.reorder(2, 0);
        assert_eq!(names(&view), vec!["EPI", "Riscos", "Assinatura"]);
    }

    #[test]
    fn reorder_clamps_out_of_range_indices() {
        let items = items();
        let mut view = CategoryView::group(&items);
        view.reorder(10, 0);
        assert_eq!(names(&view), vec!["Assinatura", "EPI", "Riscos"]);
        view.reorder(0, 99);
        assert_eq!(names(&view), vec!["EPI", "Riscos", "Assinatura"]);

        let mut empty = CategoryView::default();
        empty.reorder(0, 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn reorder_keeps_each_category_intact() {
        let items = items();
        let original = CategoryView::group(&items);
        let mut view = original.clone();
        for (from, to) in [(0, 1), (2, 0), (1, 2), (0, 0)] {
            view.reorder(from, to);
            for (name, group) in original.iter() {
                assert_eq!(view.items(name.as_str()), Some(group));
            }
        }
    }

    #[test]
    fn flatten_returns_every_item_regardless_of_order() {
        let items = items();
        let mut view = CategoryView::group(&items);
        view.reorder(2, 0);
        view.reorder(1, 2);
        assert_eq!(view.flatten().count(), items.len());
        assert_eq!(sorted_labels(view.flatten()), sorted_labels(items.iter()));
    }

    #[test]
    fn order_by_puts_named_categories_first() {
        let items = items();
        let mut view = CategoryView::group(&items);
        view.order_by(&["Assinatura", "Desconhecida", "Riscos", "Assinatura"]);
        assert_eq!(names(&view), vec!["Assinatura", "Riscos", "EPI"]);
    }

    #[test]
    fn toggling_visibility() {
        let items = items();
        let mut view = CategoryView::group(&items);
        assert!(!view.is_visible("EPI"));
        assert!(view.toggle_visibility("EPI"));
        assert!(view.is_visible("EPI"));
        assert!(!view.toggle_visibility("EPI"));
        assert!(!view.is_visible("EPI"));
    }
}
