// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Site Selection
//!
//! An ordered set of site ids. Insertion order is preserved because it is
//! the order the sites appear in the generated command, and duplicates are
//! impossible by construction.

use crate::models::site::{self, Group};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<&'static str>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| *s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ids.iter().copied()
    }

    /// Symmetric membership flip: add if absent, remove if present.
    pub fn toggle(&mut self, id: &'static str) {
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Replaces the selection with the entire catalog, in catalog order.
    pub fn select_all(&mut self) {
        self.ids = site::ids().collect();
    }

    /// Atomic group flip: if every member of `group` is selected, all of
    /// them are removed; otherwise the missing ones are appended in
    /// catalog order. Applying it twice restores the original selection.
    pub fn toggle_group(&mut self, group: Group) {
        let all_selected = site::in_group(group).all(|s| self.contains(s.id));

        if all_selected {
            self.ids.retain(|id| {
                site::find(id).is_none_or(|s| s.group != group)
            });
        } else {
            for s in site::in_group(group) {
                if !self.contains(s.id) {
                    self.ids.push(s.id);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Sites joined for the `-M` path segment of the command.
    pub fn join(&self, sep: &str) -> String {
        self.ids.join(sep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut sel = Selection::new();
        sel.toggle("Phoenix");
        assert!(sel.contains("Phoenix"));
        sel.toggle("Phoenix");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut sel = Selection::new();
        sel.toggle("Zeus");
        sel.toggle("Phoenix");
        sel.toggle("Tokyo");
        assert_eq!(sel.join(":"), "Zeus:Phoenix:Tokyo");
    }

    #[test]
    fn test_select_all_uses_catalog_order() {
        let mut sel = Selection::new();
        sel.toggle("IDC3IIG");
        sel.select_all();
        assert_eq!(sel.len(), 8);
        assert_eq!(sel.iter().next(), Some("Phoenix"));
    }

    #[test]
    fn test_group_toggle_is_atomic() {
        let mut sel = Selection::new();
        // Partially selected group gets completed, not flipped per member.
        sel.toggle("Tokyo");
        sel.toggle_group(Group::Nix);
        assert!(sel.contains("Tokyo"));
        assert!(sel.contains("Zeus"));

        // Fully selected group gets removed wholesale.
        sel.toggle_group(Group::Nix);
        assert!(sel.is_empty());
    }

    #[test]
    fn test_group_toggle_leaves_other_groups_alone() {
        let mut sel = Selection::new();
        sel.toggle("Phoenix");
        sel.toggle_group(Group::Dc3);
        sel.toggle_group(Group::Dc3);
        assert_eq!(sel.join(":"), "Phoenix");
    }

    #[test]
    fn test_clear() {
        let mut sel = Selection::new();
        sel.select_all();
        sel.clear();
        assert!(sel.is_empty());
    }

    fn arbitrary_selection() -> impl Strategy<Value = Selection> {
        proptest::collection::vec(0usize..8, 0..16).prop_map(|toggles| {
            let mut sel = Selection::new();
            for idx in toggles {
                sel.toggle(crate::models::site::CATALOG[idx].id);
            }
            sel
        })
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(sel in arbitrary_selection(), idx in 0usize..8) {
            let mut mutated = sel.clone();
            let id = crate::models::site::CATALOG[idx].id;
            mutated.toggle(id);
            mutated.toggle(id);
            prop_assert_eq!(mutated, sel);
        }

        #[test]
        fn prop_double_group_toggle_restores_membership(sel in arbitrary_selection(), g in 0usize..3) {
            let group = Group::ALL[g];
            let mut mutated = sel.clone();
            mutated.toggle_group(group);
            mutated.toggle_group(group);
            for site in crate::models::site::CATALOG.iter() {
                prop_assert_eq!(mutated.contains(site.id), sel.contains(site.id));
            }
        }
    }
}
