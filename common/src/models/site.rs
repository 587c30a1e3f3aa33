// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Site Catalog
//!
//! The fixed inventory of collection points whose flow archives can be
//! queried. Every site maps to a path segment under the archive root and
//! belongs to exactly one collector group.
//!
//! The catalog is compiled in on purpose: adding or removing a site is a
//! code change, not configuration. Ordering matters: "select all" and
//! group operations walk the catalog in declaration order, which is the
//! order operators are used to seeing.

use serde::Serialize;

/// Collector group a site reports into. Used for bulk selection only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Group {
    #[serde(rename = "IIG")]
    Iig,
    #[serde(rename = "NIX")]
    Nix,
    #[serde(rename = "DC3")]
    Dc3,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Iig, Group::Nix, Group::Dc3];

    pub fn label(&self) -> &'static str {
        match self {
            Group::Iig => "IIG",
            Group::Nix => "NIX",
            Group::Dc3 => "DC3",
        }
    }
}

/// A named collection point. `id` is the path segment used in the
/// generated command; `name` is what the UI shows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Site {
    pub id: &'static str,
    pub name: &'static str,
    pub group: Group,
}

/// The full site inventory, in display order.
pub const CATALOG: [Site; 8] = [
    Site { id: "Phoenix", name: "Phoenix", group: Group::Iig },
    Site { id: "Tokyo", name: "Tokyo", group: Group::Nix },
    Site { id: "Zeus", name: "Zeus", group: Group::Nix },
    Site { id: "Archer", name: "Archer", group: Group::Iig },
    Site { id: "IDC32NIX", name: "IDC32NIX", group: Group::Dc3 },
    Site { id: "IDC32IIG", name: "IDC32IIG", group: Group::Dc3 },
    Site { id: "IDC3NIX", name: "IDC3NIX", group: Group::Dc3 },
    Site { id: "IDC3IIG", name: "IDC3IIG", group: Group::Dc3 },
];

/// All catalog ids in declaration order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|site| site.id)
}

/// Sites belonging to a single collector group, in catalog order.
pub fn in_group(group: Group) -> impl Iterator<Item = &'static Site> {
    CATALOG.iter().filter(move |site| site.group == group)
}

/// Case-insensitive lookup by id.
pub fn find(id: &str) -> Option<&'static Site> {
    CATALOG.iter().find(|site| site.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_unique_sites() {
        assert_eq!(CATALOG.len(), 8);
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_groups_partition_the_catalog() {
        let counted: usize = Group::ALL.iter().map(|g| in_group(*g).count()).sum();
        assert_eq!(counted, CATALOG.len());
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("phoenix").map(|s| s.id), Some("Phoenix"));
        assert_eq!(find("IDC3NIX").map(|s| s.id), Some("IDC3NIX"));
        assert!(find("Atlantis").is_none());
    }
}
