//! Catalog store: the two per-category standard lists.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::model::{CatalogFile, Category, Standard};

/// Read-only store of the two standard catalogs. Built once at load time;
/// original file order is preserved per category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStore {
    nfpc: Vec<Standard>,
    nftc: Vec<Standard>,
}

impl CatalogStore {
    /// Build the store from the two catalog source files.
    #[must_use]
    pub fn new(nfpc: CatalogFile, nftc: CatalogFile) -> Self {
        Self { nfpc: nfpc.items, nftc: nftc.items }
    }

    /// All standards of one category, in original catalog order.
    #[must_use]
    pub fn standards(&self, category: Category) -> &[Standard] {
        match category {
            Category::Nfpc => &self.nfpc,
            Category::Nftc => &self.nftc,
        }
    }

    /// Look up a standard by (category, code).
    #[must_use]
    pub fn find(&self, category: Category, code: &str) -> Option<&Standard> {
        self.standards(category).iter().find(|s| s.code == code)
    }

    /// Total number of standards across both categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nfpc.len() + self.nftc.len()
    }

    /// Returns `true` if both catalogs are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nfpc.is_empty() && self.nftc.is_empty()
    }
}
