//! Gap analysis: which ideal pages already exist on the site

use crate::crawler::PageRecord;
use crate::ideal::{IdealPage, PageType};
use crate::inventory::Inventory;
use crate::url::to_path;
use std::collections::HashSet;

/// An ideal page and whether the site already has it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapRow {
    pub page: IdealPage,
    pub exists: bool,
}

/// Marks each ideal page as existing or missing
///
/// A page exists when its path equals the canonical path of any discovered
/// page.
pub fn match_existing(ideal: &[IdealPage], pages: &[PageRecord]) -> Vec<GapRow> {
    let existing: HashSet<String> = pages.iter().map(|page| to_path(&page.url)).collect();
    match_paths(ideal, &existing)
}

/// Same as [`match_existing`] against an already computed path set
pub fn match_paths(ideal: &[IdealPage], existing: &HashSet<String>) -> Vec<GapRow> {
    ideal
        .iter()
        .map(|page| GapRow {
            exists: existing.contains(&page.path),
            page: page.clone(),
        })
        .collect()
}

/// Gap analysis result for one site
#[derive(Debug, Clone)]
pub struct GapReport {
    pub rows: Vec<GapRow>,
}

impl GapReport {
    pub fn new(ideal: &[IdealPage], pages: &[PageRecord]) -> Self {
        Self {
            rows: match_existing(ideal, pages),
        }
    }

    /// Matches against the canonical path set of an inventory
    pub fn for_inventory(ideal: &[IdealPage], inventory: &Inventory) -> Self {
        Self {
            rows: match_paths(ideal, &inventory.paths()),
        }
    }

    /// Missing pages, highest priority first, then by path
    pub fn missing(&self) -> Vec<&IdealPage> {
        self.sorted(false)
    }

    /// Pages already present, highest priority first, then by path
    pub fn present(&self) -> Vec<&IdealPage> {
        self.sorted(true)
    }

    /// `(missing, total)` service-city landing pages
    pub fn service_city_counts(&self) -> (usize, usize) {
        let combos = self
            .rows
            .iter()
            .filter(|row| row.page.page_type == PageType::ServiceCity);
        let (missing, total) = combos.fold((0, 0), |(missing, total), row| {
            (missing + usize::from(!row.exists), total + 1)
        });
        (missing, total)
    }

    fn sorted(&self, exists: bool) -> Vec<&IdealPage> {
        let mut pages: Vec<&IdealPage> = self
            .rows
            .iter()
            .filter(|row| row.exists == exists)
            .map(|row| &row.page)
            .collect();
        pages.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.path.cmp(&b.path)));
        pages
    }
}
