//! Budget-constrained meal selection
//!
//! Stores are visited in catalog order with one running `remaining` amount.
//! Each store contributes at most one item: the most expensive one that still
//! fits. Results are deterministic for a given catalog and budget.

use crate::catalog::{Catalog, MenuItem, Store};
use crate::engine::budget::Budget;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// One chosen item, copied out of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub store: String,
    pub location: String,
    pub item: String,
    pub price: u32,
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl Selection {
    fn pick(store: &Store, item: &MenuItem) -> Self {
        Self {
            store: store.name.clone(),
            location: store.location.clone(),
            item: item.name.clone(),
            price: item.price,
            image_ref: item.image_ref.clone(),
        }
    }
}

/// Pick at most one item per store within `budget`.
///
/// Fails only with [`crate::FinderError::BudgetTooLow`] when `budget` is
/// under [`Budget::MIN`].
pub fn select(catalog: &Catalog, budget: u32) -> Result<Vec<Selection>> {
    Budget::new(budget).ensure_minimum()?;

    let mut remaining = budget;
    let mut selected = Vec::new();

    for store in catalog.stores() {
        let chosen = store
            .items_by_price()
            .into_iter()
            .filter(|item| item.price <= remaining)
            .last();

        match chosen {
            Some(item) => {
                remaining -= item.price;
                trace!(store = %store.name, item = %item.name, price = item.price, remaining, "Picked item");
                selected.push(Selection::pick(store, item));
            }
            None => trace!(store = %store.name, remaining, "Nothing affordable"),
        }
    }

    if selected.is_empty() {
        if let Some(single) = best_single_item(catalog, budget) {
            debug!(store = %single.store, item = %single.item, "Falling back to single best item");
            selected.push(single);
        }
    }

    debug!(budget, picks = selected.len(), remaining, "Selection complete");
    Ok(selected)
}

/// Most expensive item anywhere in the catalog that fits `budget`.
///
/// Scans stores in order with each menu sorted by price; a later item only
/// wins when strictly more expensive. Free items never qualify.
pub(crate) fn best_single_item(catalog: &Catalog, budget: u32) -> Option<Selection> {
    let mut best: Option<(&Store, &MenuItem)> = None;

    for store in catalog.stores() {
        for item in store.items_by_price() {
            let best_price = best.map_or(0, |(_, b)| b.price);
            if item.price <= budget && item.price > best_price {
                best = Some((store, item));
            }
        }
    }

    best.map(|(store, item)| Selection::pick(store, item))
}

/// Aggregate of a selection set against the budget it was drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: u32,
    pub remaining: u32,
}

impl Summary {
    pub fn of(budget: u32, selections: &[Selection]) -> Self {
        let total = selections.iter().map(|s| s.price).sum();
        Self {
            total,
            remaining: budget.saturating_sub(total),
        }
    }

    /// `Total: R120 (R80 remaining)`; the remaining part is omitted at zero
    pub fn describe(&self, currency: &str) -> String {
        if self.remaining > 0 {
            format!(
                "Total: {currency}{} ({currency}{} remaining)",
                self.total, self.remaining
            )
        } else {
            format!("Total: {currency}{}", self.total)
        }
    }
}
