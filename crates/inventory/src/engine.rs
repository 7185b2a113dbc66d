//! Nightly update engine.
//!
//! The engine is strict: an item that no rule matches fails the whole tick
//! with [`AgingError::UnmatchedItem`]. Items are resolved against the table
//! before any of them is touched, so a failed tick leaves the collection as it
//! was.

use rosekeep_core::{AgingError, AgingResult};

use crate::item::Item;
use crate::rules::{Category, RuleTable};

/// Applies one simulated day of aging to a collection of items.
///
/// Holds nothing but its rule table, so one engine can age any number of
/// disjoint collections, including from different threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgingEngine {
    table: RuleTable,
}

impl AgingEngine {
    pub const fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// Engine over the shop's standard rule table.
    pub const fn standard() -> Self {
        Self::new(RuleTable::standard())
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Age every item by one day, in collection order.
    pub fn advance_one_day(&self, items: &mut [Item]) -> AgingResult<()> {
        let span = tracing::debug_span!("advance_one_day", items = items.len());
        let _enter = span.enter();

        let categories = self.resolve(items)?;

        for (item, category) in items.iter_mut().zip(categories) {
            let (sell_in, quality) = (item.sell_in, item.quality);
            category.age(item);
            tracing::trace!(
                name = %item.name,
                category = %category,
                sell_in_before = sell_in,
                quality_before = quality,
                sell_in = item.sell_in,
                quality = item.quality,
                "item aged"
            );
        }

        Ok(())
    }

    fn resolve(&self, items: &[Item]) -> AgingResult<Vec<Category>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.table.match_item(item).ok_or_else(|| {
                    tracing::warn!(name = %item.name, index, "no aging rule matches item");
                    AgingError::unmatched(item.name.clone(), index)
                })
            })
            .collect()
    }
}

/// Age `items` by one day with the standard rule table.
pub fn advance_one_day(items: &mut [Item]) -> AgingResult<()> {
    AgingEngine::standard().advance_one_day(items)
}

/// A shop's stock: the caller-side owner of an item collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    engine: AgingEngine,
    days_elapsed: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_engine(items, AgingEngine::standard())
    }

    pub fn with_engine(items: Vec<Item>, engine: AgingEngine) -> Self {
        Self {
            items,
            engine,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of days successfully applied so far.
    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    /// Advance one day and return the updated items.
    pub fn update_quality(&mut self) -> AgingResult<&[Item]> {
        self.engine.advance_one_day(&mut self.items)?;
        self.days_elapsed += 1;
        Ok(&self.items)
    }

    /// Advance `days` days, stopping at the first failed day.
    ///
    /// On error the items reflect every day completed before the failure.
    pub fn advance_days(&mut self, days: u32) -> AgingResult<()> {
        for _ in 0..days {
            self.update_quality()?;
        }
        Ok(())
    }
}
