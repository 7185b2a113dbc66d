//! Ordered aging rules.
//!
//! Rule predicates overlap (the regular rule matches every name), so a table is
//! evaluated top-to-bottom and the first matching rule wins. [`STANDARD_ORDER`]
//! is that order for the shop and is pinned by tests.

use std::borrow::Cow;

use rosekeep_core::{lower_quality, raise_quality};

use crate::item::{AGED_BRIE, BACKSTAGE_PASS_MARKER, CONJURED_MARKER, Item, SULFURAS_MARKER};

/// Pass appreciation keyed by days left after the decrement.
///
/// The first row whose bound is above `sell_in` applies; otherwise
/// [`PASS_BASE_APPRECIATION`]. Expired passes drop to zero before this table
/// is consulted.
const PASS_APPRECIATION: [(i32, u32); 2] = [(5, 3), (10, 2)];

const PASS_BASE_APPRECIATION: u32 = 1;

/// Daily quality loss of a regular item still within its sell-in window.
const REGULAR_DEGRADATION: u32 = 1;

/// Conjured items degrade twice as fast as regular ones.
const CONJURED_DEGRADATION: u32 = 2;

/// Degradation doubles once an item is past its sell-in date.
const EXPIRED_FACTOR: u32 = 2;

/// Item category, one variant per aging rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never sold, never degrades.
    Legendary,
    /// Improves with age.
    Aged,
    /// Appreciates toward the concert, worthless after it.
    BackstagePass,
    /// Degrades twice as fast as regular items.
    Conjured,
    /// Catch-all.
    Regular,
}

/// The shop's rule order, most specific first.
pub const STANDARD_ORDER: [Category; 5] = [
    Category::Legendary,
    Category::Aged,
    Category::BackstagePass,
    Category::Conjured,
    Category::Regular,
];

impl Category {
    /// Whether this rule's predicate accepts `item`.
    pub fn matches(self, item: &Item) -> bool {
        let name = item.name.as_str();
        match self {
            Category::Legendary => name.starts_with(SULFURAS_MARKER),
            Category::Aged => name == AGED_BRIE,
            Category::BackstagePass => name.starts_with(BACKSTAGE_PASS_MARKER),
            Category::Conjured => name.starts_with(CONJURED_MARKER),
            Category::Regular => true,
        }
    }

    /// Apply one day of aging to `item`.
    ///
    /// Every rule except [`Category::Legendary`] decrements `sell_in` first, and
    /// all quality thresholds read the decremented value.
    pub fn age(self, item: &mut Item) {
        match self {
            Category::Legendary => {}
            Category::Aged => {
                next_day(item);
                item.quality = raise_quality(item.quality, 1);
            }
            Category::BackstagePass => {
                next_day(item);
                item.quality = pass_quality(item);
            }
            Category::Conjured => {
                next_day(item);
                item.quality = lower_quality(item.quality, degradation(item, CONJURED_DEGRADATION));
            }
            Category::Regular => {
                next_day(item);
                item.quality = lower_quality(item.quality, degradation(item, REGULAR_DEGRADATION));
            }
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::Aged => "aged",
            Category::BackstagePass => "backstage pass",
            Category::Conjured => "conjured",
            Category::Regular => "regular",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.describe())
    }
}

fn next_day(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

fn pass_quality(item: &Item) -> i32 {
    if item.is_expired() {
        return 0;
    }
    let steps = PASS_APPRECIATION
        .iter()
        .find(|(below, _)| item.sell_in < *below)
        .map_or(PASS_BASE_APPRECIATION, |(_, steps)| *steps);
    raise_quality(item.quality, steps)
}

fn degradation(item: &Item, base: u32) -> u32 {
    if item.is_expired() {
        base * EXPIRED_FACTOR
    } else {
        base
    }
}

/// An immutable, ordered set of aging rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Cow<'static, [Category]>,
}

impl RuleTable {
    /// The shop's table, in [`STANDARD_ORDER`].
    pub const fn standard() -> Self {
        Self {
            rules: Cow::Borrowed(&STANDARD_ORDER),
        }
    }

    /// Build a table with an explicit order.
    ///
    /// Leaving out [`Category::Regular`] makes unmatched items possible.
    pub fn new(rules: impl Into<Vec<Category>>) -> Self {
        Self {
            rules: Cow::Owned(rules.into()),
        }
    }

    pub fn rules(&self) -> &[Category] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule whose predicate accepts `item`, if any.
    pub fn match_item(&self, item: &Item) -> Option<Category> {
        self.rules.iter().copied().find(|rule| rule.matches(item))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}
