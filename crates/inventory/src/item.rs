use serde::{Deserialize, Serialize};

/// Prefix shared by legendary items.
pub const SULFURAS_MARKER: &str = "Sulfuras";

/// Exact name of the aged cheese.
pub const AGED_BRIE: &str = "Aged Brie";

/// Prefix shared by concert passes.
pub const BACKSTAGE_PASS_MARKER: &str = "Backstage passes";

/// Prefix shared by conjured items.
pub const CONJURED_MARKER: &str = "Conjured";

/// A shop item aged once per simulated day.
///
/// No validation happens at construction: a regular item may start above the
/// quality band and is clamped by its first tick.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left to sell the item; negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
