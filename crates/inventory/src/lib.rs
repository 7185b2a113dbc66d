//! Inventory aging domain module.
//!
//! This crate contains the nightly aging rules for shop inventory, implemented
//! purely as deterministic domain logic (no IO, no storage). Callers own the
//! item collection and advance it one simulated day at a time.

pub mod engine;
pub mod item;
pub mod rules;

pub use engine::{AgingEngine, Inventory, advance_one_day};
pub use item::{AGED_BRIE, BACKSTAGE_PASS_MARKER, CONJURED_MARKER, Item, SULFURAS_MARKER};
pub use rules::{Category, RuleTable, STANDARD_ORDER};
