//! Slot polling against a HyperBEAM node.
//!
//! Each tracked process exposes two read-only endpoints: the node's latest
//! known slot for the process (target) and the slot the process has computed
//! up to (current). [`fetch_slots`] polls both concurrently and folds the two
//! independent outcomes into a [`SlotReport`].

pub mod endpoints;
pub mod errors;
pub mod fetcher;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use endpoints::SlotEndpoints;
pub use errors::FetchError;
pub use fetcher::{SlotReport, extract_slot, fetch_slots};
pub use source::{HttpSlotSource, SlotSource};
