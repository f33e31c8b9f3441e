//! Service layer
//!
//! Business logic on top of the storage layer: draft validation, id
//! issuing, clamped contributions and persistence of every mutation.

pub mod goal;
pub mod ledger;
pub mod sample;

pub use goal::GoalService;
pub use ledger::LedgerService;
pub use sample::{seed_sample_data, SeedSummary};
