//! Service layer for the budget tracker
//!
//! The service layer owns the in-memory state on top of the storage layer,
//! handling validation and the persist-on-every-mutation policy.

pub mod category;
pub mod ledger;

pub use category::CategoryRegistry;
pub use ledger::Ledger;
