//! Preference persistence for alea.
//!
//! A flat record of five fields, each with a stated default, so an empty
//! store is fully usable before anything has ever been written. Reads are
//! a defaulted snapshot; writes are whole-record and last-write-wins.

pub mod error;
pub mod file;
pub mod memory;
pub mod prefs;

pub use error::{StoreError, StoreResult};
pub use file::JsonStore;
pub use memory::MemoryStore;
pub use prefs::{PrefStore, Preferences};
