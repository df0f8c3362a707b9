//! Lock Module
//!
//! Per-collection mutual exclusion.
//!
//! ## Responsibilities
//! - Hand out exactly one lock per collection name
//! - Create locks lazily, keep them for the lifetime of the store
//! - Keep the registry-wide lock off the I/O path
//!
//! ## Locking Order
//! ```text
//!   registry map lock  (held only for lookup/insert)
//!         │ released
//!         ▼
//!   collection lock    (held for the whole store operation)
//! ```

mod registry;

pub use registry::{CollectionLock, LockRegistry};
