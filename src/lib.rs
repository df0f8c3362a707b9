//! # FileKV
//!
//! A minimal persistent key-value store with:
//! - One pretty-printed JSON file per record
//! - Records grouped into collections (one directory each)
//! - Per-collection mutual exclusion for concurrent callers
//! - Pluggable logging capability
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RecordStore                            │
//! │           write / read / read_all / delete                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  lock_for(collection)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      LockRegistry                            │
//! │          (one Mutex per collection, created lazily)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!   {data_dir}/
//!     └── {collection}/
//!           ├── {key}.json
//!           └── ...
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logger;

pub mod lock;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::{Config, SyncStrategy};
pub use logger::{Logger, NoopLogger, TracingLogger};
pub use lock::LockRegistry;
pub use store::{RecordStore, RECORD_EXTENSION, TEMP_FILE_NAME};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FileKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
