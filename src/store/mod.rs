//! Store Module
//!
//! File-backed record storage, one JSON file per record.
//!
//! ## Responsibilities
//! - Map (collection, key) pairs onto files under the data directory
//! - Serialize every operation on a collection through its lock
//! - Replace record files atomically (temp file + rename)
//! - Tolerate corrupt records when scanning a collection
//!
//! ## On-Disk Layout
//! ```text
//! {data_dir}/
//!   ├── users/
//!   │     ├── alice.json        ← pretty-printed record
//!   │     ├── bob.json
//!   │     └── .tmp              ← in-flight write (ignored by scans)
//!   └── orders/
//!         └── 1001.json
//! ```

mod layout;
mod record_store;

pub use layout::{RECORD_EXTENSION, TEMP_FILE_NAME};
pub use record_store::RecordStore;
