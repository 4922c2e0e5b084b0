//! # RowDict
//!
//! A string-keyed dictionary over a fixed array of growable rows.
//!
//! Every key hashes to one row, chosen once and never changed: the row array
//! is allocated at creation and is never resized or rehashed. Each row is a
//! short ordered chain that doubles its capacity when it fills. Lookups scan
//! one row, so load behavior is easy to predict and to inspect.
//!
//! ## Features
//!
//! - **Predictable placement**: the same key always maps to the same row
//! - **Owned keys**: keys are copied in, so callers can reuse their strings
//! - **Borrowed values**: values are `Copy` handles the dictionary never frees
//! - **Fallible allocation**: allocation failure is an error, not an abort
//! - **Configurable**: row count, per-row capacity and hash function
//! - **Diagnostics**: per-row load snapshot and a text dump
//!
//! ## Example
//!
//! ```rust
//! use rowdict::Dictionary;
//!
//! let (one, two) = (1, 2);
//! let mut dict = Dictionary::create(0)?; // 1024 rows
//!
//! dict.put("key1", &one)?;
//! dict.put("key2", &two)?;
//!
//! if let Some(value) = dict.get("key1") {
//!     println!("Found: {}", value);
//! }
//!
//! assert!(dict.delete("key1"));
//! assert!(dict.get("key1").is_none());
//!
//! println!("{}", dict.dump(0));
//! dict.destroy();
//! # Ok::<(), rowdict::Error>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use rowdict::{DictionaryBuilder, HashFunction};
//!
//! let dict = DictionaryBuilder::new()
//!     .row_count(64)
//!     .initial_row_capacity(4)?
//!     .hash_function(HashFunction::Prime)
//!     .build::<&str>()?;
//! assert_eq!(dict.row_count(), 64);
//! # Ok::<(), rowdict::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Configuration and builder types.
pub mod config;
/// Diagnostics snapshot and text dump.
pub mod diagnostics;
/// Main Dictionary implementation.
pub mod dictionary;
/// Stored key/value pairs.
pub mod entry;
/// Error types.
pub mod error;
/// Hash function implementations.
pub mod hash;
/// Rows (buckets) and their growth policy.
pub mod row;

// Re-export main types
pub use config::{
    Config, DictionaryBuilder, HashFunction, DEFAULT_ROW_CAPACITY, DEFAULT_ROW_COUNT,
};
pub use diagnostics::{dump, Diagnostics, RowDiagnostics};
pub use dictionary::Dictionary;
pub use entry::Entry;
pub use error::Error;
pub use row::{next_capacity, Row};
