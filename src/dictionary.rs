use crate::config::{create_hasher, Config};
use crate::diagnostics::{Diagnostics, RowDiagnostics};
use crate::entry::Entry;
use crate::error::Error;
use crate::hash::RowHasher;
use crate::row::Row;

/// String-keyed dictionary over a fixed array of growable rows.
///
/// The row count is chosen at creation and never changes: a key always lands
/// in the same row, and rows grow (by doubling) instead of the table
/// rehashing. Size the row count for the load you expect.
///
/// Keys are copied in; values are `Copy` handles (references, ids) that the
/// dictionary stores but never dereferences or releases.
///
/// # Example
///
/// ```rust
/// use rowdict::Dictionary;
///
/// let one = 1;
/// let two = 2;
/// let mut dict = Dictionary::create(4)?;
/// dict.put("a", &one)?;
/// dict.put("b", &two)?;
///
/// assert!(dict.delete("a"));
/// assert!(dict.get("a").is_none());
/// assert_eq!(dict.get("b"), Some(&2));
/// dict.destroy();
/// # Ok::<(), rowdict::Error>(())
/// ```
#[derive(Debug)]
pub struct Dictionary<V> {
    rows: Vec<Row<V>>,
    hash: RowHasher,
}

impl<V: Copy> Dictionary<V> {
    /// Create a dictionary with `row_count` rows and default settings.
    /// A `row_count` of 0 selects the default (1024).
    pub fn create(row_count: usize) -> Result<Self, Error> {
        Self::with_config(row_count, Config::default())
    }

    /// Create a dictionary with custom config. A `row_count` of 0 selects
    /// `config`'s default row count.
    ///
    /// Every row is allocated up front. If any allocation fails, everything
    /// allocated so far is released and [`Error::AllocationFailure`] is
    /// returned.
    pub fn with_config(row_count: usize, config: Config) -> Result<Self, Error> {
        let row_count = config.resolve_row_count(row_count);

        let mut rows = Vec::new();
        if let Err(e) = rows.try_reserve_exact(row_count) {
            log::warn!("failed to allocate {} rows: {}", row_count, e);
            return Err(Error::AllocationFailure);
        }
        for _ in 0..row_count {
            let row = Row::with_capacity(config.initial_row_capacity).map_err(|e| {
                log::warn!("failed to allocate row {} of {}", rows.len(), row_count);
                e
            })?;
            rows.push(row);
        }

        log::debug!(
            "created dictionary with {} rows of capacity {}",
            row_count,
            config.initial_row_capacity
        );
        Ok(Self {
            rows,
            hash: create_hasher(config.hash_function),
        })
    }

    /// Figure out which row this key belongs to.
    #[inline]
    pub fn row_index(&self, key: &str) -> usize {
        self.hash.row_index(key, self.rows.len())
    }

    /// Get the value stored for `key`, or `None` if the key is absent.
    ///
    /// A stored "empty" value is still found: with `V = Option<&T>`, a key
    /// put with `None` comes back as `Some(None)`.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_entry(key).map(Entry::value)
    }

    /// Get the stored entry (the dictionary's key copy and the value) for `key`.
    pub fn get_entry(&self, key: &str) -> Option<&Entry<V>> {
        self.rows[self.row_index(key)].get(key)
    }

    /// Check if a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_entry(key).is_some()
    }

    /// Store `value` under `key`, replacing the value if the key is present.
    ///
    /// A new key is copied into the dictionary. If the key's row is full its
    /// capacity doubles first; if that allocation (or the key copy) fails,
    /// [`Error::AllocationFailure`] is returned and the dictionary is unchanged.
    pub fn put(&mut self, key: &str, value: V) -> Result<(), Error> {
        let idx = self.row_index(key);
        log::trace!("put key={:?} row={}", key, idx);

        match self.rows[idx].put(key, value) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::warn!("put key={:?} row={} failed: {}", key, idx, e);
                Err(e)
            }
        }
    }

    /// Remove `key`. Returns `true` if it was present.
    ///
    /// Later entries in the same row move down one position; every other row
    /// is untouched.
    pub fn delete(&mut self, key: &str) -> bool {
        let idx = self.row_index(key);
        let found = self.rows[idx].delete(key);
        log::trace!("delete key={:?} row={} found={}", key, idx, found);
        found
    }

    /// Release the dictionary: every key copy, then every row's storage, then
    /// the row array. Stored values are left alone.
    pub fn destroy(self) {
        log::debug!(
            "destroying dictionary with {} rows and {} entries",
            self.rows.len(),
            self.len()
        );
        drop(self);
    }

    /// Number of rows. Fixed for the life of the dictionary.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<&Row<V>> {
        self.rows.get(index)
    }

    /// Get the total number of entries across all rows.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Structured snapshot of the row layout and load.
    pub fn diagnostics(&self) -> Diagnostics {
        let rows: Vec<RowDiagnostics> = self
            .rows
            .iter()
            .map(|row| RowDiagnostics {
                len: row.len(),
                capacity: row.capacity(),
                keys: row.keys().map(str::to_owned).collect(),
            })
            .collect();
        Diagnostics::from_rows(rows)
    }

    /// Human-readable dump, see [`crate::diagnostics::dump`].
    pub fn dump(&self, level: u32) -> String {
        crate::diagnostics::dump(Some(self), level)
    }
}
