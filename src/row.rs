use crate::entry::Entry;
use crate::error::Error;

/// Growth policy for a full row: capacity strictly doubles.
///
/// Returns `None` when doubling would overflow `usize`.
///
/// # Example
///
/// ```rust
/// use rowdict::row::next_capacity;
///
/// assert_eq!(next_capacity(8), Some(16));
/// assert_eq!(next_capacity(usize::MAX), None);
/// ```
#[inline]
pub const fn next_capacity(current: usize) -> Option<usize> {
    current.checked_mul(2)
}

/// A single row (bucket): the ordered chain of entries whose keys hash here.
///
/// `len() <= capacity()` always holds. Entries keep insertion order, and a
/// delete shifts every later entry down by one position.
#[derive(Debug)]
pub struct Row<V> {
    entries: Vec<Entry<V>>,
    capacity: usize,
}

impl<V: Copy> Row<V> {
    /// Create an empty row with storage for `capacity` entries already reserved.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        Ok(Self { entries, capacity })
    }

    /// Position of the first entry holding `key`.
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.matches(key))
    }

    /// Get the entry stored for `key`.
    pub fn get(&self, key: &str) -> Option<&Entry<V>> {
        self.position(key).map(|i| &self.entries[i])
    }

    /// Insert or overwrite. Returns `Ok(true)` if a new entry was appended and
    /// `Ok(false)` if an existing value was replaced in place.
    ///
    /// On error the row is left exactly as it was.
    pub(crate) fn put(&mut self, key: &str, value: V) -> Result<bool, Error> {
        if let Some(i) = self.position(key) {
            self.entries[i].set_value(value);
            return Ok(false);
        }

        let entry = Entry::new(key, value)?;
        if self.entries.len() == self.capacity {
            self.grow()?;
        }
        self.entries.push(entry);
        Ok(true)
    }

    fn grow(&mut self) -> Result<(), Error> {
        let new_capacity = next_capacity(self.capacity).ok_or(Error::AllocationFailure)?;
        self.entries
            .try_reserve_exact(new_capacity - self.entries.len())?;
        log::debug!("row grown from {} to {} entries", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Remove the entry for `key`, shifting later entries left by one.
    ///
    /// If the row somehow held the key more than once, only the last
    /// occurrence is removed.
    pub(crate) fn delete(&mut self, key: &str) -> bool {
        // last match wins
        match self.entries.iter().rposition(|entry| entry.matches(key)) {
            Some(loc) => {
                self.entries.remove(loc);
                true
            }
            None => false,
        }
    }

    /// Number of entries in this row.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if this row is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries this row can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys in row order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.key())
    }

    /// Entries in row order.
    pub fn entries(&self) -> &[Entry<V>] {
        &self.entries
    }

    #[cfg(test)]
    fn push_unchecked(&mut self, key: &str, value: V) {
        self.entries.push(Entry::new(key, value).unwrap());
    }
}
