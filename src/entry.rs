use crate::error::Error;

/// One stored key/value pair.
///
/// The key is the Dictionary's own copy, so later changes to the caller's
/// string cannot move the entry out from under a lookup. The value is a
/// `Copy` handle that the Dictionary never dereferences or releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<V> {
    key: String,
    value: V,
}

impl<V: Copy> Entry<V> {
    /// Build an entry holding an independent copy of `key`.
    ///
    /// The copy is made with a fallible reservation, so an allocator failure
    /// surfaces as [`Error::AllocationFailure`].
    pub(crate) fn new(key: &str, value: V) -> Result<Self, Error> {
        let mut owned = String::new();
        owned.try_reserve_exact(key.len())?;
        owned.push_str(key);
        Ok(Self { key: owned, value })
    }

    /// The stored key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored value handle.
    pub fn value(&self) -> V {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: V) {
        self.value = value;
    }

    #[inline]
    pub(crate) fn matches(&self, key: &str) -> bool {
        self.key.as_bytes() == key.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_copied() {
        let mut caller = String::from("shared");
        let entry = Entry::new(&caller, 7).unwrap();
        caller.push_str("_changed");
        assert_eq!(entry.key(), "shared");
        assert_ne!(entry.key().as_ptr(), caller.as_ptr());
    }

    #[test]
    fn test_set_value_keeps_key() {
        let mut entry = Entry::new("k", 1).unwrap();
        entry.set_value(2);
        assert_eq!(entry.key(), "k");
        assert_eq!(entry.value(), 2);
    }

    #[test]
    fn test_matches_is_exact() {
        let entry = Entry::new("abc", ()).unwrap();
        assert!(entry.matches("abc"));
        assert!(!entry.matches("ab"));
        assert!(!entry.matches("abcd"));
        assert!(!entry.matches("ABC"));
    }
}
