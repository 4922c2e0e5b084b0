use std::hash::Hasher;

/// Multiplier applied to each key byte.
pub const PRIME1: i32 = 77933;
/// Multiplier applied to the running accumulator.
pub const PRIME2: i32 = 119557;

/// Hash `key` as a sequence of bytes and reduce it to a row index in `[0, m)`.
///
/// The accumulator is a 32-bit signed integer with wrapping arithmetic, and
/// each byte is read as a signed 8-bit value. A negative accumulator is
/// negated before reduction; `i32::MIN` negates to itself, and the reduction
/// then works on its unsigned bit pattern (`2^31`), so the result stays in
/// range for every key.
///
/// # Panics
///
/// Panics if `m` is 0.
///
/// # Example
///
/// ```rust
/// use rowdict::hash::dict_hash;
///
/// assert_eq!(dict_hash(b"a", 1024), 333);
/// assert_eq!(dict_hash(b"", 7), 0);
/// ```
pub fn dict_hash(key: &[u8], m: usize) -> usize {
    let mut acc: i32 = 0;
    for &byte in key {
        let b = byte as i8 as i32;
        acc = PRIME1.wrapping_mul(b).wrapping_add(PRIME2.wrapping_mul(acc));
    }
    if acc < 0 {
        acc = acc.wrapping_neg();
    }
    (acc as u32 as usize) % m
}

/// Hash function implementation for row assignment.
/// Uses an enum to avoid trait object limitations with generics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHasher {
    /// The two-prime byte hash (default, see [`dict_hash`]).
    Prime,
    /// AHash with its default keys. Placement is stable for the life of the
    /// process, but may differ between runs.
    AHash,
    /// FxHash implementation (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

impl RowHasher {
    /// Map a key to the row it belongs to, in `[0, row_count)`.
    pub fn row_index(&self, key: &str, row_count: usize) -> usize {
        match self {
            RowHasher::Prime => dict_hash(key.as_bytes(), row_count),
            RowHasher::AHash => {
                let mut hasher = ahash::AHasher::default();
                hasher.write(key.as_bytes());
                (hasher.finish() % row_count as u64) as usize
            }
            #[cfg(feature = "fxhash")]
            RowHasher::FxHash => {
                let mut hasher = fxhash::FxHasher::default();
                hasher.write(key.as_bytes());
                (hasher.finish() % row_count as u64) as usize
            }
        }
    }
}

impl Default for RowHasher {
    fn default() -> Self {
        RowHasher::Prime
    }
}
