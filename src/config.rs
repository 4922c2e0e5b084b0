use crate::error::Error;
use crate::hash::RowHasher;

/// Row count used when a Dictionary is created with a row count of 0.
pub const DEFAULT_ROW_COUNT: usize = 1024;

/// Number of entries each row pre-allocates at creation.
pub const DEFAULT_ROW_CAPACITY: usize = 8;

/// Which hash function to use for row assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashFunction {
    /// The two-prime byte hash (default, bit-for-bit reproducible).
    #[default]
    Prime,
    /// Use ahash (fast and well-distributed, seeded per process).
    AHash,
    /// Use fxhash (faster but potentially less distributed).
    #[cfg(feature = "fxhash")]
    FxHash,
}

/// Configuration for a Dictionary instance.
///
/// The row count of a Dictionary never changes after creation, so these
/// values are how callers size it for the load they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) default_row_count: usize,
    pub(crate) initial_row_capacity: usize,
    pub(crate) hash_function: HashFunction,
}

impl Config {
    /// Create a new config with defaults (1024 rows, 8 entries per row, prime hash).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row count used when `create` is passed 0. Must be greater than 0.
    pub fn default_row_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidDefaultRowCount);
        }
        self.default_row_count = count;
        Ok(self)
    }

    /// Set how many entries each row pre-allocates. Must be greater than 0,
    /// since rows grow by doubling.
    pub fn initial_row_capacity(mut self, capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidRowCapacity);
        }
        self.initial_row_capacity = capacity;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_function = hash_fn;
        self
    }

    /// Row count substituted for a requested count of 0.
    pub fn get_default_row_count(&self) -> usize {
        self.default_row_count
    }

    /// Per-row pre-allocation.
    pub fn get_initial_row_capacity(&self) -> usize {
        self.initial_row_capacity
    }

    /// Resolve a requested row count, substituting the default for 0.
    pub(crate) fn resolve_row_count(&self, requested: usize) -> usize {
        if requested == 0 {
            self.default_row_count
        } else {
            requested
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_row_count: DEFAULT_ROW_COUNT,
            initial_row_capacity: DEFAULT_ROW_CAPACITY,
            hash_function: HashFunction::Prime,
        }
    }
}

/// Builder for creating a Dictionary with custom configuration.
pub struct DictionaryBuilder {
    config: Config,
    row_count: usize,
}

impl DictionaryBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            row_count: 0,
        }
    }

    /// Set the number of rows to allocate. 0 means "use the default row count".
    pub fn row_count(mut self, count: usize) -> Self {
        self.row_count = count;
        self
    }

    /// Set the row count used when no explicit count is given.
    pub fn default_row_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.default_row_count(count)?;
        Ok(self)
    }

    /// Set how many entries each row pre-allocates.
    pub fn initial_row_capacity(mut self, capacity: usize) -> Result<Self, Error> {
        self.config = self.config.initial_row_capacity(capacity)?;
        Ok(self)
    }

    /// Set the hash function to use.
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.config = self.config.hash_function(hash_fn);
        self
    }

    /// Build a Dictionary with the configured settings.
    pub fn build<V: Copy>(self) -> Result<crate::Dictionary<V>, Error> {
        crate::Dictionary::with_config(self.row_count, self.config)
    }
}

impl Default for DictionaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a hash function instance based on the configuration.
pub(crate) fn create_hasher(hash_fn: HashFunction) -> RowHasher {
    match hash_fn {
        HashFunction::Prime => RowHasher::Prime,
        HashFunction::AHash => RowHasher::AHash,
        #[cfg(feature = "fxhash")]
        HashFunction::FxHash => RowHasher::FxHash,
    }
}
