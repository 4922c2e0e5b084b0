//! Diagnostics: snapshot and text dump of the row layout.
//!
//! Nothing here feeds back into lookups or mutation; these are observers only.

use crate::dictionary::Dictionary;
use std::fmt::Write;

/// Per-row diagnostics snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostics {
    /// Number of entries in this row.
    pub len: usize,
    /// Entries this row holds before it next doubles.
    pub capacity: usize,
    /// Keys in row order.
    pub keys: Vec<String>,
}

/// Structured snapshot for load introspection.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    /// Number of rows.
    pub row_count: usize,
    /// Total number of entries across all rows.
    pub total_entries: usize,
    /// Per-row diagnostics.
    pub rows: Vec<RowDiagnostics>,
    /// Average load (entries) per row.
    pub avg_load_per_row: f64,
    /// Max load / avg load ratio. User interprets (e.g. threshold 2.0 for imbalance).
    pub max_load_ratio: f64,
}

impl Diagnostics {
    pub(crate) fn from_rows(rows: Vec<RowDiagnostics>) -> Self {
        let row_count = rows.len();
        let total_entries: usize = rows.iter().map(|r| r.len).sum();
        let max_load = rows.iter().map(|r| r.len).max().unwrap_or(0);
        let avg_load_per_row = if row_count == 0 {
            0.0
        } else {
            total_entries as f64 / row_count as f64
        };
        let max_load_ratio = if avg_load_per_row > 0.0 {
            max_load as f64 / avg_load_per_row
        } else {
            0.0
        };

        Self {
            row_count,
            total_entries,
            rows,
            avg_load_per_row,
            max_load_ratio,
        }
    }

    /// Length of the longest row.
    pub fn longest_row(&self) -> usize {
        self.rows.iter().map(|r| r.len).max().unwrap_or(0)
    }
}

/// Render a dictionary as text.
///
/// - level 0: the row count.
/// - level 1: also each row's length and capacity.
/// - level 2 and up: also each row's keys, in row order.
///
/// `None` is reported as an absent dictionary rather than treated as an error.
///
/// # Example
///
/// ```rust
/// use rowdict::{diagnostics::dump, Dictionary};
///
/// let mut dict = Dictionary::create(2)?;
/// dict.put("a", 1)?;
///
/// assert_eq!(dump(Some(&dict), 0), "Dict\n\tnumRows=2\n");
/// assert_eq!(dump::<i32>(None, 2), "\tDict==NULL\n");
/// # Ok::<(), rowdict::Error>(())
/// ```
pub fn dump<V: Copy>(dict: Option<&Dictionary<V>>, level: u32) -> String {
    let dict = match dict {
        Some(dict) => dict,
        None => return "\tDict==NULL\n".to_string(),
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Dict");
    let _ = writeln!(out, "\tnumRows={}", dict.row_count());
    if level < 1 {
        return out;
    }

    for i in 0..dict.row_count() {
        let Some(row) = dict.row(i) else { break };
        let _ = write!(
            out,
            "\tDictRow[{}]: numEntries={} capacity={} keys=[",
            i,
            row.len(),
            row.capacity()
        );
        if level >= 2 {
            for key in row.keys() {
                let _ = write!(out, "{}, ", key);
            }
        }
        let _ = writeln!(out, "]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary<i32> {
        // "a" -> row 1, "b" -> row 2, "ab" -> row 3 with four rows
        let mut dict = Dictionary::create(4).unwrap();
        dict.put("a", 1).unwrap();
        dict.put("b", 2).unwrap();
        dict.put("ab", 3).unwrap();
        dict
    }

    #[test]
    fn test_dump_levels() {
        let dict = sample();

        assert_eq!(dump(Some(&dict), 0), "Dict\n\tnumRows=4\n");

        let level1 = dump(Some(&dict), 1);
        assert!(level1.contains("\tDictRow[0]: numEntries=0 capacity=8 keys=[]\n"));
        assert!(level1.contains("\tDictRow[1]: numEntries=1 capacity=8 keys=[]\n"));

        let level2 = dict.dump(2);
        assert!(level2.contains("\tDictRow[1]: numEntries=1 capacity=8 keys=[a, ]\n"));
        assert!(level2.contains("\tDictRow[2]: numEntries=1 capacity=8 keys=[b, ]\n"));
        assert!(level2.contains("\tDictRow[3]: numEntries=1 capacity=8 keys=[ab, ]\n"));
        assert_eq!(level2.lines().count(), 6);
    }

    #[test]
    fn test_dump_absent() {
        assert_eq!(dump::<i32>(None, 0), "\tDict==NULL\n");
    }

    #[test]
    fn test_dump_does_not_mutate() {
        let dict = sample();
        let before = dict.diagnostics().rows;
        let _ = dump(Some(&dict), 3);
        assert_eq!(dict.diagnostics().rows, before);
    }

    #[test]
    fn test_diagnostics_snapshot() {
        let diag = sample().diagnostics();
        assert_eq!(diag.row_count, 4);
        assert_eq!(diag.total_entries, 3);
        assert_eq!(diag.rows[0].len, 0);
        assert_eq!(diag.rows[3].keys, vec!["ab".to_string()]);
        assert_eq!(diag.longest_row(), 1);
        assert!((diag.avg_load_per_row - 0.75).abs() < 1e-9);
        assert!((diag.max_load_ratio - 1.0 / 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_diagnostics_empty() {
        let dict: Dictionary<i32> = Dictionary::create(3).unwrap();
        let diag = dict.diagnostics();
        assert_eq!(diag.total_entries, 0);
        assert_eq!(diag.max_load_ratio, 0.0);
    }
}
