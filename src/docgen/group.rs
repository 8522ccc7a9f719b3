//! Grouping of error records by source file.

use indexmap::IndexMap;

use super::report::ErrorRecord;

/// Records that share one `file` value, destined for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup<'a> {
    /// The shared `file` value.
    pub file: &'a str,
    /// Records in input order.
    pub records: Vec<&'a ErrorRecord>,
}

/// Partitions records by `file` in a single stable pass.
///
/// Groups appear in the order their key is first seen; records inside a
/// group keep input order. No sorting is applied.
#[must_use]
pub fn group_by_file(records: &[ErrorRecord]) -> Vec<FileGroup<'_>> {
    let mut groups: IndexMap<&str, Vec<&ErrorRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.file.as_str()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(file, records)| FileGroup { file, records })
        .collect()
}
