//! Identity collisions across a batch of validated records.

use super::errors::{FieldError, FieldErrorKind};
use super::kind::RecordKind;
use super::records::Record;
use std::collections::HashMap;

/// Flag every record whose identity was already claimed by an earlier record
/// of the same kind. Returns `(index, error)` pairs in batch order; first
/// occurrences are never flagged.
pub fn check_uniqueness(records: &[Record]) -> Vec<(usize, FieldError)> {
    let mut seen: HashMap<(RecordKind, &str), usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let kind = record.kind();
        let identity = record.identity();
        match seen.get(&(kind, identity)) {
            Some(first) => duplicates.push((
                index,
                FieldError::new(
                    kind.identity_field(),
                    FieldErrorKind::DuplicateIdentifier,
                    format!(
                        "{} '{}' is already defined by {} #{}",
                        kind.identity_field(),
                        identity,
                        kind,
                        first + 1
                    ),
                ),
            )),
            None => {
                seen.insert((kind, identity), index);
            }
        }
    }

    duplicates
}
