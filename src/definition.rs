//! The definition table: the immutable name → attributes catalog of one enum
//! type.
//!
//! A table is built once from the full entry list and frozen; ordinals are
//! assigned by insertion order, 0-based and contiguous. The table answers
//! "does this key exist" queries in O(1) without ever constructing a value,
//! which is what lets the value registry stay lazy.

use std::collections::HashMap;

use crate::error::{DefinitionError, ValueNotFound};

/// Immutable catalog of `(name → attributes)` for one enum type.
///
/// Names are unique; ordinals are the positions of the entries as supplied,
/// forming the contiguous range `[0, len)`. The name↔ordinal mapping is
/// bijective and fixed for the life of the table.
#[derive(Debug)]
pub struct DefinitionTable<A> {
    /// Attribute tuples in ordinal order.
    attributes: Vec<A>,
    /// Names in ordinal order.
    names: Vec<&'static str>,
    /// Reverse index: name → ordinal.
    index: HashMap<&'static str, usize>,
}

impl<A> DefinitionTable<A> {
    /// Builds a table from entries in ordinal order.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::DuplicateName`] if the same name appears
    /// more than once.
    pub fn try_new(
        entries: impl IntoIterator<Item = (&'static str, A)>,
    ) -> Result<Self, DefinitionError> {
        let mut attributes = Vec::new();
        let mut names = Vec::new();
        let mut index = HashMap::new();

        for (ordinal, (name, attrs)) in entries.into_iter().enumerate() {
            if let Some(&first) = index.get(name) {
                return Err(DefinitionError::DuplicateName {
                    name,
                    first,
                    second: ordinal,
                });
            }
            index.insert(name, ordinal);
            names.push(name);
            attributes.push(attrs);
        }

        Ok(DefinitionTable {
            attributes,
            names,
            index,
        })
    }

    /// Builds a table from entries in ordinal order.
    ///
    /// This is the variant used inside static initializers, where a `Result`
    /// cannot propagate and a duplicate name in a hand-authored table is a
    /// programming bug rather than a runtime condition.
    ///
    /// # Panics
    ///
    /// Panics if the same name appears more than once.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, A)>) -> Self {
        match Self::try_new(entries) {
            Ok(table) => table,
            Err(err) => panic!("invalid definition table: {err}"),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in ordinal order; stable for the life of the table.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// The ordinal assigned to `name`.
    ///
    /// # Errors
    ///
    /// [`ValueNotFound::UnknownName`] if the name has no entry.
    pub fn ordinal_of(&self, name: &str) -> Result<usize, ValueNotFound> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ValueNotFound::unknown_name(name, &self.names))
    }

    /// The name at position `ordinal`.
    ///
    /// # Errors
    ///
    /// [`ValueNotFound::OrdinalOutOfRange`] if `ordinal >= len()`.
    pub fn name_at(&self, ordinal: usize) -> Result<&'static str, ValueNotFound> {
        self.names
            .get(ordinal)
            .copied()
            .ok_or_else(|| ValueNotFound::ordinal_out_of_range(ordinal, self.len()))
    }

    /// The attribute tuple recorded for `name`.
    ///
    /// # Errors
    ///
    /// [`ValueNotFound::UnknownName`] if the name has no entry.
    pub fn attributes_of(&self, name: &str) -> Result<&A, ValueNotFound> {
        let ordinal = self.ordinal_of(name)?;
        Ok(&self.attributes[ordinal])
    }

    /// Resolves a name to its `(ordinal, canonical name, attributes)` entry,
    /// if present. The returned name is the table's own `&'static str`, which
    /// the registry uses as its cache key.
    pub(crate) fn entry(&self, name: &str) -> Option<(usize, &'static str, &A)> {
        let ordinal = *self.index.get(name)?;
        Some((ordinal, self.names[ordinal], &self.attributes[ordinal]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_table() -> DefinitionTable<(u8, u8, u8)> {
        DefinitionTable::new([
            ("RED", (255, 0, 0)),
            ("GREEN", (0, 255, 0)),
            ("BLUE", (0, 0, 255)),
        ])
    }

    #[test]
    fn test_names_in_insertion_order() {
        let table = rgb_table();
        assert_eq!(table.names(), ["RED", "GREEN", "BLUE"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_ordinal_name_bijection() {
        let table = rgb_table();
        for name in table.names() {
            let ordinal = table.ordinal_of(name).unwrap();
            assert_eq!(table.name_at(ordinal).unwrap(), *name);
        }
        for ordinal in 0..table.len() {
            let name = table.name_at(ordinal).unwrap();
            assert_eq!(table.ordinal_of(name).unwrap(), ordinal);
        }
    }

    #[test]
    fn test_attributes_of() {
        let table = rgb_table();
        assert_eq!(table.attributes_of("GREEN").unwrap(), &(0, 255, 0));
    }

    #[test]
    fn test_unknown_name() {
        let table = rgb_table();
        let err = table.ordinal_of("YELLOW").unwrap_err();
        assert_eq!(
            err,
            ValueNotFound::UnknownName {
                name: "YELLOW".to_string(),
                available: vec!["RED", "GREEN", "BLUE"],
            }
        );
    }

    #[test]
    fn test_ordinal_out_of_range() {
        let table = rgb_table();
        let err = table.name_at(5).unwrap_err();
        assert_eq!(err, ValueNotFound::OrdinalOutOfRange { ordinal: 5, max: 2 });
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = DefinitionTable::try_new([("RED", 0u8), ("GREEN", 1), ("RED", 2)]);
        assert_eq!(
            result.unwrap_err(),
            DefinitionError::DuplicateName {
                name: "RED",
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    #[should_panic(expected = "duplicate name `RED`")]
    fn test_duplicate_name_panics_in_new() {
        let _ = DefinitionTable::new([("RED", 0u8), ("RED", 1)]);
    }

    #[test]
    fn test_empty_table() {
        let table: DefinitionTable<u8> = DefinitionTable::new([]);
        assert!(table.is_empty());
        assert_eq!(
            table.name_at(0).unwrap_err(),
            ValueNotFound::OrdinalOutOfRange { ordinal: 0, max: 0 }
        );
    }

    #[test]
    fn test_entry_returns_canonical_name() {
        let table = rgb_table();
        let (ordinal, name, attrs) = table.entry("BLUE").unwrap();
        assert_eq!(ordinal, 2);
        assert_eq!(name, "BLUE");
        assert_eq!(attrs, &(0, 0, 255));
        assert!(table.entry("YELLOW").is_none());
    }
}
