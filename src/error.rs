//! Error types for definition-table construction and value lookup.

use thiserror::Error;

/// A lookup asked for a value that does not exist in its enum type.
///
/// This is the common "bad key" category: both variants mean the caller asked
/// for something the definition table has never contained, so retrying the
/// same lookup can never succeed. Each variant carries enough context for an
/// actionable message (the full valid-name list, or the maximum valid
/// ordinal).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueNotFound {
    /// The requested name has no definition entry.
    #[error("unknown name `{name}` (known names: {})", .available.join(", "))]
    UnknownName {
        /// The name that was requested.
        name: String,
        /// Every valid name, in ordinal order.
        available: Vec<&'static str>,
    },

    /// The requested ordinal is outside `[0, count)`.
    #[error("ordinal {ordinal} is out of range (max valid ordinal: {max})")]
    OrdinalOutOfRange {
        /// The ordinal that was requested.
        ordinal: usize,
        /// The largest valid ordinal (0 for an empty table).
        max: usize,
    },
}

impl ValueNotFound {
    pub(crate) fn unknown_name(name: &str, available: &[&'static str]) -> Self {
        ValueNotFound::UnknownName {
            name: name.to_string(),
            available: available.to_vec(),
        }
    }

    pub(crate) fn ordinal_out_of_range(ordinal: usize, len: usize) -> Self {
        ValueNotFound::OrdinalOutOfRange {
            ordinal,
            max: len.saturating_sub(1),
        }
    }
}

/// A definition table could not be built from the supplied entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The same name appeared twice in the entry list.
    #[error("duplicate name `{name}` in definition table (ordinals {first} and {second})")]
    DuplicateName {
        /// The name that collided.
        name: &'static str,
        /// Ordinal of the first occurrence.
        first: usize,
        /// Ordinal of the offending second occurrence.
        second: usize,
    },
}
