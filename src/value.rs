//! The value instance handle returned by every lookup.
//!
//! A [`ValueRef`] is a cheap-clone handle (`Arc` internally) to the single
//! cached instance of one named value. The instance itself is immutable:
//! name, ordinal, and the populated data are set at construction and never
//! change.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::registry::EnumType;

/// The immutable payload shared by all handles to one value.
struct ValueInner<T> {
    name: &'static str,
    ordinal: usize,
    data: T,
}

/// Shared handle to the cached instance of one named value.
///
/// Every successful lookup of the same name within one enum type returns a
/// handle to the same instance; [`ValueRef::ptr_eq`] checks that identity
/// directly.
///
/// # Equality
///
/// `PartialEq`/`Eq`/`Hash` are value-based on the name, so a handle
/// reconstructed through any path (including a serde round trip) compares
/// equal to the canonical one. Identity comparison is a separate, explicit
/// operation (`ptr_eq`), never the meaning of `==`.
///
/// # Ordering
///
/// Values order by ordinal, i.e. by their position in the definition table.
pub struct ValueRef<T>(Arc<ValueInner<T>>);

impl<T> ValueRef<T> {
    pub(crate) fn new(name: &'static str, ordinal: usize, data: T) -> Self {
        ValueRef(Arc::new(ValueInner {
            name,
            ordinal,
            data,
        }))
    }

    /// The value's unique name within its enum type.
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// The value's 0-based position in the definition table.
    pub fn ordinal(&self) -> usize {
        self.0.ordinal
    }

    /// `true` if both handles point at the same cached instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for ValueRef<T> {
    // manual impl: cloning the handle must not require T: Clone
    fn clone(&self) -> Self {
        ValueRef(Arc::clone(&self.0))
    }
}

impl<T> Deref for ValueRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0.data
    }
}

impl<T> PartialEq for ValueRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.name == other.0.name
    }
}

impl<T> Eq for ValueRef<T> {}

impl<T> Hash for ValueRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl<T> PartialOrd for ValueRef<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ValueRef<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.ordinal.cmp(&other.0.ordinal)
    }
}

impl<T> fmt::Display for ValueRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

impl<T> fmt::Debug for ValueRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRef")
            .field("name", &self.0.name)
            .field("ordinal", &self.0.ordinal)
            .finish()
    }
}

/// Serializes as the bare name string.
impl<T: EnumType> Serialize for ValueRef<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.name)
    }
}

/// Deserializes a name string by re-resolving it through the registry, so the
/// result is the canonical cached instance rather than a detached copy. An
/// unknown name is a deserialization error.
impl<'de, T: EnumType> Deserialize<'de> for ValueRef<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        T::by_name(&name).map_err(D::Error::custom)
    }
}
