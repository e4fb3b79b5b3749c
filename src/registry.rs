//! Core trait defining an enum type's value registry.
//!
//! This module provides the [`EnumType`] trait with default implementations
//! for every lookup operation. An implementor supplies the definition-table
//! factory, the population step, and three accessors to per-type statics
//! (table, cache, trace-callback slot); everything else (lazy at-most-once
//! construction, name/ordinal lookup, iteration, tracing) comes from the
//! trait's default methods.
//!
//! The registry is name-based: within one enum type each name maps to exactly
//! one cached instance, built on first request and served from cache ever
//! after.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, LazyLock, Mutex};

use crate::definition::DefinitionTable;
use crate::error::ValueNotFound;
use crate::event::{RegistryEvent, TraceCallback};
use crate::value::ValueRef;

/// Storage type for a per-enum-type value cache.
///
/// Keys are the canonical `&'static str` names owned by the definition table.
/// Entries are added only by successful construction and never removed.
pub type ValueCache<T> = LazyLock<Mutex<HashMap<&'static str, ValueRef<T>>>>;

/// A closed, named, ordered family of singleton values.
///
/// Implement this trait (usually through the [`enum_type!`](crate::enum_type)
/// macro) to give a type Java-enum semantics: a fixed definition table of
/// `name → attributes` entries, lazy singleton construction per name, and
/// lookup by name or 0-based ordinal.
///
/// # Laziness and identity
///
/// No value is constructed until it is first requested; each is constructed
/// at most once per process. Every lookup of the same name returns a handle
/// to the same cached instance, so `ValueRef::ptr_eq` holds across
/// independent lookups.
///
/// # Concurrency
///
/// The check-construct-insert sequence of [`by_name`](EnumType::by_name) runs
/// as one critical section under the cache mutex, so the at-most-once
/// guarantee survives concurrent first-time lookups. The definition table is
/// built once behind `LazyLock` and read without locking afterwards.
pub trait EnumType: Sized + Send + Sync + 'static {
    /// The attribute tuple each definition entry carries.
    type Attributes: Send + Sync + 'static;

    /// Produces the full definition-table content, in ordinal order.
    ///
    /// Invoked exactly once, by the table's static initializer. Names must be
    /// unique; a duplicate panics table construction.
    fn definitions() -> Vec<(&'static str, Self::Attributes)>;

    /// Derives one value's immutable fields from its attribute tuple.
    ///
    /// Runs at most once per name, inside the construction step of
    /// [`by_name`](EnumType::by_name). Must be deterministic and must not
    /// touch the registry of any enum type (the cache lock is held).
    fn populate(attributes: &Self::Attributes) -> Self;

    // -------------------------------------------------------------------------------------------------
    // Per-type statics
    // -------------------------------------------------------------------------------------------------

    /// Access the definition-table static.
    fn table() -> &'static LazyLock<DefinitionTable<Self::Attributes>>;

    /// Access the value-cache static.
    fn cache() -> &'static ValueCache<Self>;

    /// Access the trace-callback static.
    fn trace() -> &'static TraceCallback;

    // -------------------------------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------------------------------

    /// Name used to identify this enum type in trace events.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Looks up a value by name, constructing and caching it on first request.
    ///
    /// A cache hit returns the cached handle with no side effects beyond a
    /// trace event. A miss validates the name against the definition table,
    /// runs [`populate`](EnumType::populate), inserts the new instance, and
    /// returns it; the whole sequence is a single critical section, so for a
    /// fixed name construction happens at most once per process.
    ///
    /// # Errors
    ///
    /// [`ValueNotFound::UnknownName`], carrying the full valid-name list, if
    /// the name has no definition entry.
    fn by_name(name: &str) -> Result<ValueRef<Self>, ValueNotFound> {
        let table = Self::table();

        // `bool` marks first-time construction so the right event fires once
        // the lock is gone.
        let outcome = {
            let mut cache = Self::cache().lock().unwrap_or_else(|p| p.into_inner());
            if let Some(value) = cache.get(name) {
                Ok((value.clone(), false))
            } else {
                match table.entry(name) {
                    Some((ordinal, key, attributes)) => {
                        let value = ValueRef::new(key, ordinal, Self::populate(attributes));
                        cache.insert(key, value.clone());
                        Ok((value, true))
                    }
                    None => Err(ValueNotFound::unknown_name(name, table.names())),
                }
            }
        };

        // Events are emitted after the cache lock is released; see
        // `set_trace_callback` for the callback's re-entrancy rules.
        match outcome {
            Ok((value, constructed)) => {
                if constructed {
                    Self::emit_event(&RegistryEvent::Construct {
                        enum_type: Self::type_name(),
                        name: value.name(),
                        ordinal: value.ordinal(),
                    });
                } else {
                    Self::emit_event(&RegistryEvent::Hit {
                        enum_type: Self::type_name(),
                        name: value.name(),
                    });
                }
                Ok(value)
            }
            Err(err) => {
                Self::emit_event(&RegistryEvent::Miss {
                    enum_type: Self::type_name(),
                    requested: name.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Looks up a value by its 0-based ordinal.
    ///
    /// Resolves the ordinal to a name via the definition table, then
    /// delegates to [`by_name`](EnumType::by_name).
    ///
    /// # Errors
    ///
    /// [`ValueNotFound::OrdinalOutOfRange`], carrying the maximum valid
    /// ordinal, if `ordinal >= count()`.
    fn by_ordinal(ordinal: usize) -> Result<ValueRef<Self>, ValueNotFound> {
        let name = match Self::table().name_at(ordinal) {
            Ok(name) => name,
            Err(err) => {
                Self::emit_event(&RegistryEvent::Miss {
                    enum_type: Self::type_name(),
                    requested: ordinal.to_string(),
                });
                return Err(err);
            }
        };
        Self::by_name(name)
    }

    /// All names in ordinal order; stable for the life of the process.
    fn names() -> &'static [&'static str] {
        Self::table().names()
    }

    /// Number of values in this enum type.
    fn count() -> usize {
        Self::table().len()
    }

    /// Lazily iterates over every value in ordinal order.
    ///
    /// Constructs (and caches) any value not yet built; re-iterating reruns
    /// the lookups, which are pure cache reads once everything is
    /// constructed.
    fn values() -> Values<Self> {
        Values {
            next: 0,
            len: Self::table().len(),
            _marker: PhantomData,
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback for this enum type's registry operations.
    ///
    /// The callback is invoked for every lookup (hit, construct, miss).
    ///
    /// # Lock Poisoning Recovery
    ///
    /// If the trace lock is poisoned (a thread panicked while holding it),
    /// this method recovers by extracting the inner value.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT perform lookups on the same enum type, as this
    /// will deadlock on the trace lock. The cache lock is never held while
    /// the callback runs.
    fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear this enum type's tracing callback.
    ///
    /// After calling this, no tracing events are emitted. Cached values are
    /// unaffected.
    fn clear_trace_callback() {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit a registry event through the current callback, if any.
    fn emit_event(event: &RegistryEvent) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }
}

/// Ordinal-ordered iterator over every value of an enum type.
///
/// Returned by [`EnumType::values`]. Finite and restartable: each call to
/// `values()` yields a fresh iterator over the same instances.
pub struct Values<T> {
    next: usize,
    len: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: EnumType> Iterator for Values<T> {
    type Item = ValueRef<T>;

    fn next(&mut self) -> Option<ValueRef<T>> {
        if self.next >= self.len {
            return None;
        }
        // In-range ordinals cannot fail.
        let value = T::by_ordinal(self.next).ok()?;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: EnumType> ExactSizeIterator for Values<T> {}

impl<T: EnumType> std::iter::FusedIterator for Values<T> {}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
