//! Events emitted by an enum type's registry during lookups.
//!
//! These events are passed to the tracing callback set via
//! `EnumType::set_trace_callback`. Each enum type has its own callback slot,
//! so tracing one type never observes traffic on another.

use std::sync::{Arc, LazyLock, Mutex};

/// Events emitted by the value registry during lookup operations.
///
/// # Examples
///
/// ```rust
/// use enum_registry::RegistryEvent;
///
/// let event = RegistryEvent::Construct {
///     enum_type: "Color",
///     name: "RED",
///     ordinal: 0,
/// };
/// println!("{event}");
/// ```
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    /// A lookup was served from the cache.
    Hit {
        /// Type name of the enum type (e.g. "demo::Color").
        enum_type: &'static str,
        /// The cached value's name.
        name: &'static str,
    },

    /// A value was constructed for the first time and inserted into the cache.
    Construct {
        /// Type name of the enum type.
        enum_type: &'static str,
        /// The new value's name.
        name: &'static str,
        /// The new value's ordinal.
        ordinal: usize,
    },

    /// A lookup failed: the requested key has no definition entry.
    Miss {
        /// Type name of the enum type.
        enum_type: &'static str,
        /// The key as the caller supplied it (a bad name, or a stringified
        /// out-of-range ordinal).
        requested: String,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Hit { enum_type, name } => {
                write!(f, "hit {{ enum_type: {}, name: {} }}", enum_type, name)
            }
            RegistryEvent::Construct {
                enum_type,
                name,
                ordinal,
            } => {
                write!(
                    f,
                    "construct {{ enum_type: {}, name: {}, ordinal: {} }}",
                    enum_type, name, ordinal
                )
            }
            RegistryEvent::Miss {
                enum_type,
                requested,
            } => {
                write!(
                    f,
                    "miss {{ enum_type: {}, requested: {} }}",
                    enum_type, requested
                )
            }
        }
    }
}

/// Storage type for a per-enum-type trace callback.
///
/// Both hand-written `EnumType` impls and the `enum_type!` macro declare one
/// static of this type per enum type.
pub type TraceCallback = LazyLock<Mutex<Option<Arc<dyn Fn(&RegistryEvent) + Send + Sync>>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_display() {
        let event = RegistryEvent::Hit {
            enum_type: "Color",
            name: "RED",
        };
        assert_eq!(event.to_string(), "hit { enum_type: Color, name: RED }");
    }

    #[test]
    fn test_construct_display() {
        let event = RegistryEvent::Construct {
            enum_type: "Color",
            name: "GREEN",
            ordinal: 1,
        };
        assert_eq!(
            event.to_string(),
            "construct { enum_type: Color, name: GREEN, ordinal: 1 }"
        );
    }

    #[test]
    fn test_miss_display() {
        let event = RegistryEvent::Miss {
            enum_type: "Color",
            requested: "YELLOW".to_string(),
        };
        assert_eq!(
            event.to_string(),
            "miss { enum_type: Color, requested: YELLOW }"
        );
    }

    #[test]
    fn test_event_clone() {
        let event = RegistryEvent::Construct {
            enum_type: "Color",
            name: "BLUE",
            ordinal: 2,
        };
        let cloned = event.clone();
        assert_eq!(format!("{:?}", event), format!("{:?}", cloned));
    }
}
