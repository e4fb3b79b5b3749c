//! # Enum Registry
//!
//! Java-style data-carrying enumerations for Rust: fixed, named, ordered sets
//! of singleton values, each holding immutable attributes, retrievable by
//! name or 0-based ordinal.
//!
//! Values are constructed lazily, at most once per name, and cached for the
//! life of the process; every lookup of the same name returns a handle to the
//! identical instance.
//!
//! ## Quick Start
//!
//! ```rust
//! use enum_registry::{enum_type, EnumType};
//!
//! pub struct Color {
//!     pub r: u8,
//!     pub g: u8,
//!     pub b: u8,
//! }
//!
//! enum_type! {
//!     Color: (u8, u8, u8) {
//!         "RED" => (255, 0, 0),
//!         "GREEN" => (0, 255, 0),
//!         "BLUE" => (0, 0, 255),
//!     }
//!     populate(rgb) { Color { r: rgb.0, g: rgb.1, b: rgb.2 } }
//! }
//!
//! let green = Color::by_name("GREEN")?;
//! assert_eq!(green.ordinal(), 1);
//! assert_eq!(green.g, 255);
//!
//! // Repeated lookups return the same cached instance.
//! assert!(green.ptr_eq(&Color::by_ordinal(1)?));
//!
//! // Iteration covers every value in ordinal order.
//! let names: Vec<_> = Color::values().map(|v| v.name()).collect();
//! assert_eq!(names, ["RED", "GREEN", "BLUE"]);
//! # Ok::<(), enum_registry::ValueNotFound>(())
//! ```
//!
//! ## Features
//!
//! - **Lazy and at-most-once**: a value is built on first request only, and
//!   never rebuilt, even under concurrent first-time lookups
//! - **Identity-stable**: lookups of one name always yield the same instance;
//!   serde round trips re-resolve to that canonical instance
//! - **Typed lookup errors**: unknown names report the full valid-name list;
//!   out-of-range ordinals report the maximum valid ordinal
//! - **Tracing support**: optional per-type callback observing cache hits,
//!   constructions, and misses
//!
//! ## Main Items
//!
//! - [`enum_type!`] - declare an enum type from its `name => attributes` table
//! - [`EnumType`] - the lookup API (`by_name`, `by_ordinal`, `names`,
//!   `values`) and trait to implement by hand when the macro doesn't fit
//! - [`ValueRef`] - shared handle to one cached value (`name()`, `ordinal()`,
//!   `Deref` to the populated data)
//! - [`DefinitionTable`] - the frozen `name → attributes` catalog
//! - [`ValueNotFound`] - the lookup-failure taxonomy

mod definition;
mod error;
mod event;
mod macros;
mod registry;
mod value;

// Re-export the main public API
pub use definition::DefinitionTable;
pub use error::{DefinitionError, ValueNotFound};
pub use event::{RegistryEvent, TraceCallback};
pub use registry::{EnumType, ValueCache, Values};
pub use value::ValueRef;
