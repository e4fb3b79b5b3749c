//! Macro for declaring enum types.
//!
//! This module provides a declarative macro that turns a plain struct into a
//! full [`EnumType`](crate::EnumType) by generating the per-type statics and
//! the trait impl from a `name => attributes` entry list.

/// Implements [`EnumType`](crate::EnumType) for a type from its definition
/// table.
///
/// The macro generates:
/// - The definition-table factory from the `name => attributes` entries
///   (ordinals follow listing order).
/// - The population step from the `populate` body.
/// - Hidden per-type statics for the table, the value cache, and the trace
///   callback.
///
/// # Examples
///
/// ```rust
/// use enum_registry::{enum_type, EnumType};
///
/// pub struct Color {
///     pub r: u8,
///     pub g: u8,
///     pub b: u8,
/// }
///
/// enum_type! {
///     Color: (u8, u8, u8) {
///         "RED" => (255, 0, 0),
///         "GREEN" => (0, 255, 0),
///         "BLUE" => (0, 0, 255),
///     }
///     populate(rgb) { Color { r: rgb.0, g: rgb.1, b: rgb.2 } }
/// }
///
/// let green = Color::by_name("GREEN").unwrap();
/// assert_eq!(green.ordinal(), 1);
/// assert_eq!(green.g, 255);
/// assert_eq!(Color::names(), ["RED", "GREEN", "BLUE"]);
/// ```
///
/// # Shorthand
///
/// When the attribute tuple *is* the value (no derived fields), the attribute
/// type and populate body can be omitted; population is then a plain clone:
///
/// ```rust
/// use enum_registry::{enum_type, EnumType};
///
/// #[derive(Clone)]
/// pub struct Suit {
///     pub symbol: char,
/// }
///
/// enum_type! {
///     Suit {
///         "CLUBS" => Suit { symbol: '♣' },
///         "DIAMONDS" => Suit { symbol: '♦' },
///         "HEARTS" => Suit { symbol: '♥' },
///         "SPADES" => Suit { symbol: '♠' },
///     }
/// }
///
/// assert_eq!(Suit::by_ordinal(3).unwrap().symbol, '♠');
/// ```
///
/// # Panics
///
/// First use of the enum type panics if the entry list repeats a name; see
/// [`DefinitionTable::new`](crate::DefinitionTable::new).
#[macro_export]
macro_rules! enum_type {
    (
        $ty:ty : $attr:ty {
            $($name:literal => $value:expr),+ $(,)?
        }
        populate($arg:ident) $body:block
    ) => {
        impl $crate::EnumType for $ty {
            type Attributes = $attr;

            fn definitions() -> ::std::vec::Vec<(&'static str, $attr)> {
                ::std::vec![$(($name, $value)),+]
            }

            fn populate($arg: &$attr) -> Self $body

            fn table() -> &'static ::std::sync::LazyLock<$crate::DefinitionTable<$attr>> {
                static TABLE: ::std::sync::LazyLock<$crate::DefinitionTable<$attr>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::DefinitionTable::new(<$ty as $crate::EnumType>::definitions())
                    });
                &TABLE
            }

            fn cache() -> &'static $crate::ValueCache<$ty> {
                static CACHE: $crate::ValueCache<$ty> = ::std::sync::LazyLock::new(|| {
                    ::std::sync::Mutex::new(::std::collections::HashMap::new())
                });
                &CACHE
            }

            fn trace() -> &'static $crate::TraceCallback {
                static TRACE: $crate::TraceCallback =
                    ::std::sync::LazyLock::new(|| ::std::sync::Mutex::new(::std::option::Option::None));
                &TRACE
            }

            // All lookup operations (by_name, by_ordinal, names, values, ...)
            // come from the trait's default implementations.
        }
    };

    // Attributes are the value itself: populate is a clone.
    (
        $ty:ty {
            $($name:literal => $value:expr),+ $(,)?
        }
    ) => {
        $crate::enum_type! {
            $ty : $ty {
                $($name => $value),+
            }
            populate(attributes) { ::std::clone::Clone::clone(attributes) }
        }
    };
}
