//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// carrying the same payload are interchangeable. Contrast with [`crate::Entity`],
/// where only the identifier matters.
///
/// Example:
/// - `Money { amount: 12.50, currency: Usd }` is a value object
/// - `Zone { id: ZoneId(1), countries: [...] }` is an entity
///
/// To "modify" a value object, construct a new one. The trait requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: structural comparison of the payload
/// - **Debug**: values show up in errors and test output
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
