//! Entity trait: identity + continuity across state changes.
//!
//! Entities compare by identifier alone: two snapshots with the same id are
//! the same thing even when their attributes differ. Implementors therefore
//! write `PartialEq` by hand over the id instead of deriving it.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
