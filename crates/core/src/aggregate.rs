//! Aggregate root trait for construction-validated domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// Aggregates here validate every invariant inside their constructor and
/// expose only explicit status transitions as mutation, so the interface
/// reduces to the identity contract. Consistency boundaries between
/// aggregates are crossed by opaque id only, never by object reference.
pub trait AggregateRoot: Entity {}
