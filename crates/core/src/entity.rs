//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An employee keeps its identity while its salary changes; two employees with
/// the same name and salary are still different entities.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
