//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// A `BirthDate("13/03/2000")` equals any other `BirthDate("13/03/2000")`,
/// while two employees with identical fields are still distinct entities.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct BirthDate(String);
///
/// impl ValueObject for BirthDate {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
