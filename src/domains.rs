//! Coefficient domains: exact rings and fields over value types.

pub mod integer;
pub mod rational;

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A failure of exact arithmetic.
///
/// `Overflow` carries the rendered operation and operands, so that a failure
/// deep inside a reduction can still be explained at the top level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// An integer operation would leave the representable range.
    #[error("integer overflow computing {0}")]
    Overflow(String),
    /// A rational was constructed or inverted with a zero denominator.
    #[error("zero denominator in rational")]
    ZeroDenominator,
    /// A monomial division that would leave the exact domain.
    #[error("monomial is not divisible by the divisor")]
    NotDivisible,
}

pub trait InternalOrdering {
    /// Compare two elements using an internal ordering.
    ///
    /// The ordering is total and deterministic but carries no mathematical
    /// meaning; it exists so that collections iterate reproducibly.
    fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering;
}

/// A ring object over value-typed elements.
///
/// The arithmetic operations return `Result` because every coefficient
/// operation in this crate is exact and overflow-checked: there is no
/// promotion to a wider type, only an [`ArithmeticError`].
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    type Element: Clone + PartialEq + Eq + Hash + InternalOrdering + Debug + Display;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError>;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError>;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError>;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError>;
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError>;
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError>;
    fn neg(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError>;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;
}

pub trait Field: Ring {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError>;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError>;
    /// The multiplicative inverse; fails with
    /// [`ArithmeticError::ZeroDenominator`] on zero.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError>;
}
