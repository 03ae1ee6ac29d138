//! Exact rational numbers over checked machine integers.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter, Write};
use std::marker::PhantomData;

use super::integer::{CheckedInt, SignedInteger};
use super::{ArithmeticError, Field, InternalOrdering, Ring};

/// The field of rational numbers backed by `i64`.
pub const Q: RationalField<i64> = RationalField::new();

/// The field of rationals over a fixed-width signed integer type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField<I: SignedInteger = i64> {
    _phantom: PhantomData<I>,
}

impl<I: SignedInteger> RationalField<I> {
    pub const fn new() -> RationalField<I> {
        RationalField {
            _phantom: PhantomData,
        }
    }
}

impl<I: SignedInteger> Default for RationalField<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// A rational number reduced to lowest terms.
///
/// Invariants, restored after every mutating operation: the denominator is
/// positive, numerator and denominator are coprime, and zero is stored as
/// `0/1`. Reduction is eager so that the zero test stays O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rational<I: SignedInteger = i64> {
    numerator: CheckedInt<I>,
    denominator: CheckedInt<I>,
}

impl<I: SignedInteger> Rational<I> {
    pub fn zero() -> Rational<I> {
        Rational {
            numerator: CheckedInt::new(I::ZERO),
            denominator: CheckedInt::new(I::ONE),
        }
    }

    pub fn one() -> Rational<I> {
        Rational {
            numerator: CheckedInt::new(I::ONE),
            denominator: CheckedInt::new(I::ONE),
        }
    }

    pub fn from_integer(num: I) -> Rational<I> {
        Rational {
            numerator: CheckedInt::new(num),
            denominator: CheckedInt::new(I::ONE),
        }
    }

    /// Construct `num / den`; fails with
    /// [`ArithmeticError::ZeroDenominator`] when `den` is zero.
    pub fn new(num: I, den: I) -> Result<Rational<I>, ArithmeticError> {
        if den == I::ZERO {
            return Err(ArithmeticError::ZeroDenominator);
        }

        let mut r = Rational {
            numerator: CheckedInt::new(num),
            denominator: CheckedInt::new(den),
        };
        r.reduce()?;
        Ok(r)
    }

    fn reduce(&mut self) -> Result<(), ArithmeticError> {
        if self.denominator.is_negative() {
            self.numerator = self.numerator.neg()?;
            self.denominator = self.denominator.neg()?;
        }

        let g = self.numerator.gcd(self.denominator)?;
        self.numerator = self.numerator.div(g)?;
        self.denominator = self.denominator.div(g)?;
        Ok(())
    }

    pub fn numerator(&self) -> I {
        self.numerator.get()
    }

    pub fn denominator(&self) -> I {
        self.denominator.get()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.numerator.get() == I::ONE && self.denominator.get() == I::ONE
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.get() == I::ONE
    }

    pub fn abs(&self) -> Result<Rational<I>, ArithmeticError> {
        if self.is_negative() {
            self.neg()
        } else {
            Ok(*self)
        }
    }

    pub fn neg(&self) -> Result<Rational<I>, ArithmeticError> {
        Ok(Rational {
            numerator: self.numerator.neg()?,
            denominator: self.denominator,
        })
    }

    /// The multiplicative inverse; fails with
    /// [`ArithmeticError::ZeroDenominator`] on zero.
    pub fn inv(&self) -> Result<Rational<I>, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::ZeroDenominator);
        }

        let mut r = Rational {
            numerator: self.denominator,
            denominator: self.numerator,
        };
        r.reduce()?;
        Ok(r)
    }

    pub fn try_add(&self, other: &Rational<I>) -> Result<Rational<I>, ArithmeticError> {
        let den = self.denominator.lcm(other.denominator)?;
        let n1 = self.numerator.mul(den.div(self.denominator)?)?;
        let n2 = other.numerator.mul(den.div(other.denominator)?)?;

        let mut r = Rational {
            numerator: n1.add(n2)?,
            denominator: den,
        };
        r.reduce()?;
        Ok(r)
    }

    pub fn try_sub(&self, other: &Rational<I>) -> Result<Rational<I>, ArithmeticError> {
        self.try_add(&other.neg()?)
    }

    pub fn try_mul(&self, other: &Rational<I>) -> Result<Rational<I>, ArithmeticError> {
        // cancel across the fraction before multiplying to keep the
        // intermediates small
        let g1 = self.numerator.gcd(other.denominator)?;
        let g2 = other.numerator.gcd(self.denominator)?;

        let mut r = Rational {
            numerator: self.numerator.div(g1)?.mul(other.numerator.div(g2)?)?,
            denominator: self.denominator.div(g2)?.mul(other.denominator.div(g1)?)?,
        };
        r.reduce()?;
        Ok(r)
    }

    pub fn try_div(&self, other: &Rational<I>) -> Result<Rational<I>, ArithmeticError> {
        self.try_mul(&other.inv()?)
    }

    /// Compare by cross-multiplication over the common denominator, with the
    /// gcd divided out first to lower the overflow risk.
    pub fn try_cmp(&self, other: &Rational<I>) -> Result<Ordering, ArithmeticError> {
        let g = self.denominator.gcd(other.denominator)?;
        let lhs = self.numerator.mul(other.denominator.div(g)?)?;
        let rhs = other.numerator.mul(self.denominator.div(g)?)?;
        Ok(lhs.cmp(&rhs))
    }

    /// Lossy conversion for reporting; arithmetic never uses it.
    pub fn to_f64(&self) -> f64 {
        self.numerator.get().as_i128() as f64 / self.denominator.get().as_i128() as f64
    }
}

impl<I: SignedInteger> From<I> for Rational<I> {
    fn from(num: I) -> Self {
        Rational::from_integer(num)
    }
}

impl<I: SignedInteger> PartialOrd for Rational<I> {
    /// `None` when the cross products overflow; use
    /// [`Rational::try_cmp`] to observe the failure.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl<I: SignedInteger> InternalOrdering for Rational<I> {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        self.numerator
            .cmp(&other.numerator)
            .then_with(|| self.denominator.cmp(&other.denominator))
    }
}

impl<I: SignedInteger> Display for Rational<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            self.numerator.fmt(f)
        } else {
            self.numerator.fmt(f)?;
            f.write_char('/')?;
            self.denominator.fmt(f)
        }
    }
}

impl<I: SignedInteger> Display for RationalField<I> {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<I: SignedInteger> Ring for RationalField<I> {
    type Element = Rational<I>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.try_add(b)
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.try_sub(b)
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.try_mul(b)
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError> {
        *a = a.try_add(b)?;
        Ok(())
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError> {
        *a = a.try_sub(b)?;
        Ok(())
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError> {
        *a = a.try_mul(b)?;
        Ok(())
    }

    fn neg(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.neg()
    }

    fn zero(&self) -> Self::Element {
        Rational::zero()
    }

    fn one(&self) -> Self::Element {
        Rational::one()
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }
}

impl<I: SignedInteger> Field for RationalField<I> {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.try_div(b)
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) -> Result<(), ArithmeticError> {
        *a = a.try_div(b)?;
        Ok(())
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element, ArithmeticError> {
        a.inv()
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use super::Rational;
    use crate::domains::ArithmeticError;

    type R = Rational<i64>;

    #[test]
    fn normal_form() {
        assert_eq!(R::new(2, 4).unwrap(), R::new(1, 2).unwrap());
        assert_eq!(R::new(0, 5).unwrap(), R::zero());
        assert_eq!(R::new(1, -2).unwrap(), R::new(-1, 2).unwrap());
        assert_eq!(R::new(-1, -1).unwrap(), R::one());

        let r = R::new(-6, -10).unwrap();
        assert_eq!(r.numerator(), 3);
        assert_eq!(r.denominator(), 5);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(R::new(1, 0), Err(ArithmeticError::ZeroDenominator));
        assert_eq!(R::zero().inv(), Err(ArithmeticError::ZeroDenominator));
    }

    #[test]
    fn field_ops() {
        let half = R::new(1, 2).unwrap();
        let third = R::new(1, 3).unwrap();

        assert_eq!(
            half.neg().unwrap().try_add(&third).unwrap(),
            R::new(-1, 6).unwrap()
        );
        assert_eq!(third.try_sub(&R::new(2, 6).unwrap()).unwrap(), R::zero());
        assert_eq!(
            R::new(-1, 2).unwrap().try_mul(&R::new(-2, 3).unwrap()).unwrap(),
            third
        );
        assert_eq!(half.inv().unwrap(), R::from_integer(2));
        assert_eq!(
            R::new(2, 3).unwrap().try_div(&R::from_integer(3)).unwrap(),
            R::new(2, 9).unwrap()
        );
        assert_eq!(R::new(-1, 3).unwrap().neg().unwrap(), third);
    }

    #[test]
    fn comparison() {
        let third = R::new(1, 3).unwrap();
        let quarter = R::new(1, 4).unwrap();

        assert_eq!(third.try_cmp(&quarter).unwrap(), Ordering::Greater);
        assert_eq!(third.try_cmp(&third).unwrap(), Ordering::Equal);
        assert!(quarter < third);
        assert!(R::new(-1, 2).unwrap() < quarter);
    }

    #[test]
    fn overflow_surfaces() {
        let big = R::from_integer(i64::MAX);
        assert!(matches!(
            big.try_add(&big),
            Err(ArithmeticError::Overflow(_))
        ));
        assert!(matches!(
            big.try_mul(&big),
            Err(ArithmeticError::Overflow(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(R::new(-1, 2).unwrap().to_string(), "-1/2");
        assert_eq!(R::from_integer(7).to_string(), "7");
        assert_eq!(R::new(1, 2).unwrap().to_f64(), 0.5);
    }
}
