//! Monomials as shrunk exponent vectors.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::domains::ArithmeticError;

use super::{Exponent, INLINED_EXPONENTS};

/// The exponent vector of a power product.
///
/// The vector is kept shrunk: either empty, or its last entry is nonzero.
/// The exponent of any variable past the stored length is zero, so
/// structural equality of the vectors is equality of monomials regardless of
/// trailing zeros.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Monomial<E: Exponent = u32> {
    exponents: SmallVec<[E; INLINED_EXPONENTS]>,
}

impl<E: Exponent> Monomial<E> {
    /// The monomial `1`.
    #[inline]
    pub fn unit() -> Monomial<E> {
        Monomial {
            exponents: SmallVec::new(),
        }
    }

    /// The monomial `x_index`.
    pub fn variable(index: usize) -> Monomial<E> {
        let mut exponents = SmallVec::from_elem(E::zero(), index + 1);
        exponents[index] = E::one();
        Monomial { exponents }
    }

    pub fn from_exponents(exponents: &[E]) -> Monomial<E> {
        let mut m = Monomial {
            exponents: SmallVec::from_slice(exponents),
        };
        m.shrink();
        m
    }

    #[inline]
    pub fn exponents(&self) -> &[E] {
        &self.exponents
    }

    /// One past the largest variable index with a nonzero exponent.
    #[inline]
    pub fn nvars(&self) -> usize {
        self.exponents.len()
    }

    #[inline]
    pub fn degree(&self, variable: usize) -> E {
        self.exponents
            .get(variable)
            .copied()
            .unwrap_or_else(E::zero)
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The sum of all exponents.
    pub fn total_degree(&self) -> Result<E, ArithmeticError> {
        let mut sum = E::zero();
        for e in &self.exponents {
            sum = sum.checked_add(e).ok_or_else(|| {
                ArithmeticError::Overflow(format!("total degree of {}", self))
            })?;
        }
        Ok(sum)
    }

    pub fn try_mul(&self, other: &Monomial<E>) -> Result<Monomial<E>, ArithmeticError> {
        let n = self.nvars().max(other.nvars());
        let mut exponents = SmallVec::with_capacity(n);
        for i in 0..n {
            let e = self.degree(i).checked_add(&other.degree(i)).ok_or_else(|| {
                ArithmeticError::Overflow(format!("{} * {}", self, other))
            })?;
            exponents.push(e);
        }

        let mut m = Monomial { exponents };
        m.shrink();
        Ok(m)
    }

    /// Whether `other` divides this monomial.
    pub fn is_divisible_by(&self, other: &Monomial<E>) -> bool {
        other.nvars() <= self.nvars()
            && self
                .exponents
                .iter()
                .zip(&other.exponents)
                .all(|(a, b)| a >= b)
    }

    /// Exponent-wise subtraction; fails with
    /// [`ArithmeticError::NotDivisible`] when any exponent would go
    /// negative or the divisor involves more variables.
    pub fn try_div(&self, other: &Monomial<E>) -> Result<Monomial<E>, ArithmeticError> {
        if !self.is_divisible_by(other) {
            return Err(ArithmeticError::NotDivisible);
        }

        let mut exponents = self.exponents.clone();
        for (e, d) in exponents.iter_mut().zip(&other.exponents) {
            *e = *e - *d;
        }

        let mut m = Monomial { exponents };
        m.shrink();
        Ok(m)
    }

    /// The least common multiple: the exponent-wise maximum.
    pub fn lcm(&self, other: &Monomial<E>) -> Monomial<E> {
        let n = self.nvars().max(other.nvars());
        let mut exponents = SmallVec::with_capacity(n);
        for i in 0..n {
            exponents.push(self.degree(i).max(other.degree(i)));
        }

        let mut m = Monomial { exponents };
        m.shrink();
        m
    }

    fn shrink(&mut self) {
        while self.exponents.last().map_or(false, |e| e.is_zero()) {
            self.exponents.pop();
        }
    }
}

impl<E: Exponent> PartialOrd for Monomial<E> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Exponent> Ord for Monomial<E> {
    /// Canonical lexicographic comparison of the shrunk vectors from index
    /// 0 upward: a deterministic tiebreaker, not an admissible monomial
    /// order.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.exponents.cmp(&other.exponents)
    }
}

#[cfg(test)]
mod test {
    use super::Monomial;
    use crate::domains::ArithmeticError;

    type M = Monomial<u32>;

    #[test]
    fn shrink_invariant() {
        assert_eq!(M::from_exponents(&[1, 2, 0, 0]), M::from_exponents(&[1, 2]));
        assert_eq!(M::from_exponents(&[0, 0]), M::unit());
        assert_eq!(M::from_exponents(&[1, 0, 2]).nvars(), 3);
        assert_eq!(M::variable(2).exponents(), &[0, 0, 1]);
    }

    #[test]
    fn degrees() {
        let m = M::from_exponents(&[1, 0, 3]);
        assert_eq!(m.degree(0), 1);
        assert_eq!(m.degree(2), 3);
        assert_eq!(m.degree(7), 0);
        assert_eq!(m.total_degree().unwrap(), 4);
        assert_eq!(M::unit().total_degree().unwrap(), 0);
    }

    #[test]
    fn mul() {
        let a = M::from_exponents(&[1, 2]);
        let b = M::from_exponents(&[0, 1, 3]);
        assert_eq!(a.try_mul(&b).unwrap(), M::from_exponents(&[1, 3, 3]));
        assert_eq!(a.try_mul(&M::unit()).unwrap(), a);

        let huge = M::from_exponents(&[u32::MAX]);
        assert!(matches!(
            huge.try_mul(&M::variable(0)),
            Err(ArithmeticError::Overflow(_))
        ));
    }

    #[test]
    fn div() {
        let a = M::from_exponents(&[1, 2, 3, 4]);
        assert_eq!(
            a.try_div(&M::from_exponents(&[0, 0, 0, 4])).unwrap(),
            M::from_exponents(&[1, 2, 3])
        );
        assert_eq!(
            M::from_exponents(&[1, 2, 3]).try_div(&M::from_exponents(&[1, 0, 0, 1])),
            Err(ArithmeticError::NotDivisible)
        );
        assert_eq!(
            a.try_div(&M::from_exponents(&[2])),
            Err(ArithmeticError::NotDivisible)
        );
        assert_eq!(a.try_div(&a).unwrap(), M::unit());
    }

    #[test]
    fn divisibility() {
        let a = M::from_exponents(&[2, 1]);
        assert!(a.is_divisible_by(&M::from_exponents(&[1, 1])));
        assert!(a.is_divisible_by(&M::unit()));
        assert!(!a.is_divisible_by(&M::from_exponents(&[3, 1])));
        assert!(!a.is_divisible_by(&M::variable(2)));
    }

    #[test]
    fn lcm() {
        let a = M::from_exponents(&[1, 2]);
        let b = M::from_exponents(&[2, 0, 1]);
        assert_eq!(a.lcm(&b), M::from_exponents(&[2, 2, 1]));
        assert_eq!(a.lcm(&M::unit()), a);
    }
}
