//! The cyclic-n benchmark ideals.

use crate::domains::{ArithmeticError, Ring};

use super::monomial::Monomial;
use super::polynomial::{MultivariatePolynomial, PolynomialSet};
use super::{Exponent, MonomialOrder};

/// The n-th rotational sum in `m` variables:
/// `sum_{i < m} x_i x_{i+1} ... x_{i+n-1}` with indices mod `m`.
pub fn cyclic_polynomial<F: Ring, E: Exponent, O: MonomialOrder>(
    ring: &F,
    n: usize,
    m: usize,
) -> Result<MultivariatePolynomial<F, E, O>, ArithmeticError> {
    let mut p = MultivariatePolynomial::new(ring);

    for i in 0..m {
        let mut exponents = vec![E::zero(); m];
        for j in 0..n {
            let v = (i + j) % m;
            exponents[v] = exponents[v].checked_add(&E::one()).ok_or_else(|| {
                ArithmeticError::Overflow(format!("exponent of x{} in cyclic sum", v))
            })?;
        }
        p.try_add_term(Monomial::from_exponents(&exponents), ring.one())?;
    }

    Ok(p)
}

/// The classical cyclic-m ideal: the rotational sums `p_1 .. p_{m-1}`
/// together with the relation `x_0 x_1 ... x_{m-1} - 1`.
pub fn build_cycle_set<F: Ring, E: Exponent, O: MonomialOrder>(
    ring: &F,
    m: usize,
) -> Result<PolynomialSet<F, E, O>, ArithmeticError> {
    let mut set = PolynomialSet::new();
    if m == 0 {
        return Ok(set);
    }

    for n in 1..m {
        set.insert(cyclic_polynomial(ring, n, m)?);
    }

    let mut relation = MultivariatePolynomial::new(ring);
    relation.try_add_term(Monomial::from_exponents(&vec![E::one(); m]), ring.one())?;
    relation.try_add_term(Monomial::unit(), ring.neg(&ring.one())?)?;
    set.insert(relation);

    Ok(set)
}
