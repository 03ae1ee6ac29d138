//! Multivariate reduction and Buchberger's completion procedure.

use tracing::debug;

use crate::domains::{ArithmeticError, Field};

use super::polynomial::{MultivariatePolynomial, PolynomialSet};
use super::{Exponent, MonomialOrder};

/// The S-polynomial of two nonzero polynomials:
/// `(L / LM f) (1 / LC f) f - (L / LM g) (1 / LC g) g` with
/// `L = lcm(LM f, LM g)`.
///
/// The leading terms cancel by construction, so the result is zero or has a
/// leading monomial strictly below `L`.
pub fn s_polynomial<F: Field, E: Exponent, O: MonomialOrder>(
    f: &MultivariatePolynomial<F, E, O>,
    g: &MultivariatePolynomial<F, E, O>,
) -> Result<MultivariatePolynomial<F, E, O>, ArithmeticError> {
    let ring = f.ring().clone();
    let (lm_f, lc_f) = f.leading_term();
    let (lm_g, lc_g) = g.leading_term();
    let lcm = lm_f.lcm(lm_g);

    let left = f.try_mul_term(&lcm.try_div(lm_f)?, &ring.inv(lc_f)?)?;
    let right = g.try_mul_term(&lcm.try_div(lm_g)?, &ring.inv(lc_g)?)?;
    left.try_sub(&right)
}

/// Perform one elementary reduction of `reducible` by the nonzero reductor
/// `other`: the highest term divisible by the reductor's leading monomial is
/// eliminated. Returns false when no term is eligible.
pub fn elementary_reduction<F: Field, E: Exponent, O: MonomialOrder>(
    reducible: &mut MultivariatePolynomial<F, E, O>,
    other: &MultivariatePolynomial<F, E, O>,
) -> Result<bool, ArithmeticError> {
    let ring = reducible.ring().clone();
    let (lm, lc) = other.leading_term();

    // leading term first, so the quotient terms shrink monotonically
    let Some((monomial, coefficient)) = reducible
        .terms()
        .find(|(m, _)| m.is_divisible_by(lm))
        .map(|(m, c)| (m.clone(), c.clone()))
    else {
        return Ok(false);
    };

    let quotient = other.try_mul_term(&monomial.try_div(lm)?, &ring.div(&coefficient, lc)?)?;
    *reducible = reducible.try_sub(&quotient)?;
    Ok(true)
}

/// Reduce by a single reductor until it no longer applies; returns the
/// number of reductions performed.
pub fn chain_reduction<F: Field, E: Exponent, O: MonomialOrder>(
    reducible: &mut MultivariatePolynomial<F, E, O>,
    other: &MultivariatePolynomial<F, E, O>,
) -> Result<usize, ArithmeticError> {
    let mut count = 0;
    while elementary_reduction(reducible, other)? {
        count += 1;
    }
    Ok(count)
}

/// One sweep over the set in its deterministic order, chaining reductions
/// per reductor.
pub fn reduce_over<F: Field, E: Exponent, O: MonomialOrder>(
    reducible: &mut MultivariatePolynomial<F, E, O>,
    set: &PolynomialSet<F, E, O>,
) -> Result<usize, ArithmeticError> {
    let mut count = 0;
    for other in set {
        count += chain_reduction(reducible, other)?;
    }
    Ok(count)
}

/// Reduce to a normal form with respect to `set`: sweep until a full pass
/// performs no reduction. Afterwards no term of `reducible` is divisible by
/// any leading monomial of the set.
pub fn chain_reduce_over<F: Field, E: Exponent, O: MonomialOrder>(
    reducible: &mut MultivariatePolynomial<F, E, O>,
    set: &PolynomialSet<F, E, O>,
) -> Result<usize, ArithmeticError> {
    let mut total = 0;
    loop {
        let count = reduce_over(reducible, set)?;
        if count == 0 {
            return Ok(total);
        }
        total += count;
    }
}

/// Inter-reduce the set to a fixed point: every element ends up reduced
/// with respect to all the others, zero remainders are dropped.
pub fn reduce_set<F: Field, E: Exponent, O: MonomialOrder>(
    set: &mut PolynomialSet<F, E, O>,
) -> Result<usize, ArithmeticError> {
    let mut total = 0;
    loop {
        let mut reduced = PolynomialSet::new();
        let mut count = 0;

        while let Some(mut f) = set.take_first() {
            count += reduce_over(&mut f, set)?;
            count += reduce_over(&mut f, &reduced)?;
            if !f.is_zero() {
                reduced.insert(f);
            }
        }

        *set = reduced;
        if count == 0 {
            return Ok(total);
        }
        total += count;
    }
}

/// Scale every element of the set monic.
pub fn normalize_set<F: Field, E: Exponent, O: MonomialOrder>(
    set: &mut PolynomialSet<F, E, O>,
) -> Result<(), ArithmeticError> {
    let mut normalized = PolynomialSet::new();
    while let Some(f) = set.take_first() {
        let inv = f.ring().inv(f.leading_coefficient())?;
        normalized.insert(f.try_mul_coeff(&inv)?);
    }
    *set = normalized;
    Ok(())
}

/// Collect the nonzero normal forms of the S-polynomials over all pairs,
/// skipping pairs whose leading monomials are coprime (their S-polynomial
/// is guaranteed to reduce to zero).
fn find_pairs<F: Field, E: Exponent, O: MonomialOrder>(
    set: &PolynomialSet<F, E, O>,
) -> Result<PolynomialSet<F, E, O>, ArithmeticError> {
    let mut discovered = PolynomialSet::new();

    for (i, f) in set.iter().enumerate() {
        for g in set.iter().take(i) {
            let lm_f = f.leading_monomial();
            let lm_g = g.leading_monomial();
            if lm_f.try_mul(lm_g)? == lm_f.lcm(lm_g) {
                continue;
            }

            let mut s = s_polynomial(f, g)?;
            chain_reduce_over(&mut s, set)?;
            if !s.is_zero() {
                discovered.insert(s);
            }
        }
    }

    Ok(discovered)
}

/// Buchberger's completion: extend `set` to the reduced monic Gröbner basis
/// of the ideal it generates.
///
/// Terminates because the ideal of leading monomials grows strictly in
/// every round that discovers a new remainder.
pub fn buchberger<F: Field, E: Exponent, O: MonomialOrder>(
    set: &mut PolynomialSet<F, E, O>,
) -> Result<(), ArithmeticError> {
    let mut round = 1usize;
    loop {
        let discovered = find_pairs(set)?;
        reduce_set(set)?;
        normalize_set(set)?;

        debug!(
            round,
            basis = set.len(),
            discovered = discovered.len(),
            "buchberger round"
        );

        if discovered.is_empty() {
            return Ok(());
        }

        set.merge(discovered);
        round += 1;
    }
}

/// Buchberger's criterion: the set is a Gröbner basis iff every pair's
/// S-polynomial reduces to zero over the set.
pub fn is_groebner_basis<F: Field, E: Exponent, O: MonomialOrder>(
    set: &PolynomialSet<F, E, O>,
) -> Result<bool, ArithmeticError> {
    for (i, f) in set.iter().enumerate() {
        for g in set.iter().take(i) {
            let mut s = s_polynomial(f, g)?;
            chain_reduce_over(&mut s, set)?;
            if !s.is_zero() {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// A reduced monic Gröbner basis of a polynomial ideal.
#[derive(Clone, Debug)]
pub struct GroebnerBasis<F: Field, E: Exponent, O: MonomialOrder> {
    system: PolynomialSet<F, E, O>,
}

impl<F: Field, E: Exponent, O: MonomialOrder> GroebnerBasis<F, E, O> {
    /// Complete the generating set of an ideal to its reduced Gröbner
    /// basis.
    pub fn of(ideal: PolynomialSet<F, E, O>) -> Result<GroebnerBasis<F, E, O>, ArithmeticError> {
        let mut system = ideal;
        buchberger(&mut system)?;
        Ok(GroebnerBasis { system })
    }

    pub fn system(&self) -> &PolynomialSet<F, E, O> {
        &self.system
    }

    pub fn into_system(self) -> PolynomialSet<F, E, O> {
        self.system
    }

    /// Ideal membership: `f` lies in the ideal iff its normal form over the
    /// basis is zero.
    pub fn contains(
        &self,
        f: &MultivariatePolynomial<F, E, O>,
    ) -> Result<bool, ArithmeticError> {
        let mut r = f.clone();
        chain_reduce_over(&mut r, &self.system)?;
        Ok(r.is_zero())
    }
}
