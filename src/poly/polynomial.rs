//! Sparse multivariate polynomials and deterministic polynomial sets.

use std::cmp::Ordering::{self, Equal};
use std::marker::PhantomData;

use crate::domains::{ArithmeticError, InternalOrdering, Ring};

use super::monomial::Monomial;
use super::{Exponent, LexOrder, MonomialOrder};

/// A sparse multivariate polynomial over the ring `F`.
///
/// The terms are kept strictly ascending under the monomial order `O`, so
/// the leading term sits at the back and no term carries a zero
/// coefficient. Polynomials under different orders are different types;
/// convert explicitly with [`MultivariatePolynomial::to_order`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MultivariatePolynomial<F: Ring, E: Exponent = u32, O: MonomialOrder = LexOrder> {
    terms: Vec<(Monomial<E>, F::Element)>,
    ring: F,
    _phantom: PhantomData<O>,
}

impl<F: Ring, E: Exponent, O: MonomialOrder> MultivariatePolynomial<F, E, O> {
    /// The zero polynomial.
    #[inline]
    pub fn new(ring: &F) -> Self {
        Self {
            terms: vec![],
            ring: ring.clone(),
            _phantom: PhantomData,
        }
    }

    /// The zero polynomial over the same ring.
    #[inline]
    pub fn zero(&self) -> Self {
        Self::new(&self.ring)
    }

    /// The constant polynomial `1`.
    #[inline]
    pub fn one(&self) -> Self {
        self.constant(self.ring.one())
    }

    /// A constant polynomial: a term with the unit monomial.
    pub fn constant(&self, coefficient: F::Element) -> Self {
        self.term(Monomial::unit(), coefficient)
    }

    /// A single monomial with coefficient `1`.
    pub fn monomial(&self, monomial: Monomial<E>) -> Self {
        self.term(monomial, self.ring.one())
    }

    /// A single term; a zero coefficient gives the zero polynomial.
    pub fn term(&self, monomial: Monomial<E>, coefficient: F::Element) -> Self {
        if F::is_zero(&coefficient) {
            return self.zero();
        }

        Self {
            terms: vec![(monomial, coefficient)],
            ring: self.ring.clone(),
            _phantom: PhantomData,
        }
    }

    /// Build a polynomial from an arbitrary term list: duplicate monomials
    /// are merged and terms that cancel to zero are dropped.
    pub fn from_terms<T>(ring: &F, terms: T) -> Result<Self, ArithmeticError>
    where
        T: IntoIterator<Item = (Monomial<E>, F::Element)>,
    {
        let mut p = Self::new(ring);
        for (monomial, coefficient) in terms {
            p.try_add_term(monomial, coefficient)?;
        }
        Ok(p)
    }

    #[inline]
    pub fn ring(&self) -> &F {
        &self.ring
    }

    #[inline]
    pub fn nterms(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        match self.terms.as_slice() {
            [] => true,
            [(m, _)] => m.is_unit(),
            _ => false,
        }
    }

    /// Terms from leading to trailing under the active order.
    #[inline]
    pub fn terms(
        &self,
    ) -> impl DoubleEndedIterator<Item = &(Monomial<E>, F::Element)> + ExactSizeIterator {
        self.terms.iter().rev()
    }

    /// Terms from trailing to leading.
    #[inline]
    pub fn terms_ascending(
        &self,
    ) -> impl DoubleEndedIterator<Item = &(Monomial<E>, F::Element)> + ExactSizeIterator {
        self.terms.iter()
    }

    /// The term with the maximum monomial under the active order.
    ///
    /// Panics on the zero polynomial; callers must check.
    #[inline]
    pub fn leading_term(&self) -> (&Monomial<E>, &F::Element) {
        let (m, c) = self
            .terms
            .last()
            .expect("leading term of the zero polynomial");
        (m, c)
    }

    #[inline]
    pub fn leading_monomial(&self) -> &Monomial<E> {
        self.leading_term().0
    }

    #[inline]
    pub fn leading_coefficient(&self) -> &F::Element {
        self.leading_term().1
    }

    /// The `index`-th term counting from the leading term.
    pub fn nth_term(&self, index: usize) -> (&Monomial<E>, &F::Element) {
        assert!(index < self.terms.len());
        let (m, c) = &self.terms[self.terms.len() - 1 - index];
        (m, c)
    }

    #[inline]
    fn position(&self, monomial: &Monomial<E>) -> Result<usize, usize> {
        self.terms
            .binary_search_by(|(m, _)| O::cmp(m.exponents(), monomial.exponents()))
    }

    /// Merge a single term in place: coefficients of an existing monomial
    /// are added and the entry is erased when the sum is zero.
    pub fn try_add_term(
        &mut self,
        monomial: Monomial<E>,
        coefficient: F::Element,
    ) -> Result<(), ArithmeticError> {
        if F::is_zero(&coefficient) {
            return Ok(());
        }

        match self.position(&monomial) {
            Ok(i) => {
                self.ring.add_assign(&mut self.terms[i].1, &coefficient)?;
                if F::is_zero(&self.terms[i].1) {
                    self.terms.remove(i);
                }
            }
            Err(i) => {
                self.terms.insert(i, (monomial, coefficient));
            }
        }

        self.check_invariants();
        Ok(())
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, ArithmeticError> {
        // merge of the two sorted term lists
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut i = 0;
        let mut j = 0;

        while i < self.terms.len() && j < other.terms.len() {
            match O::cmp(self.terms[i].0.exponents(), other.terms[j].0.exponents()) {
                Ordering::Less => {
                    terms.push(self.terms[i].clone());
                    i += 1;
                }
                Ordering::Greater => {
                    terms.push(other.terms[j].clone());
                    j += 1;
                }
                Ordering::Equal => {
                    let c = self.ring.add(&self.terms[i].1, &other.terms[j].1)?;
                    if !F::is_zero(&c) {
                        terms.push((self.terms[i].0.clone(), c));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend_from_slice(&self.terms[i..]);
        terms.extend_from_slice(&other.terms[j..]);

        let r = Self {
            terms,
            ring: self.ring.clone(),
            _phantom: PhantomData,
        };
        r.check_invariants();
        Ok(r)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, ArithmeticError> {
        self.try_add(&other.try_neg()?)
    }

    pub fn try_neg(&self) -> Result<Self, ArithmeticError> {
        let mut terms = Vec::with_capacity(self.terms.len());
        for (m, c) in &self.terms {
            terms.push((m.clone(), self.ring.neg(c)?));
        }

        Ok(Self {
            terms,
            ring: self.ring.clone(),
            _phantom: PhantomData,
        })
    }

    /// The distributive product.
    pub fn try_mul(&self, other: &Self) -> Result<Self, ArithmeticError> {
        let mut result = self.zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.try_add_term(m1.try_mul(m2)?, self.ring.mul(c1, c2)?)?;
            }
        }
        Ok(result)
    }

    /// Multiply by the single term `coefficient * monomial`.
    ///
    /// Monomial multiplication preserves the order, so the result is built
    /// without re-sorting.
    pub fn try_mul_term(
        &self,
        monomial: &Monomial<E>,
        coefficient: &F::Element,
    ) -> Result<Self, ArithmeticError> {
        if F::is_zero(coefficient) {
            return Ok(self.zero());
        }

        let mut terms = Vec::with_capacity(self.terms.len());
        for (m, c) in &self.terms {
            let c = self.ring.mul(c, coefficient)?;
            if !F::is_zero(&c) {
                terms.push((m.try_mul(monomial)?, c));
            }
        }

        let r = Self {
            terms,
            ring: self.ring.clone(),
            _phantom: PhantomData,
        };
        r.check_invariants();
        Ok(r)
    }

    pub fn try_mul_coeff(&self, coefficient: &F::Element) -> Result<Self, ArithmeticError> {
        self.try_mul_term(&Monomial::unit(), coefficient)
    }

    /// Rebuild the polynomial under another monomial order; the term set is
    /// unchanged.
    pub fn to_order<O2: MonomialOrder>(&self) -> MultivariatePolynomial<F, E, O2> {
        let mut terms = self.terms.clone();
        terms.sort_by(|(m1, _), (m2, _)| O2::cmp(m1.exponents(), m2.exponents()));

        MultivariatePolynomial {
            terms,
            ring: self.ring.clone(),
            _phantom: PhantomData,
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.terms.iter().all(|(_, c)| !F::is_zero(c)));
        debug_assert!(self
            .terms
            .windows(2)
            .all(|w| O::cmp(w[0].0.exponents(), w[1].0.exponents()) == Ordering::Less));
    }
}

impl<F: Ring, E: Exponent, O: MonomialOrder> InternalOrdering
    for MultivariatePolynomial<F, E, O>
{
    /// Deterministic comparison of the term sequences.
    fn internal_cmp(&self, other: &Self) -> Ordering {
        match self.terms.len().cmp(&other.terms.len()) {
            Equal => {}
            ord => return ord,
        }

        for ((m1, c1), (m2, c2)) in self.terms.iter().zip(&other.terms) {
            match m1.cmp(m2) {
                Equal => {}
                ord => return ord,
            }
            match c1.internal_cmp(c2) {
                Equal => {}
                ord => return ord,
            }
        }

        Equal
    }
}

/// A finite set of polynomials over the same ring and order.
///
/// The elements are kept sorted by the deterministic [`InternalOrdering`]
/// on their term sequences, so iteration is reproducible across runs;
/// insertion deduplicates structurally equal polynomials.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PolynomialSet<F: Ring, E: Exponent = u32, O: MonomialOrder = LexOrder> {
    elements: Vec<MultivariatePolynomial<F, E, O>>,
}

impl<F: Ring, E: Exponent, O: MonomialOrder> PolynomialSet<F, E, O> {
    #[inline]
    pub fn new() -> Self {
        PolynomialSet { elements: vec![] }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, MultivariatePolynomial<F, E, O>> {
        self.elements.iter()
    }

    #[inline]
    fn position(&self, poly: &MultivariatePolynomial<F, E, O>) -> Result<usize, usize> {
        self.elements.binary_search_by(|p| p.internal_cmp(poly))
    }

    /// Insert a polynomial; returns false when a structurally equal one is
    /// already present.
    pub fn insert(&mut self, poly: MultivariatePolynomial<F, E, O>) -> bool {
        match self.position(&poly) {
            Ok(_) => false,
            Err(i) => {
                self.elements.insert(i, poly);
                true
            }
        }
    }

    pub fn contains(&self, poly: &MultivariatePolynomial<F, E, O>) -> bool {
        self.position(poly).is_ok()
    }

    pub fn remove(&mut self, poly: &MultivariatePolynomial<F, E, O>) -> bool {
        match self.position(poly) {
            Ok(i) => {
                self.elements.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    /// Extract the first polynomial in set order.
    pub fn take_first(&mut self) -> Option<MultivariatePolynomial<F, E, O>> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    pub fn merge(&mut self, other: PolynomialSet<F, E, O>) {
        for p in other.elements {
            self.insert(p);
        }
    }
}

impl<F: Ring, E: Exponent, O: MonomialOrder> Default for PolynomialSet<F, E, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Ring, E: Exponent, O: MonomialOrder> FromIterator<MultivariatePolynomial<F, E, O>>
    for PolynomialSet<F, E, O>
{
    fn from_iter<T: IntoIterator<Item = MultivariatePolynomial<F, E, O>>>(iter: T) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl<'a, F: Ring, E: Exponent, O: MonomialOrder> IntoIterator for &'a PolynomialSet<F, E, O> {
    type Item = &'a MultivariatePolynomial<F, E, O>;
    type IntoIter = std::slice::Iter<'a, MultivariatePolynomial<F, E, O>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::domains::rational::{Rational, RationalField, Q};
    use crate::poly::monomial::Monomial;
    use crate::poly::{DegLexOrder, LexOrder};

    use super::{MultivariatePolynomial, PolynomialSet};

    type Poly<O> = MultivariatePolynomial<RationalField<i64>, u32, O>;

    fn from_exponent_rows<O: crate::poly::MonomialOrder>(rows: &[(&[u32], i64)]) -> Poly<O> {
        MultivariatePolynomial::from_terms(
            &Q,
            rows.iter()
                .map(|(e, c)| (Monomial::from_exponents(e), Rational::from_integer(*c))),
        )
        .unwrap()
    }

    #[test]
    fn term_merging() {
        let mut p: Poly<LexOrder> = MultivariatePolynomial::new(&Q);
        let m = Monomial::from_exponents(&[1, 1]);

        p.try_add_term(m.clone(), Rational::from_integer(2)).unwrap();
        p.try_add_term(Monomial::variable(0), Rational::from_integer(1))
            .unwrap();
        assert_eq!(p.nterms(), 2);

        // merging the opposite coefficient erases the term
        p.try_add_term(m, Rational::from_integer(-2)).unwrap();
        assert_eq!(p.nterms(), 1);

        p.try_add_term(Monomial::variable(0), Rational::from_integer(-1))
            .unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn lex_iteration_order() {
        // x0^2 x1^2 x2^2 + x0^6 + x0 x1^2 x2^4 + x0 x1^2 x2^3
        let p: Poly<LexOrder> = from_exponent_rows(&[
            (&[2, 2, 2], 1),
            (&[6], 1),
            (&[1, 2, 4], 1),
            (&[1, 2, 3], 1),
        ]);

        let leading: Vec<_> = p.terms().map(|(m, _)| m.exponents().to_vec()).collect();
        assert_eq!(
            leading,
            [vec![6], vec![2, 2, 2], vec![1, 2, 4], vec![1, 2, 3]]
        );
        assert_eq!(p.leading_monomial().exponents(), &[6]);
        assert_eq!(p.nth_term(2).0.exponents(), &[1, 2, 4]);
    }

    #[test]
    fn deglex_iteration_order() {
        let p: Poly<DegLexOrder> = from_exponent_rows(&[
            (&[2, 2, 2], 1),
            (&[6], 1),
            (&[1, 2, 4], 1),
            (&[1, 2, 3], 1),
        ]);

        let leading: Vec<_> = p.terms().map(|(m, _)| m.exponents().to_vec()).collect();
        assert_eq!(
            leading,
            [vec![1, 2, 4], vec![6], vec![2, 2, 2], vec![1, 2, 3]]
        );
    }

    #[test]
    fn arithmetic() {
        let p: Poly<LexOrder> = from_exponent_rows(&[(&[1], 1), (&[0, 1], 2)]);
        let q: Poly<LexOrder> = from_exponent_rows(&[(&[1], -1), (&[], 3)]);

        let sum = p.try_add(&q).unwrap();
        assert_eq!(sum, from_exponent_rows(&[(&[0, 1], 2), (&[], 3)]));

        let diff = p.try_sub(&p).unwrap();
        assert!(diff.is_zero());

        // (x0 + 2 x1)(-x0 + 3) = -x0^2 + 3 x0 - 2 x0 x1 + 6 x1
        let product = p.try_mul(&q).unwrap();
        assert_eq!(
            product,
            from_exponent_rows(&[(&[2], -1), (&[1], 3), (&[1, 1], -2), (&[0, 1], 6)])
        );
    }

    #[test]
    fn mul_term() {
        let p: Poly<LexOrder> = from_exponent_rows(&[(&[1, 1], 1), (&[], -1)]);
        let shifted = p
            .try_mul_term(&Monomial::variable(2), &Rational::from_integer(2))
            .unwrap();
        assert_eq!(
            shifted,
            from_exponent_rows(&[(&[1, 1, 1], 2), (&[0, 0, 1], -2)])
        );
    }

    #[test]
    fn order_round_trip() {
        let p: Poly<LexOrder> = from_exponent_rows(&[
            (&[2, 2, 2], 1),
            (&[6], 1),
            (&[1, 2, 4], 1),
            (&[1, 2, 3], 1),
        ]);

        let there: Poly<DegLexOrder> = p.to_order();
        let back: Poly<LexOrder> = there.to_order();
        assert_eq!(p, back);
    }

    #[test]
    fn set_determinism() {
        let p: Poly<LexOrder> = from_exponent_rows(&[(&[1], 1)]);
        let q: Poly<LexOrder> = from_exponent_rows(&[(&[1], 1), (&[], 1)]);

        let mut a = PolynomialSet::new();
        assert!(a.insert(q.clone()));
        assert!(a.insert(p.clone()));
        assert!(!a.insert(p.clone()));
        assert_eq!(a.len(), 2);

        let mut b = PolynomialSet::new();
        b.insert(p.clone());
        b.insert(q.clone());

        // identical contents iterate identically, whatever the insertion order
        let seq_a: Vec<_> = a.iter().collect();
        let seq_b: Vec<_> = b.iter().collect();
        assert_eq!(seq_a, seq_b);

        assert!(a.remove(&p));
        assert!(!a.contains(&p));
        assert_eq!(a.len(), 1);
    }
}
