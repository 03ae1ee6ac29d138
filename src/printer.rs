//! Diagnostic text output for monomials and polynomials.
//!
//! The grammar is meant for humans and tests; it is not a stable interface.

use std::fmt::{self, Display, Formatter};

use crate::domains::Ring;
use crate::poly::monomial::Monomial;
use crate::poly::polynomial::MultivariatePolynomial;
use crate::poly::{Exponent, MonomialOrder};

/// Options for textual output.
#[derive(Clone, Copy, Debug)]
pub struct PrintOptions {
    /// Prefix for generated variable names: `"x"` gives `x0`, `x1`, ...
    pub variable_prefix: &'static str,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            variable_prefix: "x",
        }
    }
}

/// A borrowing printer for a monomial.
pub struct MonomialPrinter<'a, E: Exponent> {
    pub monomial: &'a Monomial<E>,
    pub opts: PrintOptions,
}

impl<'a, E: Exponent> MonomialPrinter<'a, E> {
    pub fn new(monomial: &'a Monomial<E>) -> Self {
        MonomialPrinter {
            monomial,
            opts: PrintOptions::default(),
        }
    }
}

impl<E: Exponent> Display for MonomialPrinter<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.monomial.is_unit() {
            return f.write_str("1");
        }

        let mut first = true;
        for (index, e) in self.monomial.exponents().iter().enumerate() {
            if e.is_zero() {
                continue;
            }

            if !first {
                f.write_str("*")?;
            }
            first = false;

            write!(f, "{}{}", self.opts.variable_prefix, index)?;
            if *e != E::one() {
                write!(f, "^{}", e)?;
            }
        }

        Ok(())
    }
}

/// A borrowing printer for a polynomial.
pub struct PolynomialPrinter<'a, F: Ring, E: Exponent, O: MonomialOrder> {
    pub poly: &'a MultivariatePolynomial<F, E, O>,
    pub opts: PrintOptions,
}

impl<'a, F: Ring, E: Exponent, O: MonomialOrder> PolynomialPrinter<'a, F, E, O> {
    pub fn new(poly: &'a MultivariatePolynomial<F, E, O>) -> Self {
        PolynomialPrinter {
            poly,
            opts: PrintOptions::default(),
        }
    }
}

impl<F: Ring, E: Exponent, O: MonomialOrder> Display for PolynomialPrinter<'_, F, E, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.poly.is_zero() {
            return f.write_str("0");
        }

        let ring = self.poly.ring();
        let mut first = true;
        for (monomial, coefficient) in self.poly.terms() {
            // fold a leading minus of the coefficient into the separator
            let rendered = coefficient.to_string();
            let (sign, magnitude) = match rendered.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("+", rendered.as_str()),
            };

            if first {
                if sign == "-" {
                    f.write_str("-")?;
                }
            } else {
                write!(f, " {} ", sign)?;
            }
            first = false;

            let monomial = MonomialPrinter {
                monomial,
                opts: self.opts,
            };

            if monomial.monomial.is_unit() {
                f.write_str(magnitude)?;
            } else if ring.is_one(coefficient)
                || ring.neg(coefficient).map_or(false, |n| ring.is_one(&n))
            {
                write!(f, "{}", monomial)?;
            } else {
                write!(f, "{}*{}", magnitude, monomial)?;
            }
        }

        Ok(())
    }
}

impl<E: Exponent> Display for Monomial<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        MonomialPrinter::new(self).fmt(f)
    }
}

impl<F: Ring, E: Exponent, O: MonomialOrder> Display for MultivariatePolynomial<F, E, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        PolynomialPrinter::new(self).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use crate::domains::rational::{Rational, RationalField, Q};
    use crate::poly::monomial::Monomial;
    use crate::poly::polynomial::MultivariatePolynomial;
    use crate::poly::LexOrder;

    type Poly = MultivariatePolynomial<RationalField<i64>, u32, LexOrder>;

    fn poly(rows: &[(&[u32], i64)]) -> Poly {
        MultivariatePolynomial::from_terms(
            &Q,
            rows.iter()
                .map(|(e, c)| (Monomial::from_exponents(e), Rational::from_integer(*c))),
        )
        .unwrap()
    }

    #[test]
    fn monomials() {
        assert_eq!(Monomial::<u32>::unit().to_string(), "1");
        assert_eq!(Monomial::<u32>::from_exponents(&[1, 0, 3]).to_string(), "x0*x2^3");
        assert_eq!(Monomial::<u32>::variable(1).to_string(), "x1");
    }

    #[test]
    fn polynomials() {
        assert_eq!(poly(&[]).to_string(), "0");
        assert_eq!(poly(&[(&[], 5)]).to_string(), "5");
        assert_eq!(
            poly(&[(&[2], 1), (&[1, 1], -2), (&[], 1)]).to_string(),
            "x0^2 - 2*x0*x1 + 1"
        );
        assert_eq!(poly(&[(&[1], -1), (&[], -1)]).to_string(), "-x0 - 1");
    }
}
