//! Gröbner bases of multivariate polynomial ideals by Buchberger's
//! algorithm.
//!
//! The crate provides
//! - exact rational arithmetic over overflow-checked machine integers
//! - monomials as trimmed exponent vectors with divisibility algebra
//! - sparse multivariate polynomials sorted by a pluggable monomial order
//! - multivariate reduction, inter-reduction and Buchberger's completion
//!
//! All arithmetic is exact: coefficients are rationals in lowest terms and
//! every integer operation is overflow-checked, so an overflow surfaces as
//! an error instead of a wrong basis.
//!
//! # Example
//! Compute the reduced Gröbner basis of the cyclic-3 ideal over `Q`:
//!
//! ```rust
//! use groebner::domains::rational::Q;
//! use groebner::poly::cyclic::build_cycle_set;
//! use groebner::poly::groebner::GroebnerBasis;
//! use groebner::poly::LexOrder;
//!
//! let ideal = build_cycle_set::<_, u32, LexOrder>(&Q, 3).unwrap();
//! let basis = GroebnerBasis::of(ideal).unwrap();
//!
//! for p in basis.system() {
//!     println!("{}", p);
//! }
//! ```

pub mod domains;
pub mod poly;
pub mod printer;
